//! Catalog loading and iteration.

use crate::types::{Group, Project, SiteConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vitrine_core::{Error, Result};

/// The full catalog: site settings plus ordered project groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Site-wide settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Project groups in display order
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::catalog_parse(e.to_string()))
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Iterate every `(group, project)` pair in declaration order.
    pub fn projects(&self) -> impl Iterator<Item = (&Group, &Project)> {
        self.groups
            .iter()
            .flat_map(|group| group.projects.iter().map(move |project| (group, project)))
    }

    /// Total number of projects across all groups.
    pub fn project_count(&self) -> usize {
        self.groups.iter().map(|g| g.projects.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Status;

    const SAMPLE: &str = r#"
[site]
title = "Projects"
subtitle = "One landing page for everything"

[site.links]
github = "https://github.com/someone"

[[groups]]
id = "pinned"
name = "Pinned"

[[groups.projects]]
id = "pinned-1"
name = "Talks"
repo_url = "https://github.com/someone/talks"
status = "online"

[[groups.projects]]
id = "pinned-2"
name = "Ops Scripts"
repo_url = "https://git.internal.example/someone/ops"
status = "archived"

[[groups]]
id = "experiments"
name = "Experiments"

[[groups.projects]]
name = "Toy Renderer"
tech_stack = ["Rust", "wgpu"]
status = "wip"
"#;

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        assert_eq!(catalog.site.title, "Projects");
        assert_eq!(catalog.groups.len(), 2);
        assert_eq!(catalog.project_count(), 3);
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let keys: Vec<&str> = catalog
            .projects()
            .filter_map(|(_, p)| p.key())
            .collect();
        assert_eq!(keys, vec!["pinned-1", "pinned-2", "Toy Renderer"]);
    }

    #[test]
    fn test_group_carried_with_project() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let (group, project) = catalog.projects().last().unwrap();
        assert_eq!(group.id, "experiments");
        assert_eq!(project.status, Status::Wip);
    }

    #[test]
    fn test_parse_error_is_catalog_parse() {
        let err = Catalog::from_toml_str("groups = \"not a list\"").unwrap_err();
        assert!(matches!(
            err,
            vitrine_core::Error::CatalogParse { .. }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert_eq!(catalog.project_count(), 0);
        assert!(catalog.projects().next().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.project_count(), 3);
    }
}
