//! Catalog record types.
//!
//! These mirror the hand-authored TOML structure one-to-one. Most fields
//! default so that terse entries stay terse — only `name` is genuinely
//! required for a project to render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site-wide settings consumed by the page builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page title
    #[serde(default)]
    pub title: String,

    /// Short tagline rendered under the title
    #[serde(default)]
    pub subtitle: String,

    /// Longer description used for meta tags
    #[serde(default)]
    pub description: String,

    /// Named outbound links (github, blog, ...), rendered in order of key
    #[serde(default)]
    pub links: BTreeMap<String, String>,

    /// Default theme: "light", "dark" or "system"
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

fn default_theme() -> String {
    "system".to_string()
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Deployed and reachable
    #[default]
    Online,
    /// Work in progress
    Wip,
    /// No longer maintained
    Archived,
}

/// One project entry. Created by manual edit of the catalog; immutable at
/// runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Unique key, used to key the README cache
    #[serde(default)]
    pub id: String,

    /// Display name (fallback cache key when `id` is absent)
    #[serde(default)]
    pub name: String,

    /// One-paragraph description
    #[serde(default)]
    pub description: String,

    /// Ordered tech-stack labels
    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Repository URL; empty means "no repo, never fetched"
    #[serde(default)]
    pub repo_url: String,

    /// Live demo URL, if any
    #[serde(default)]
    pub demo_url: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: Status,

    /// Whether the page builder should visually highlight this entry
    #[serde(default)]
    pub highlight: bool,
}

impl Project {
    /// The cache key for this project: `id`, falling back to `name`.
    ///
    /// Returns `None` when both are empty — such projects are silently
    /// excluded from README processing.
    pub fn key(&self) -> Option<&str> {
        if !self.id.is_empty() {
            Some(&self.id)
        } else if !self.name.is_empty() {
            Some(&self.name)
        } else {
            None
        }
    }
}

/// An ordered group of projects. Insertion order is render order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// Stable group identifier
    #[serde(default)]
    pub id: String,

    /// Group heading
    #[serde(default)]
    pub name: String,

    /// Group description
    #[serde(default)]
    pub description: String,

    /// Projects in display order
    #[serde(default)]
    pub projects: Vec<Project>,
}
