//! Common test utilities for readme sync integration tests.

use vitrine_catalog::Catalog;
use vitrine_readme::MockFetcher;

/// Two-group catalog used across the integration suite: one GitHub repo,
/// one internal-forge repo, one project without a repository URL.
pub fn sample_catalog() -> Catalog {
    let toml = r#"
[site]
title = "Projects"

[[groups]]
id = "pinned"
name = "Pinned"

[[groups.projects]]
id = "talks"
name = "Talks"
repo_url = "https://github.com/someone/talks"

[[groups.projects]]
id = "ops"
name = "Ops Scripts"
repo_url = "http://git.internal.example/someone/ops"

[[groups]]
id = "experiments"
name = "Experiments"

[[groups.projects]]
id = "toy"
name = "Toy Renderer"
"#;
    Catalog::from_toml_str(toml).expect("sample catalog must parse")
}

/// A mock that answers the talks repo on its first candidate.
pub fn mock_with_talks_readme() -> MockFetcher {
    MockFetcher::new().with_body(
        "https://raw.githubusercontent.com/someone/talks/HEAD/README.md",
        "# Talks\n\nSlides and demos.",
    )
}
