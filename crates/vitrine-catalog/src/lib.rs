//! Vitrine Catalog — the static project-navigation data model.
//!
//! The catalog is a hand-maintained configuration file: site-wide settings
//! plus an ordered list of groups, each holding an ordered list of projects
//! with descriptive metadata. Ordering is display-significant — groups and
//! projects render in declaration order.
//!
//! The catalog is pure data. There are no operations beyond read access;
//! malformed entries are a configuration-authoring concern, surfaced when
//! the file is loaded, not at runtime.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod types;

// Re-exports for convenience
pub use catalog::Catalog;
pub use types::{Group, Project, SiteConfig, Status};
