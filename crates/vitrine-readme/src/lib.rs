//! Vitrine Readme — best-effort README fetching for the project catalog.
//!
//! For every catalog project with a repository URL, derive a set of
//! candidate raw-content URLs, fetch them in order until one yields
//! non-empty text, and merge the winners into a persisted JSON cache.
//! Prior successful entries survive failed runs; internal hosts are
//! skipped when the policy is active.
//!
//! # Modules
//!
//! - [`candidates`]: pure candidate-URL derivation
//! - [`policy`]: internal-host skip policy
//! - [`fetch`]: the [`Fetch`] trait, HTTP and mock implementations
//! - [`cache`]: the persisted key → `{raw, source}` mapping
//! - [`sync`]: the sequential fetch loop and run report

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod candidates;
pub mod fetch;
pub mod policy;
pub mod sync;

// Re-exports for convenience
pub use cache::{ReadmeCache, ReadmeEntry};
pub use candidates::readme_candidates;
pub use fetch::{Fetch, HttpFetcher, MockFetcher};
pub use policy::SkipPolicy;
pub use sync::{SyncReport, sync, sync_to_file};
