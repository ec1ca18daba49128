//! The sequential README sync loop.
//!
//! Projects are processed one at a time, in catalog order; within a
//! project, candidate URLs are tried one at a time, stopping at the first
//! success. A project ends up in exactly one of three terminal states:
//! skipped (internal host while the policy is active), fetched, or failed
//! (no candidates, or every candidate errored or came back empty — the
//! two are deliberately not distinguished).

use crate::cache::{ReadmeCache, ReadmeEntry};
use crate::candidates::readme_candidates;
use crate::fetch::Fetch;
use crate::policy::SkipPolicy;
use std::path::Path;
use vitrine_catalog::Catalog;
use vitrine_core::Result;

/// Outcome counts for one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Total entries in the cache after the run (old and new)
    pub cached: usize,
    /// Keys of projects where no candidate succeeded this run
    pub failed: Vec<String>,
    /// Keys of projects skipped by the internal-host policy
    pub skipped: Vec<String>,
}

impl SyncReport {
    /// The one-line summary printed at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "readmes: {} | failures: {} | skipped: {}",
            self.cached,
            self.failed.len(),
            self.skipped.len()
        )
    }
}

/// Run the fetch loop over every project, merging winners into `cache`.
///
/// Projects missing both a key and a repository URL are excluded
/// entirely. Failures leave any prior cache entry untouched. Nothing in
/// the loop is fatal: every project is always attempted.
pub async fn sync(
    catalog: &Catalog,
    fetcher: &dyn Fetch,
    policy: &SkipPolicy,
    cache: &mut ReadmeCache,
) -> SyncReport {
    let mut failed = Vec::new();
    let mut skipped = Vec::new();

    for (_, project) in catalog.projects() {
        let Some(key) = project.key() else {
            continue;
        };
        if project.repo_url.is_empty() {
            continue;
        }
        if policy.should_skip(&project.repo_url) {
            tracing::debug!(key, repo_url = %project.repo_url, "Skipping internal host");
            skipped.push(key.to_string());
            continue;
        }

        let candidates = readme_candidates(&project.repo_url);
        let mut found = false;

        for candidate in &candidates {
            match fetcher.fetch_text(candidate).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::debug!(key, source = %candidate, "README fetched");
                    cache.insert(key, ReadmeEntry::new(text, candidate.clone()));
                    found = true;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(key, candidate = %candidate, error = %e, "Candidate failed");
                }
            }
        }

        if !found {
            failed.push(key.to_string());
        }
    }

    SyncReport {
        cached: cache.len(),
        failed,
        skipped,
    }
}

/// Load the cache at `output`, sync into it, and write it back.
///
/// This is the whole script in one call: read-modify-write persistence
/// around [`sync`]. The output file is written exactly once, after every
/// project has been attempted.
pub async fn sync_to_file(
    catalog: &Catalog,
    fetcher: &dyn Fetch,
    policy: &SkipPolicy,
    output: &Path,
) -> Result<SyncReport> {
    let mut cache = ReadmeCache::load(output);
    let report = sync(catalog, fetcher, policy, &mut cache).await;
    cache.save(output)?;
    Ok(report)
}
