//! Candidate raw-content URL derivation.
//!
//! This is the one genuine algorithm in the fetcher: given a repository
//! URL, produce the ordered list of raw-content URLs worth trying for a
//! README, without performing any network I/O.
//!
//! Derivation steps:
//!
//! 1. Normalize the URL (strip fragment, trailing `.git`, `/tree/...` or
//!    `/blob/...` suffixes, trailing slash).
//! 2. Extract a branch hint from any `/tree/<x>` or `/blob/<x>` segment
//!    in the original URL.
//! 3. Build an order-preserving, deduplicated branch list — GitHub repos
//!    try `HEAD` before `main`/`master`; other forges try `master` first.
//! 4. Cross every branch with the fixed README filename variants,
//!    branch-major.
//!
//! # Example
//!
//! ```
//! use vitrine_readme::candidates::readme_candidates;
//!
//! let candidates = readme_candidates("https://github.com/o/r");
//! assert_eq!(
//!     candidates[0],
//!     "https://raw.githubusercontent.com/o/r/HEAD/README.md"
//! );
//! ```

use regex::Regex;
use url::Url;
use vitrine_core::unique_nonempty;

/// README filename variants, tried in this order for every branch.
pub const README_FILENAMES: [&str; 5] =
    ["README.md", "README.MD", "readme.md", "README.txt", "README"];

/// Normalize a repository URL for candidate generation.
///
/// Strips the URL fragment, a trailing `.git`, any `/tree/...` or
/// `/blob/...` suffix (with or without the GitLab-style `-/` prefix), and
/// a trailing slash.
///
/// # Examples
///
/// ```
/// use vitrine_readme::candidates::normalize_repo_url;
///
/// assert_eq!(
///     normalize_repo_url("https://github.com/o/r/blob/dev/README.md"),
///     "https://github.com/o/r"
/// );
/// assert_eq!(
///     normalize_repo_url("https://github.com/o/r.git"),
///     "https://github.com/o/r"
/// );
/// ```
pub fn normalize_repo_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_git = without_fragment
        .strip_suffix(".git")
        .unwrap_or(without_fragment);

    let ref_suffix =
        Regex::new(r"/(?:-/)?(?:tree|blob)/.+$").expect("Invalid ref suffix regex");
    let without_ref = ref_suffix.replace(without_git, "");

    without_ref.trim_end_matches('/').to_string()
}

/// Extract a branch hint from a `/tree/<branch>` or `/blob/<branch>`
/// segment of the original (un-normalized) URL.
///
/// Returns an empty string when the URL carries no such segment.
pub fn branch_hint(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let hint = Regex::new(r"/(?:-/)?(?:tree|blob)/([^/]+)").expect("Invalid branch hint regex");
    hint.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Build the full ordered candidate list for a repository URL.
///
/// GitHub-hosted repos map to `raw.githubusercontent.com` with branches
/// `[hint, HEAD, main, master]`; any other host maps to the forge-style
/// `<origin><path>/raw/<branch>/<file>` pattern with branches
/// `[hint, master, main]`. A URL that fails to parse yields no candidates.
pub fn readme_candidates(url: &str) -> Vec<String> {
    let normalized = normalize_repo_url(url);
    if normalized.is_empty() {
        return Vec::new();
    }
    let hint = branch_hint(url);

    if normalized.contains("github.com") {
        let github = Regex::new(r"^https?://github\.com/([^/]+)/([^/]+)")
            .expect("Invalid github repo regex");
        let Some(caps) = github.captures(&normalized) else {
            return Vec::new();
        };
        let base = format!(
            "https://raw.githubusercontent.com/{}/{}",
            &caps[1], &caps[2]
        );
        let branches = unique_nonempty(
            [hint, "HEAD".into(), "main".into(), "master".into()],
        );
        let mut candidates = Vec::with_capacity(branches.len() * README_FILENAMES.len());
        for branch in &branches {
            for file in README_FILENAMES {
                candidates.push(format!("{base}/{branch}/{file}"));
            }
        }
        return candidates;
    }

    let Ok(target) = Url::parse(&normalized) else {
        return Vec::new();
    };
    let base = format!("{}{}", target.origin().ascii_serialization(), target.path());
    let branches = unique_nonempty([hint, "master".into(), "main".into()]);
    let mut candidates = Vec::with_capacity(branches.len() * README_FILENAMES.len());
    for branch in &branches {
        for file in README_FILENAMES {
            candidates.push(format!("{base}/raw/{branch}/{file}"));
        }
    }
    candidates
}

// ============================================================================
// Tests
// ============================================================================
