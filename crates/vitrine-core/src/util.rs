//! Ordered-list helpers.
//!
//! The candidate-URL algorithm depends on order-preserving deduplication:
//! the first occurrence of a value wins, later duplicates and empty
//! entries are dropped.

/// Deduplicate a list of strings, preserving first-occurrence order and
/// dropping empty entries.
///
/// # Examples
///
/// ```
/// use vitrine_core::util::unique_nonempty;
///
/// let branches = ["main", "", "HEAD", "main", "master"];
/// assert_eq!(
///     unique_nonempty(branches.iter().map(|s| s.to_string())),
///     vec!["main", "HEAD", "master"]
/// );
/// ```
pub fn unique_nonempty<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = Vec::new();
    for item in items {
        if item.is_empty() {
            continue;
        }
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
