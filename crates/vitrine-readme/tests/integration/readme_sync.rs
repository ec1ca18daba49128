//! End-to-end sync tests: catalog in, JSON cache file out.

use crate::common::{mock_with_talks_readme, sample_catalog};
use vitrine_readme::{MockFetcher, ReadmeCache, ReadmeEntry, SkipPolicy, sync_to_file};

fn internal_policy() -> SkipPolicy {
    SkipPolicy::new(true, vec!["git.internal.example".to_string()])
}

#[tokio::test]
async fn sync_writes_cache_file_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("public").join("readmes.json");

    let catalog = sample_catalog();
    let mock = mock_with_talks_readme();

    let report = sync_to_file(&catalog, &mock, &internal_policy(), &output)
        .await
        .unwrap();

    // talks fetched, ops skipped, toy has no repo and is excluded.
    assert_eq!(report.cached, 1);
    assert!(report.failed.is_empty());
    assert_eq!(report.skipped, vec!["ops"]);
    assert_eq!(report.summary(), "readmes: 1 | failures: 0 | skipped: 1");

    let cache = ReadmeCache::load(&output);
    let entry = cache.get("talks").unwrap();
    assert!(entry.raw.starts_with("# Talks"));
    assert_eq!(
        entry.source,
        "https://raw.githubusercontent.com/someone/talks/HEAD/README.md"
    );
}

#[tokio::test]
async fn skipped_internal_host_sees_no_requests() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("readmes.json");

    let catalog = sample_catalog();
    let mock = MockFetcher::new();

    sync_to_file(&catalog, &mock, &internal_policy(), &output)
        .await
        .unwrap();

    // Only the GitHub project generated traffic; every request targets
    // raw.githubusercontent.com, never the internal forge.
    assert!(!mock.requests().is_empty());
    assert!(
        mock.requests()
            .iter()
            .all(|url| url.starts_with("https://raw.githubusercontent.com/"))
    );
}

#[tokio::test]
async fn inactive_policy_attempts_internal_host() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("readmes.json");

    let catalog = sample_catalog();
    let mock = MockFetcher::new().with_body(
        "http://git.internal.example/someone/ops/raw/master/README.md",
        "# Ops",
    );

    let report = sync_to_file(&catalog, &mock, &SkipPolicy::disabled(), &output)
        .await
        .unwrap();

    assert!(report.skipped.is_empty());
    let cache = ReadmeCache::load(&output);
    assert_eq!(cache.get("ops").unwrap().raw, "# Ops");
}

#[tokio::test]
async fn failed_run_preserves_prior_cache_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("readmes.json");

    // Seed a prior entry for talks on disk.
    let mut seeded = ReadmeCache::new();
    seeded.insert("talks", ReadmeEntry::new("X", "u1"));
    seeded.save(&output).unwrap();

    // This run every candidate comes back empty.
    let catalog = sample_catalog();
    let mock = MockFetcher::new();

    let report = sync_to_file(&catalog, &mock, &internal_policy(), &output)
        .await
        .unwrap();

    assert_eq!(report.failed, vec!["talks"]);
    let cache = ReadmeCache::load(&output);
    assert_eq!(cache.get("talks").unwrap(), &ReadmeEntry::new("X", "u1"));
}

#[tokio::test]
async fn corrupt_cache_file_starts_empty_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("readmes.json");
    std::fs::write(&output, "{definitely not json").unwrap();

    let catalog = sample_catalog();
    let mock = mock_with_talks_readme();

    let report = sync_to_file(&catalog, &mock, &internal_policy(), &output)
        .await
        .unwrap();

    assert_eq!(report.cached, 1);
    let cache = ReadmeCache::load(&output);
    assert!(cache.contains_key("talks"));
}

#[tokio::test]
async fn rerunning_sync_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("readmes.json");

    let catalog = sample_catalog();
    let policy = internal_policy();

    let first_report = sync_to_file(&catalog, &mock_with_talks_readme(), &policy, &output)
        .await
        .unwrap();
    let first_text = std::fs::read_to_string(&output).unwrap();

    let second_report = sync_to_file(&catalog, &mock_with_talks_readme(), &policy, &output)
        .await
        .unwrap();
    let second_text = std::fs::read_to_string(&output).unwrap();

    assert_eq!(first_report, second_report);
    assert_eq!(first_text, second_text);
}
