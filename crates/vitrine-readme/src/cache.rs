//! Persisted README cache.
//!
//! A single JSON object mapping project key to `{raw, source}`, written
//! pretty-printed with a trailing newline. The cache is read-modify-write:
//! prior contents are loaded first and merged under new winners, so a
//! project whose fetch fails this run keeps its previous entry. A missing
//! or corrupt file is treated as an empty cache, never as an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use vitrine_core::Result;

/// One cached README: the raw body and the URL it was fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeEntry {
    /// README body as fetched
    pub raw: String,
    /// Candidate URL that produced it
    pub source: String,
}

impl ReadmeEntry {
    /// Create an entry.
    pub fn new(raw: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            source: source.into(),
        }
    }
}

/// The full key → entry mapping, ordered by key for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadmeCache {
    entries: BTreeMap<String, ReadmeEntry>,
}

impl ReadmeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from disk.
    ///
    /// An absent or unparseable file yields an empty cache — prior state
    /// is best-effort, losing it only costs refetches.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(cache) => cache,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Cache file unparseable, starting empty");
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Insert or overwrite an entry.
    pub fn insert(&mut self, key: impl Into<String>, entry: ReadmeEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Look up an entry by project key.
    pub fn get(&self, key: &str) -> Option<&ReadmeEntry> {
        self.entries.get(key)
    }

    /// Whether the cache holds an entry for this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the cache as pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.entries)?;
        text.push('\n');
        Ok(text)
    }

    /// Write the full mapping to disk, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
