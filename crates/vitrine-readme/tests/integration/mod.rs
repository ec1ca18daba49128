//! Integration test modules.

mod readme_sync;
