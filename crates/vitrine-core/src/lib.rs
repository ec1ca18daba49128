//! Vitrine Core — shared error types and small utilities.
//!
//! This crate provides the foundational types used across all Vitrine
//! crates. It has no internal Vitrine dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Ordered-list helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use util::unique_nonempty;
