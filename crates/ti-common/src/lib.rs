//! TaxIntegrity common types and errors.
//!
//! This crate provides foundational types shared across the ti-* crates:
//! - Unified error type and `Result` alias
//! - Configuration schema versioning

pub mod error;

pub use error::{Error, Result};

/// Schema version for persisted override documents.
///
/// Bumped when the default configuration document changes shape in a way
/// that makes old persisted diffs meaningless.
pub const CONFIG_SCHEMA_VERSION: &str = "1";
