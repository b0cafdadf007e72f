//! TaxIntegrity configuration document engine.
//!
//! This crate provides:
//! - Dotted-path access into nested configuration documents
//! - Deep merge of partial override documents onto the defaults
//! - Minimal structural diffs for persistence and export
//! - The override store composing the three, with pluggable storage
//! - The canonical default configuration document
//!
//! Documents are plain `serde_json::Value` trees: string keys mapping to
//! strings, numbers, sequences, or nested mappings. The default document is
//! the canonical schema; overrides are partial documents layered onto a deep
//! copy of it, never onto the defaults themselves.

pub mod defaults;
pub mod diff;
pub mod merge;
pub mod path;
pub mod storage;
pub mod store;

pub use defaults::default_config;
pub use diff::minimal_diff;
pub use merge::deep_merge;
pub use path::{get_path, set_path};
pub use storage::{FileStorage, MemoryStorage, OverrideStorage, StorageError};
pub use store::ConfigStore;
