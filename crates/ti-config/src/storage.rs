//! Override-slot persistence.
//!
//! The persisted state is a single named slot holding the serialized minimal
//! diff. Backends implement [`OverrideStorage`]; the store treats every
//! failure as best-effort and falls back to the defaults, so backends report
//! honest `Result`s and never need to panic.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use ti_common::CONFIG_SCHEMA_VERSION;

/// Config directory name under the user config root.
const CONFIG_DIR_NAME: &str = "taxintegrity";

/// Override slot filename, stamped with the persisted schema version so a
/// future schema bump starts from a fresh slot instead of merging stale
/// overrides.
fn slot_file_name() -> String {
    format!("overrides_v{CONFIG_SCHEMA_VERSION}.json")
}

/// Errors from override storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("user config directory could not be resolved")]
    ConfigDirUnavailable,

    #[error("storage slot rejected the operation")]
    Rejected,
}

/// A single named slot holding serialized override text.
pub trait OverrideStorage {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Write the slot, replacing any previous contents.
    fn save(&mut self, payload: &str) -> Result<(), StorageError>;

    /// Clear the slot. Clearing an absent slot succeeds.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON file holding the minimal diff.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use an explicit file path as the slot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default slot under the user config directory,
    /// e.g. `~/.config/taxintegrity/overrides_v1.json`.
    pub fn in_user_config_dir() -> Result<Self, StorageError> {
        let dir = dirs::config_dir().ok_or(StorageError::ConfigDirUnavailable)?;
        Ok(Self {
            path: dir.join(CONFIG_DIR_NAME).join(slot_file_name()),
        })
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OverrideStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory slot, with failure toggles so the store's swallow-on-failure
/// policy is testable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot, as if a previous session had persisted it.
    pub fn with_slot(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Current slot contents.
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl OverrideStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Rejected);
        }
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected);
        }
        self.slot = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected);
        }
        self.slot = None;
        Ok(())
    }
}
