//! Durable single-slot storage for the persisted session record.
//!
//! The slot holds at most one raw JSON document. Access is synchronous and
//! unguarded; the session store is the only writer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Errors surfaced by a vault implementation. The session store treats a
/// load failure the same as an absent/malformed record, never fatally.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A single durable key-value slot.
pub trait SessionVault: Send + Sync {
    /// The raw persisted record, `Ok(None)` when the slot is empty
    fn load(&self) -> Result<Option<String>, VaultError>;

    /// Replace the slot's contents
    fn store(&self, raw: &str) -> Result<(), VaultError>;

    /// Empty the slot; clearing an already-empty slot succeeds
    fn clear(&self) -> Result<(), VaultError>;
}

/// File-backed vault, one JSON document per file
#[derive(Debug, Clone)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionVault for FileVault {
    fn load(&self) -> Result<Option<String>, VaultError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, raw: &str) -> Result<(), VaultError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), VaultError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory vault for tests and embedding contexts without a filesystem
#[derive(Debug, Default)]
pub struct MemoryVault {
    slot: Mutex<Option<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vault pre-seeded with a raw record
    pub fn seeded(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl SessionVault for MemoryVault {
    fn load(&self) -> Result<Option<String>, VaultError> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn store(&self, raw: &str) -> Result<(), VaultError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), VaultError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
