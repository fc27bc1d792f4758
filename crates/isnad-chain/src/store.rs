//! Ledger storage backends.
//!
//! The ledger takes its backing store as a trait so the durable layer can
//! be swapped. The file-backed store holds one exclusive lock across its
//! whole load-mutate-persist cycle, so concurrent appends serialize instead
//! of racing on the wholesale rewrite.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ChainError;
use crate::types::{AuditRecord, ChainEntry};

/// Store for chain entries - trait to allow different backends.
pub trait ChainStore {
    /// Snapshot of every entry in the ledger.
    fn load(&self) -> Result<HashMap<String, ChainEntry>, ChainError>;

    /// Append one record under a skill hash, creating the entry on first
    /// append.
    fn append(&self, key: &str, record: AuditRecord) -> Result<(), ChainError>;

    /// Copy of the entry for one skill hash, if present.
    fn get(&self, key: &str) -> Result<Option<ChainEntry>, ChainError>;
}

/// In-memory chain store for testing and simple use cases.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, ChainEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainStore for MemoryStore {
    fn load(&self) -> Result<HashMap<String, ChainEntry>, ChainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn append(&self, key: &str, record: AuditRecord) -> Result<(), ChainError> {
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(key.to_string())
            .or_insert_with(|| ChainEntry::new(key))
            .audit_chain
            .push(record);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<ChainEntry>, ChainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

/// File-backed chain store persisting the whole ledger as one JSON document.
///
/// The file is read once at open time and held in memory; every append
/// flushes the full ledger back to disk before returning (write-through,
/// no batching).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, ChainEntry>>,
}

impl FileStore {
    /// Open a ledger file, initializing an empty ledger when the file does
    /// not exist yet.
    ///
    /// A missing file is not an error: an empty ledger is created and
    /// persisted immediately. Any other read failure, including corrupt
    /// JSON, surfaces as an error rather than masking possible data loss
    /// behind an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns `ChainError` if the file cannot be read, parsed, or created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ChainError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let entries = HashMap::new();
                persist(&path, &entries)?;
                entries
            }
            Err(e) => return Err(ChainError::Io(e)),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChainStore for FileStore {
    fn load(&self) -> Result<HashMap<String, ChainEntry>, ChainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn append(&self, key: &str, record: AuditRecord) -> Result<(), ChainError> {
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(key.to_string())
            .or_insert_with(|| ChainEntry::new(key))
            .audit_chain
            .push(record);
        persist(&self.path, &entries)
    }

    fn get(&self, key: &str) -> Result<Option<ChainEntry>, ChainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

/// Write the full ledger atomically (write-to-temp, then rename).
fn persist(path: &Path, entries: &HashMap<String, ChainEntry>) -> Result<(), ChainError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(entries)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
