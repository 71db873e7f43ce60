use log::{error, info};
use serde_json::Value;
use thiserror::Error;
use web_sys::Storage;

use super::record::{BackupRecord, LeadPayload};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode backup log: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string slot store. In the browser this is `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every access so a page without storage
/// only fails the backup, never the page.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Append-only log of submissions that never reached the form backend.
///
/// Entries already in the slot are written back untouched. Content that is
/// missing, unparseable or not a JSON array counts as an empty log.
pub struct BackupLog<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BackupLog<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn entries(&self) -> Result<Vec<Value>, StorageError> {
        let raw = self.store.get_item(&self.key)?;
        Ok(raw
            .and_then(|raw| serde_json::from_str::<Vec<Value>>(&raw).ok())
            .unwrap_or_default())
    }

    pub fn append(&self, record: &BackupRecord) -> Result<usize, StorageError> {
        let mut entries = self.entries()?;
        entries.push(serde_json::to_value(record)?);
        let encoded = serde_json::to_string(&entries)?;
        self.store.set_item(&self.key, &encoded)?;
        Ok(entries.len())
    }

    /// Best-effort backup of a failed submission. Faults are logged, never returned.
    pub fn save(&self, payload: &LeadPayload) {
        match self.append(&BackupRecord::from(payload)) {
            Ok(len) => info!("Saved submission to local backup ({} entries)", len),
            Err(e) => error!("Failed to save submission to local backup: {}", e),
        }
    }
}
