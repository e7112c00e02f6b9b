//! Injected persistence boundary and the match-history service.

use crate::stats::MatchRecord;
use derive_more::{Display, Error};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}

// ─────────────────────────────────────────────────────────────
//  Key-value boundary
// ─────────────────────────────────────────────────────────────

/// Key-value persistence store consumed by [`MatchHistory`].
///
/// Implementations are injected by the caller; the crate ships only
/// [`MemoryStore`]. Single-writer semantics: no concurrent access is
/// assumed.
pub trait KvStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and single-session use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Match history service
// ─────────────────────────────────────────────────────────────

/// Append-only match history persisted through a [`KvStore`].
///
/// The full record list is serialized as one JSON array under a fixed
/// key; append reads the list, pushes, and writes it back.
#[derive(Debug, Clone)]
pub struct MatchHistory<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> MatchHistory<S> {
    /// Default storage key.
    pub const DEFAULT_KEY: &'static str = "tictactoe_history";

    /// Creates a history service over the given store.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        info!(key = Self::DEFAULT_KEY, "Creating MatchHistory");
        Self {
            store,
            key: Self::DEFAULT_KEY.to_string(),
        }
    }

    /// Creates a history service writing under a custom key.
    #[instrument(skip(store))]
    pub fn with_key(store: S, key: &str) -> Self {
        info!(key = %key, "Creating MatchHistory");
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends one completed match.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history cannot be read, serialized,
    /// or written back.
    #[instrument(skip(self, record))]
    pub fn append(&mut self, record: MatchRecord) -> Result<(), StoreError> {
        debug!("Appending match record");
        let mut records = self.read_all()?;
        records.push(record);
        let payload = serde_json::to_string(&records)?;
        self.store.set(&self.key, payload)?;
        info!(count = records.len(), "Match history updated");
        Ok(())
    }

    /// Reads the full history, oldest first.
    ///
    /// A missing key is an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails or the payload does not
    /// parse.
    #[instrument(skip(self))]
    pub fn read_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        match self.store.get(&self.key)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    /// Deletes all recorded matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        info!("Clearing match history");
        self.store.delete(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").expect("readable"), None);

        store.set("key", "value".to_string()).expect("writable");
        assert_eq!(
            store.get("key").expect("readable"),
            Some("value".to_string())
        );

        store.set("key", "updated".to_string()).expect("writable");
        assert_eq!(
            store.get("key").expect("readable"),
            Some("updated".to_string())
        );

        store.delete("key").expect("deletable");
        assert_eq!(store.get("key").expect("readable"), None);
    }

    #[test]
    fn test_delete_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_store_error_captures_location() {
        let err = StoreError::new("boom");
        assert!(err.file.ends_with("store.rs"));
        assert!(err.to_string().contains("boom"));
    }
}
