//! JSON snapshot persistence for the preference store
//!
//! Snapshots are plain JSON documents written with a temp-file-then-rename
//! sequence so a crash mid-write never leaves a torn store behind.

use crate::error::Result;
use crate::store::{ContextData, PreferenceStore};
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct StoreSnapshot {
    saved_at: DateTime<Utc>,
    contexts: AHashMap<String, ContextData>,
}

impl PreferenceStore {
    /// Open a store backed by a snapshot file.
    ///
    /// Loads the snapshot if the file exists; otherwise starts empty.
    /// Subsequent [`save`](Self::save) calls write back to the same path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contexts = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let snapshot: StoreSnapshot = serde_json::from_str(&data)?;
            snapshot.contexts
        } else {
            AHashMap::new()
        };

        Ok(Self {
            contexts: RwLock::new(contexts),
            path: Some(path),
        })
    }

    /// Write a snapshot of the current state.
    ///
    /// A no-op for purely in-memory stores. The snapshot lands via an
    /// atomic rename.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let snapshot = StoreSnapshot {
            saved_at: Utc::now(),
            contexts: self.contexts.read().clone(),
        };
        let data = serde_json::to_string_pretty(&snapshot)?;

        let temp_file = path.with_extension("tmp");
        std::fs::write(&temp_file, data)?;
        std::fs::rename(&temp_file, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facetx_core::ProductId;

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let store = PreferenceStore::open(&path).unwrap();
            store.add_bought("shop", ProductId::Integer(7));
            store.add_liked("shop", ProductId::String("sku-1".to_string()));
            store.add_selected_filter("shop", "red");
            store.save().unwrap();
        }

        let restored = PreferenceStore::open(&path).unwrap();
        assert_eq!(restored.bought_ids("shop"), vec![ProductId::Integer(7)]);
        assert!(restored.is_liked("shop", &ProductId::String("sku-1".to_string())));
        assert_eq!(restored.selected_filters("shop"), vec!["red"]);
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.contexts().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let store = PreferenceStore::open(&path).unwrap();
        store.add_bought("shop", ProductId::Integer(1));
        store.save().unwrap();
        store.remove_bought("shop", &ProductId::Integer(1));
        store.save().unwrap();

        let restored = PreferenceStore::open(&path).unwrap();
        assert!(restored.bought_ids("shop").is_empty());
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let store = PreferenceStore::new();
        store.add_bought("shop", ProductId::Integer(1));
        store.save().unwrap();
    }
}
