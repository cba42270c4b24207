//! Persistence for user-authored custom emotions.
//!
//! The whole collection lives as one JSON array under a single storage key.
//! Every mutation is a full read-modify-write of that array; there is no
//! partial update and no optimistic concurrency check. Two independent writers
//! can race and the later write wins (lost update). Acceptable for a
//! single-user, single-device app, but it is a limitation, not a guarantee.
//!
//! Errors are explicit: `Ok(None)` from [`CustomEmotionStore::get_by_id`]
//! means "not found", while a failing backend or a corrupt collection surfaces
//! as [`StoreError`]. Failures are logged at this boundary before being
//! returned.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};

use crate::emotion::Emotion;
use thiserror::Error;

/// The one key the custom emotion collection is stored under. No other
/// component writes to it.
pub const CUSTOM_EMOTIONS_KEY: &str = "custom_emotions";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Storage(#[from] StorageError),
    #[error("corrupt emotion collection: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// CRUD over the persisted custom emotion collection.
pub struct CustomEmotionStore<B> {
    backend: B,
}

impl<B: StorageBackend> CustomEmotionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full collection. A store that has never been written to
    /// yields an empty list.
    pub fn list(&self) -> Result<Vec<Emotion>, StoreError> {
        let Some(raw) = self.backend.get(CUSTOM_EMOTIONS_KEY).map_err(|err| {
            log::error!("failed to read custom emotions: {err}");
            err
        })?
        else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|err| {
            log::error!("failed to parse custom emotions: {err}");
            err.into()
        })
    }

    /// Insert or replace by id, then write the whole collection back.
    pub fn upsert(&mut self, emotion: &Emotion) -> Result<(), StoreError> {
        let mut emotions = self.list()?;
        match emotions.iter_mut().find(|e| e.id == emotion.id) {
            Some(existing) => *existing = emotion.clone(),
            None => emotions.push(emotion.clone()),
        }
        self.write_all(&emotions)
    }

    /// Remove by id. Returns whether an entry with that id existed.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut emotions = self.list()?;
        let before = emotions.len();
        emotions.retain(|e| e.id != id);
        let removed = emotions.len() != before;
        self.write_all(&emotions)?;
        Ok(removed)
    }

    /// Linear search of the collection. `Ok(None)` means the id is absent;
    /// storage failures are a distinct `Err`.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Emotion>, StoreError> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    fn write_all(&mut self, emotions: &[Emotion]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(emotions)?;
        self.backend
            .set(CUSTOM_EMOTIONS_KEY, &raw)
            .map_err(|err| {
                log::error!("failed to write custom emotions: {err}");
                err
            })?;
        Ok(())
    }
}
