//! State persistence: one serialized blob under a well-known key.
//!
//! Saving is a full-state overwrite with last-writer-wins semantics; there
//! is no conflict detection and none is needed with a single logical writer.
//! Loading a missing or unreadable blob yields `None` so callers fall back
//! to [`AppState::default`] — an old or corrupt snapshot must never block
//! startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crate::constants::state::{CORRUPT_BLOB_MSG, STATE_KEY};
use crate::errors::BoardError;
use crate::state::AppState;

pub use crate::constants::state::DEFAULT_STORE_DIR;

/// Persistence backend for the whole application state.
pub trait StateStore {
    /// Load the previous snapshot, `None` when absent or unreadable.
    fn load(&self) -> Result<Option<AppState>, BoardError>;
    /// Overwrite the stored snapshot. Fire-and-forget for callers; errors
    /// are reported but leave the in-memory state authoritative.
    fn save(&self, state: &AppState) -> Result<(), BoardError>;
}

/// Load a snapshot or start from defaults.
pub fn load_or_default<S: StateStore>(store: &S) -> Result<AppState, BoardError> {
    Ok(store.load()?.unwrap_or_default())
}

/// File-backed store: one JSON document at `<dir>/<STATE_KEY>.json`.
#[derive(Clone, Debug)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Store state under the given directory (created on first save).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the persisted blob.
    pub fn blob_path(&self) -> PathBuf {
        self.dir.join(format!("{STATE_KEY}.json"))
    }
}

impl Default for FileStateStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_DIR)
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<AppState>, BoardError> {
        let raw = match fs::read_to_string(self.blob_path()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                warn!(error = %err, "{CORRUPT_BLOB_MSG}");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<(), BoardError> {
        fs::create_dir_all(&self.dir)?;
        let blob = serde_json::to_string(state)?;
        fs::write(self.blob_path(), blob)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding without a filesystem. Goes
/// through the same serialization path as the file store so incompatible
/// model changes show up in tests.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    blob: RwLock<Option<String>>,
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<Option<AppState>, BoardError> {
        let guard = self
            .blob
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match guard.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> Result<(), BoardError> {
        let blob = serde_json::to_string(state)?;
        let mut guard = self
            .blob
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TransportMode;

    #[test]
    fn memory_store_round_trips_state() {
        let store = MemoryStateStore::default();
        assert!(store.load().unwrap().is_none());

        let mut state = AppState::default();
        state.set_transport_override("Tete -> Beira".to_string(), TransportMode::Plane);
        store.save(&state).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(
            loaded.transport_overrides.get("Tete -> Beira"),
            Some(&TransportMode::Plane)
        );
    }

    #[test]
    fn load_or_default_covers_the_empty_store() {
        let store = MemoryStateStore::default();
        let state = load_or_default(&store).unwrap();
        assert!(state.transfers.is_empty());
        assert!(!state.exceptions.is_empty());
    }
}
