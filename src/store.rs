//! External store collaborator: the one shared tournament document as a JSON
//! file on disk.
//!
//! The core reads the full state once at startup (supplying the empty
//! initial state when nothing is stored yet), writes the full state after
//! every transition, and overwrites everything on reset. Writes are
//! fire-and-forget from the core's point of view: a failure is surfaced but
//! never retried, and the in-memory state stays as it was.

use crate::models::Tournament;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors from reading or writing the document.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Serde(e) => write!(f, "store (de)serialization error: {e}"),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}

/// Persisted envelope: the tournament plus the time of the last write.
#[derive(Serialize, Deserialize)]
struct StoredDocument {
    updated_at: DateTime<Utc>,
    tournament: Tournament,
}

/// Single-document JSON file store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored tournament. `Ok(None)` when no document exists yet.
    pub fn load(&self) -> Result<Option<Tournament>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let doc: StoredDocument = serde_json::from_str(&data)?;
        Ok(Some(doc.tournament))
    }

    /// Overwrite the document with the given state.
    pub fn save(&self, tournament: &Tournament) -> Result<(), StoreError> {
        let doc = StoredDocument {
            updated_at: Utc::now(),
            tournament: tournament.clone(),
        };
        let data = serde_json::to_string_pretty(&doc)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    /// Overwrite the document with a fresh empty tournament and return it.
    pub fn reset(&self) -> Result<Tournament, StoreError> {
        let fresh = Tournament::default();
        self.save(&fresh)?;
        Ok(fresh)
    }
}
