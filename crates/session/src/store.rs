//! Durable storage for the bearer credential.
//!
//! One opaque string under one fixed key; no other durable state exists
//! in the client. Writes happen only from the session manager, which is
//! single-threaded by the UI event loop, so no locking beyond the
//! in-memory store's own Mutex is needed.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// File name the credential lives under inside the app's config dir.
pub const CREDENTIAL_FILE: &str = "credential.token";

const APP_DIR: &str = "pivoterp";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no usable config directory on this platform")]
    NoConfigDir,

    #[error("credential storage io: {0}")]
    Io(#[from] io::Error),
}

/// Read/write/delete of the single persisted credential.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Credential persisted as one file under the user's config directory.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store under the platform config dir (`~/.config/pivoterp/` on Linux).
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(dir.join(APP_DIR).join(CREDENTIAL_FILE)))
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("nested").join(CREDENTIAL_FILE));

        assert!(store.load().unwrap().is_none());

        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-123"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an already-empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn file_store_treats_whitespace_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join(CREDENTIAL_FILE));

        store.save("  \n").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryCredentialStore::with_token("tok");
        assert_eq!(store.load().unwrap().as_deref(), Some("tok"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.save("tok-2").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-2"));
    }
}
