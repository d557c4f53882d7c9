//! Session flag storage
//!
//! A session is nothing more than the presence of one key in a small
//! key-value store. The store is a trait so tests and the TUI can run
//! against memory while the CLI persists to `session.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{ResolvError, Result};
use crate::paths::session_path;

/// Key the session token is stored under
pub const SESSION_KEY: &str = "ticketapp_session";

/// String key-value storage, modelled on browser local storage
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default session file location
    pub fn at_default_path() -> Self {
        Self::new(session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole map. A missing file is empty; an unreadable one is
    /// treated as empty too and gets overwritten on the next write.
    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResolvError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create directory {}: {}", parent.display(), e),
                ))
            })?;
        }
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// Authentication state with explicit start and end
#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
    token: Option<String>,
}

impl<S: SessionStorage> Session<S> {
    /// Read the current flag from storage
    pub fn load(storage: S) -> Result<Self> {
        let token = storage.get_item(SESSION_KEY)?;
        Ok(Self { storage, token })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Write a fresh token, replacing any existing one
    pub fn start(&mut self) -> Result<&str> {
        let token = format!("valid_token_{}", Uuid::new_v4().simple());
        self.storage.set_item(SESSION_KEY, &token)?;
        tracing::info!("Session started");
        Ok(self.token.insert(token).as_str())
    }

    /// Remove the token. Ending a session that was never started is fine.
    pub fn end(&mut self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY)?;
        if self.token.take().is_some() {
            tracing::info!("Session ended");
        }
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_session_lifecycle() {
        let mut session = Session::load(MemoryStorage::new()).unwrap();
        assert!(!session.is_authenticated());

        let token = session.start().unwrap().to_string();
        assert!(token.starts_with("valid_token_"));
        assert!(session.is_authenticated());
        assert_eq!(
            session.storage().get_item(SESSION_KEY).unwrap(),
            Some(token)
        );

        session.end().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.storage().get_item(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_session_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("home").join("session.json");

        let mut session = Session::load(FileStorage::new(&path)).unwrap();
        let token = session.start().unwrap().to_string();

        let reloaded = Session::load(FileStorage::new(&path)).unwrap();
        assert_eq!(reloaded.token(), Some(token.as_str()));

        let mut reloaded = reloaded;
        reloaded.end().unwrap();
        assert!(!Session::load(FileStorage::new(&path)).unwrap().is_authenticated());
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("session.json"));
        storage.set_item("theme", "dark").unwrap();
        storage.set_item(SESSION_KEY, "valid_token_x").unwrap();
        storage.remove_item(SESSION_KEY).unwrap();
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_session_file_reads_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let session = Session::load(FileStorage::new(&path)).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_end_without_session_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut session = Session::load(FileStorage::new(&path)).unwrap();
        session.end().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_tokens_differ_between_logins() {
        let mut session = Session::load(MemoryStorage::new()).unwrap();
        let first = session.start().unwrap().to_string();
        let second = session.start().unwrap().to_string();
        assert_ne!(first, second);
    }
}
