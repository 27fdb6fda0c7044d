//! Session token storage
//!
//! Last write wins. The store is handed to the gateway and the issue
//! client explicitly.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str);

    fn clear(&self);
}

/// Token held for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Token persisted to a file until sign-out
///
/// Reads are served from memory. A failed write is logged and the in-memory
/// value still changes, so the current process stays signed in.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: MemoryTokenStore,
}

impl FileTokenStore {
    /// Open the store, loading a token saved by an earlier run
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let cached = MemoryTokenStore::new();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                if !token.is_empty() {
                    cached.set(token);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        Ok(Self { path, cached })
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached.get()
    }

    fn set(&self, token: &str) {
        self.cached.set(token);
        if let Err(e) = self.write(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session token");
        }
    }

    fn clear(&self) {
        self.cached.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_last_write_wins() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        let store = FileTokenStore::open(&path).unwrap();
        assert_eq!(store.get(), None);
        store.set("tok123");

        let reopened = FileTokenStore::open(&path).unwrap();
        assert_eq!(reopened.get().as_deref(), Some("tok123"));

        reopened.clear();
        assert!(!path.exists());
        assert_eq!(FileTokenStore::open(&path).unwrap().get(), None);
    }

    #[test]
    fn test_file_store_ignores_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(FileTokenStore::open(&path).unwrap().get(), None);
    }
}
