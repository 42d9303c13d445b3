//! Key-value persistence for heroes, homebrew, and options.
//!
//! Every value is a JSON document stored under one of three fixed keys.
//! There are no transactions: the last write wins.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DEFAULT_KEY_PREFIX;
use crate::error::{SessionError, SessionResult};

/// The fixed keys a store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The hero list.
    Heroes,
    /// The homebrew sourcebook.
    Homebrew,
    /// User options.
    Options,
}

impl StoreKey {
    /// All keys.
    pub const ALL: [StoreKey; 3] = [Self::Heroes, Self::Homebrew, Self::Options];

    /// The key as stored.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heroes => "heroes",
            Self::Homebrew => "homebrew",
            Self::Options => "options",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key-value store for JSON snapshots.
pub trait Store {
    /// Read a value; `None` if the key was never written.
    fn get(&self, key: StoreKey) -> SessionResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: StoreKey, value: &str) -> SessionResult<()>;
}

/// Read and deserialize a value.
pub fn load_json<T: DeserializeOwned>(store: &dyn Store, key: StoreKey) -> SessionResult<Option<T>> {
    match store.get(key)? {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

/// Serialize and write a value.
pub fn save_json<T: Serialize>(store: &mut dyn Store, key: StoreKey, value: &T) -> SessionResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    store.set(key, &text)
}

/// A store that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StoreKey, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: StoreKey) -> SessionResult<Option<String>> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> SessionResult<()> {
        self.values.insert(key, value.to_string());
        Ok(())
    }
}

/// A store with one `<prefix><key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    prefix: String,
}

impl FileStore {
    /// Store files in `dir` with the default prefix.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Use a different file name prefix.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// The file backing `key`.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}{}.json", self.prefix, key))
    }
}

impl Store for FileStore {
    fn get(&self, key: StoreKey) -> SessionResult<Option<String>> {
        let path = self.path(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::Store { key, source }),
        }
    }

    fn set(&mut self, key: StoreKey, value: &str) -> SessionResult<()> {
        let path = self.path(key);
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, value))
            .map_err(|source| SessionError::Store { key, source })?;
        debug!(path = %path.display(), bytes = value.len(), "wrote store key");
        Ok(())
    }
}
