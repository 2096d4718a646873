//! Key-value persistence for session snapshots.
//!
//! The session only sees the [`KvStore`] trait; the binary wires in a
//! [`FileStore`] backed by JSON files in ~/.lifequest/, and tests use a
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Contract the session state manager consumes: get/set/remove over
/// opaque serialized values.
pub trait KvStore {
    /// Reads the value for a key, `None` if the key has never been set.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Writes the value for a key.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Removes every listed key. Missing keys are not an error.
    fn remove_many(&self, keys: &[&str]) -> io::Result<()>;
}

/// File-backed store keeping one JSON file per key in ~/.lifequest/.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the default store directory, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::at(home_dir.join(".lifequest"))
    }

    /// Opens a store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }

    fn remove_many(&self, keys: &[&str]) -> io::Result<()> {
        for key in keys {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, for seeding test fixtures.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> io::Result<()> {
        let mut entries = self.entries.borrow_mut();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
