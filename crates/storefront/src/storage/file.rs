//! File-backed storage backend.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::{Storage, StorageError};

/// A [`Storage`] backend that keeps one file per key under a root
/// directory.
///
/// This is the durable analogue of browser local storage: values survive
/// process restarts, and the write path is atomic (temp file + rename) so
/// a crash mid-write never leaves a torn value behind.
///
/// Keys map directly to file names, so keys containing path separators or
/// `..` are rejected rather than escaping the root.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open a file-backed storage area rooted at `root`, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the root directory cannot be
    /// created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory of this storage area.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
            || key.contains('\0');
        if invalid {
            return Err(StorageError::InvalidKey {
                key: key.to_owned(),
                reason: "keys must be plain file names",
            });
        }
        Ok(self.root.join(key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp = tempfile::NamedTempFile::new_in(&self.root)?;
        fs::write(temp.path(), value.as_bytes())?;
        temp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
