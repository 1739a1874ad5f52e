use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use super::domain::Answer;

/// Fixed key under which the final answer list is stored.
pub const ANSWERS_KEY: &str = "assessmentAnswers";

/// Key-value blob storage so the archive can run against memory or disk.
pub trait BlobStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode blob: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.remove(key);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`; writes land in a temp file first and are renamed.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error("no assessment answers found; start the assessment again")]
    NoAnswers,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The final answer list persisted under [`ANSWERS_KEY`].
pub struct AnswerArchive<S> {
    store: S,
}

impl<S: BlobStore> AnswerArchive<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn persist(&self, answers: &[Answer]) -> Result<(), ResultsError> {
        let payload = serde_json::to_string(answers).map_err(StoreError::from)?;
        self.store.write(ANSWERS_KEY, &payload)?;
        debug!(answers = answers.len(), "answers archived");
        Ok(())
    }

    /// Absent and unparseable blobs are both reported as [`ResultsError::NoAnswers`].
    pub fn load(&self) -> Result<Vec<Answer>, ResultsError> {
        let raw = self.store.read(ANSWERS_KEY)?.ok_or(ResultsError::NoAnswers)?;
        serde_json::from_str(&raw).map_err(|error| {
            warn!(%error, "archived answers are malformed");
            ResultsError::NoAnswers
        })
    }

    pub fn clear(&self) -> Result<(), ResultsError> {
        self.store.remove(ANSWERS_KEY)?;
        debug!("archived answers cleared");
        Ok(())
    }
}
