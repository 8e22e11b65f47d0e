//! JSON document storage for the vocabulary library and the learner state.
//!
//! The learner state is one document: handlers load it, run it through the
//! scheduling engine and save it back as a single unit. The engine itself
//! never touches the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{Library, StudyState};

/// Error surface of the document store
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {}", e),
            Self::Parse(e) => write!(f, "storage parse error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Document store: the read-only library plus the learner-state path.
pub struct Store {
    pub library: Library,
    state_path: PathBuf,
}

impl Store {
    /// Load the library and prepare the learner-state location.
    pub fn open(library_path: &Path, state_path: PathBuf) -> Result<Self, StorageError> {
        let library = load_library(library_path)?;
        if let Some(parent) = state_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            library,
            state_path,
        })
    }

    /// Current learner state; a missing or empty document is a fresh learner
    pub fn load_state(&self) -> Result<StudyState, StorageError> {
        load_state(&self.state_path)
    }

    pub fn save_state(&self, state: &StudyState) -> Result<(), StorageError> {
        save_state(&self.state_path, state)
    }
}

pub fn load_library(path: &Path) -> Result<Library, StorageError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn load_state(path: &Path) -> Result<StudyState, StorageError> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(StudyState::default()),
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StudyState::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write via temp file + rename so a crash never truncates the document
pub fn save_state(path: &Path, state: &StudyState) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
