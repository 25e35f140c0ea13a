//! Error types reported by the store and its storage adapters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of an id-addressed store mutation.
///
/// The store state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("No robot with id `{id}`")]
    RobotNotFound { id: String },
    #[error("No task with id `{id}`")]
    TaskNotFound { id: String },
    #[error("No alert with id `{id}`")]
    AlertNotFound { id: String },
}

/// Failure to read or write the persisted state slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
