//! Error type for shard queue I/O.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum QueueError {
    Io { path: PathBuf, source: std::io::Error },
}

impl QueueError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> QueueError {
        QueueError::Io { path: path.into(), source }
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Io { path, source } => {
                write!(f, "queue I/O failure at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::Io { source, .. } => Some(source),
        }
    }
}
