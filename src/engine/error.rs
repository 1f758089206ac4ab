//! Error type for the expansion engine.

use std::fmt;
use std::path::PathBuf;

use crate::queue::QueueError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    Store(StoreError),
    Queue(QueueError),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Store(err) => write!(f, "{err}"),
            EngineError::Queue(err) => write!(f, "{err}"),
            EngineError::Io { path, source } => {
                write!(f, "I/O failure writing {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Store(err) => Some(err),
            EngineError::Queue(err) => Some(err),
            EngineError::Io { source, .. } => Some(source),
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> EngineError {
        EngineError::Store(err)
    }
}

impl From<QueueError> for EngineError {
    fn from(err: QueueError) -> EngineError {
        EngineError::Queue(err)
    }
}
