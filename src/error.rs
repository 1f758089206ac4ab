//! Crate-level error aggregate: the union every driver-facing call returns,
//! with `From` conversions from each subsystem's own error type (§7).

use std::fmt;

use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::queue::QueueError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum PositionGraphError {
    Codec(CodecError),
    Config(ConfigError),
    Engine(EngineError),
    Queue(QueueError),
    Store(StoreError),
}

impl fmt::Display for PositionGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionGraphError::Codec(err) => write!(f, "{err}"),
            PositionGraphError::Config(err) => write!(f, "{err}"),
            PositionGraphError::Engine(err) => write!(f, "{err}"),
            PositionGraphError::Queue(err) => write!(f, "{err}"),
            PositionGraphError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PositionGraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionGraphError::Codec(err) => Some(err),
            PositionGraphError::Config(err) => Some(err),
            PositionGraphError::Engine(err) => Some(err),
            PositionGraphError::Queue(err) => Some(err),
            PositionGraphError::Store(err) => Some(err),
        }
    }
}

impl From<CodecError> for PositionGraphError {
    fn from(err: CodecError) -> PositionGraphError {
        PositionGraphError::Codec(err)
    }
}

impl From<ConfigError> for PositionGraphError {
    fn from(err: ConfigError) -> PositionGraphError {
        PositionGraphError::Config(err)
    }
}

impl From<EngineError> for PositionGraphError {
    fn from(err: EngineError) -> PositionGraphError {
        PositionGraphError::Engine(err)
    }
}

impl From<QueueError> for PositionGraphError {
    fn from(err: QueueError) -> PositionGraphError {
        PositionGraphError::Queue(err)
    }
}

impl From<StoreError> for PositionGraphError {
    fn from(err: StoreError) -> PositionGraphError {
        PositionGraphError::Store(err)
    }
}
