//! Configuration for a position-graph run (§6 "Configuration").
//!
//! Centralises the handful of knobs the engine recognises, the way
//! `core/config.rs` in the teacher repo groups related constants into one
//! place instead of scattering them across call sites.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default root directory for a store, matching the distilled spec's
/// `.store` default.
pub const DEFAULT_STORE_ROOT: &str = ".store";

/// Default shard rotation size: 256 KiB, a multiple of 32.
pub const DEFAULT_MAX_QUEUE_SHARD_BYTES: u64 = 256 * 1024;

/// Default upper bound on positions drained per `process_queue` pass.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// A seed position supplied on first run, before any store exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSpec {
    /// An 8x8 matrix of raw nibble codes, row 0 first.
    Matrix([[u8; 8]; 8]),
    /// A 64-character lowercase hex identifier.
    Hex(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_root: PathBuf,
    pub max_queue_shard_bytes: u64,
    pub batch_size: usize,
    pub seed_board: Option<SeedSpec>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            store_root: PathBuf::from(DEFAULT_STORE_ROOT),
            max_queue_shard_bytes: DEFAULT_MAX_QUEUE_SHARD_BYTES,
            batch_size: DEFAULT_BATCH_SIZE,
            seed_board: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "failed to read config {}: {source}", path.display()),
            ConfigError::Parse { path, source } => write!(f, "failed to parse config {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
