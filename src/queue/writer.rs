//! Append-only, size-capped, file-sharded FIFO writer (producer side).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use log::debug;

use super::error::QueueError;
use super::handle::{QueueGuard, QueueHandle, QueueResource};
use crate::codec::Blob;

/// Width of the zero-padded numeric token in a shard filename, wide enough
/// that lexicographic (directory-listing) order always matches creation
/// order regardless of how large the counter grows.
const TOKEN_WIDTH: usize = 20;

pub(crate) struct ShardWriterState {
    dir: PathBuf,
    max_shard_bytes: u64,
    next_token: u64,
    active: Option<(PathBuf, File, u64)>,
}

impl ShardWriterState {
    fn open(dir: PathBuf, max_shard_bytes: u64) -> Result<ShardWriterState, QueueError> {
        let next_token = next_free_token(&dir)?;
        Ok(ShardWriterState {
            dir,
            max_shard_bytes,
            next_token,
            active: None,
        })
    }

    fn rotate(&mut self) -> Result<(), QueueError> {
        let token = self.next_token;
        self.next_token += 1;
        let path = self.dir.join(format!("queue_{token:0width$}.raw", width = TOKEN_WIDTH));
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| QueueError::io(&path, source))?;
        debug!("opened queue shard {}", path.display());
        self.active = Some((path, file, 0));
        Ok(())
    }

    fn push(&mut self, blob: &Blob) -> Result<(), QueueError> {
        let needs_rotate = match &self.active {
            Some((_, _, size)) => *size >= self.max_shard_bytes,
            None => true,
        };
        if needs_rotate {
            self.rotate()?;
        }
        let (path, file, size) = self.active.as_mut().expect("just rotated");
        file.write_all(blob).map_err(|source| QueueError::io(path.clone(), source))?;
        *size += blob.len() as u64;
        Ok(())
    }
}

impl QueueResource for ShardWriterState {
    fn on_last_leave(&mut self) {
        if let Some((path, mut file, _)) = self.active.take() {
            if let Err(source) = file.flush() {
                log::warn!("failed to flush queue shard {}: {source}", path.display());
            }
        }
    }
}

fn next_free_token(dir: &std::path::Path) -> Result<u64, QueueError> {
    let mut max_seen: Option<u64> = None;
    if dir.is_dir() {
        let entries = std::fs::read_dir(dir).map_err(|source| QueueError::io(dir, source))?;
        for entry in entries {
            let entry = entry.map_err(|source| QueueError::io(dir, source))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(token_str) = name.strip_prefix("queue_").and_then(|s| s.strip_suffix(".raw")) {
                if let Ok(token) = token_str.parse::<u64>() {
                    max_seen = Some(max_seen.map_or(token, |m| m.max(token)));
                }
            }
        }
    }
    Ok(max_seen.map_or(0, |m| m + 1))
}

/// Producer handle for one colour's queue directory. Shared, reentrant:
/// the driver's drain pass and each nested `engine::pack` call can hold
/// their own guard over the same handle without double-closing the active
/// shard.
#[derive(Clone)]
pub struct ShardQueue {
    handle: QueueHandle<ShardWriterState>,
}

impl ShardQueue {
    pub fn open(dir: impl Into<PathBuf>, max_shard_bytes: u64) -> Result<ShardQueue, QueueError> {
        assert!(max_shard_bytes % 32 == 0, "max_shard_bytes must be a multiple of 32");
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| QueueError::io(&dir, source))?;
        let state = ShardWriterState::open(dir, max_shard_bytes)?;
        Ok(ShardQueue { handle: QueueHandle::new(state) })
    }

    /// Enter a scope over this queue; the active shard is only checkpointed
    /// once every entered scope, including nested ones, has left.
    pub fn enter(&self) -> ShardQueueGuard {
        ShardQueueGuard { guard: self.handle.enter() }
    }

    /// Convenience one-shot append: enters and leaves its own scope.
    pub fn push(&self, blob: &Blob) -> Result<(), QueueError> {
        self.enter().push(blob)
    }
}

pub struct ShardQueueGuard {
    guard: QueueGuard<ShardWriterState>,
}

impl ShardQueueGuard {
    pub fn push(&self, blob: &Blob) -> Result<(), QueueError> {
        self.guard.with(|state| state.push(blob))
    }
}
