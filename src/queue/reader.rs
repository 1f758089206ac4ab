//! Drain side of the shard queue: a frozen, sorted work list of shards,
//! consumed front to back, with an at-least-once checkpoint on early exit.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::error::QueueError;
use super::handle::{QueueGuard, QueueHandle, QueueResource};
use crate::codec::Blob;

pub(crate) struct ShardReaderState {
    shards: Vec<PathBuf>,
    active: Option<(PathBuf, File)>,
}

impl ShardReaderState {
    fn pop(&mut self) -> Result<Option<Blob>, QueueError> {
        loop {
            if self.active.is_none() {
                if self.shards.is_empty() {
                    return Ok(None);
                }
                let path = self.shards.remove(0);
                let file = File::open(&path).map_err(|source| QueueError::io(&path, source))?;
                self.active = Some((path, file));
            }
            let (path, file) = self.active.as_mut().expect("just populated");
            let mut record = [0u8; 32];
            match file.read_exact(&mut record) {
                Ok(()) => return Ok(Some(record)),
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                    let (path, _) = self.active.take().expect("checked Some above");
                    fs::remove_file(&path).map_err(|source| QueueError::io(&path, source))?;
                }
                Err(source) => return Err(QueueError::io(path.clone(), source)),
            }
        }
    }
}

impl QueueResource for ShardReaderState {
    fn on_last_leave(&mut self) {
        let Some((path, mut file)) = self.active.take() else {
            return;
        };
        let mut tail = Vec::new();
        if let Err(source) = file.read_to_end(&mut tail) {
            warn!("failed to read unconsumed tail of {}: {source}", path.display());
            return;
        }
        drop(file);
        let temp_path = temp_sibling(&path);
        if let Err(source) = fs::write(&temp_path, &tail) {
            warn!("failed to checkpoint {}: {source}", temp_path.display());
            return;
        }
        if let Err(source) = fs::rename(&temp_path, &path) {
            warn!("failed to rename checkpoint into {}: {source}", path.display());
        } else {
            debug!("checkpointed partially consumed shard {}", path.display());
        }
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("shard.raw");
    let temp_name = name.strip_prefix("queue_").map_or_else(
        || format!("temp_{name}"),
        |suffix| format!("temp_{suffix}"),
    );
    path.with_file_name(temp_name)
}

/// Consumer handle for one colour's queue directory. Opening freezes the
/// current directory listing into a work list; shards written by a
/// producer after this point are picked up on the next drain pass, not
/// this one.
pub struct QueueReader {
    handle: QueueHandle<ShardReaderState>,
}

impl QueueReader {
    pub fn open(dir: impl AsRef<Path>) -> Result<QueueReader, QueueError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| QueueError::io(dir, source))?;
        let mut shards: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|source| QueueError::io(dir, source))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("queue_") && n.ends_with(".raw"))
            })
            .collect();
        shards.sort();
        Ok(QueueReader {
            handle: QueueHandle::new(ShardReaderState { shards, active: None }),
        })
    }

    pub fn enter(&self) -> QueueReaderGuard {
        QueueReaderGuard { guard: self.handle.enter() }
    }

    /// Convenience one-shot pop: enters and leaves its own scope.
    pub fn pop(&self) -> Result<Option<Blob>, QueueError> {
        self.enter().pop()
    }
}

pub struct QueueReaderGuard {
    guard: QueueGuard<ShardReaderState>,
}

impl QueueReaderGuard {
    pub fn pop(&self) -> Result<Option<Blob>, QueueError> {
        self.guard.with(|state| state.pop())
    }
}
