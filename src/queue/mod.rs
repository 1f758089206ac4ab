//! Shard queue: append-only, size-capped, file-sharded FIFO of 32-byte
//! position blobs (§4.7), plus a bundle of both colours' queues (§4.8's
//! disjoint-directories requirement).

mod error;
mod handle;
mod reader;
mod writer;

pub use error::QueueError;
pub use reader::{QueueReader, QueueReaderGuard};
pub use writer::{ShardQueue, ShardQueueGuard};

use crate::codec::Side;
use crate::store::Store;

/// Both colours' producer handles, opened once per process and shared by
/// every `engine::pack` call and the driver loop for the lifetime of the
/// run. Disjoint directories guarantee a drain pass never reads and writes
/// the same queue's files.
pub struct Queues {
    light: ShardQueue,
    dark: ShardQueue,
}

impl Queues {
    pub fn open(store: &Store, max_shard_bytes: u64) -> Result<Queues, QueueError> {
        Ok(Queues {
            light: ShardQueue::open(store.queue_dir(Side::Light), max_shard_bytes)?,
            dark: ShardQueue::open(store.queue_dir(Side::Dark), max_shard_bytes)?,
        })
    }

    #[must_use]
    pub fn writer(&self, side: Side) -> &ShardQueue {
        match side {
            Side::Light => &self.light,
            Side::Dark => &self.dark,
        }
    }

    /// Open a fresh reader over `side`'s queue directory, freezing its
    /// current shard listing into this drain pass's work list.
    pub fn reader(&self, store: &Store, side: Side) -> Result<QueueReader, QueueError> {
        QueueReader::open(reader_dir(store, side))
    }
}

fn reader_dir(store: &Store, side: Side) -> std::path::PathBuf {
    store.queue_dir(side)
}
