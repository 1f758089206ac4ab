//! Driver loop (§4.8): alternately drain the light and dark queues until a
//! full pass over both leaves nothing behind.

use crate::codec::Side;
use crate::engine::{self, PackOutcome};
use crate::error::PositionGraphError;
use crate::queue::Queues;
use crate::store::Store;

/// Result of draining one colour's queue for one pass.
struct DrainResult {
    /// Number of entries that turned into a freshly written move-table file.
    packed: usize,
    /// `true` if this pass ran the queue down to empty rather than stopping
    /// because it hit `batch_size` new packs.
    exhausted: bool,
}

/// Drain up to `batch_size` *new* positions from `side`'s queue, matching
/// entries already on disk without counting against the batch. Mirrors
/// `process_queue`'s `for state in qc.read(32): if count >= batch_size: break`
/// loop, including its corner case: a long run of already-packed duplicates
/// can still drain the whole queue in one pass even though none of them
/// advance `packed`.
///
/// Holds one outer scope on the opposite colour's write queue for the
/// whole pass, mirroring `with QueueController(alt_queue_dir) as alt_qc`
/// wrapping the entire batch loop: each nested `engine::pack` call's own
/// `enter()`/`leave()` nests under this one, so the use-count never drops
/// back to zero mid-pass and the active shard is only rotated when it is
/// actually full, not once per packed position.
fn drain_queue(store: &Store, queues: &Queues, side: Side, batch_size: usize) -> Result<DrainResult, PositionGraphError> {
    let reader = queues.reader(store, side)?;
    let scope = reader.enter();
    let _opponent_scope = queues.writer(side.other()).enter();
    let mut packed = 0usize;
    loop {
        if packed >= batch_size {
            return Ok(DrainResult { packed, exhausted: false });
        }
        let Some(blob) = scope.pop()? else {
            return Ok(DrainResult { packed, exhausted: true });
        };
        let board = crate::codec::Board::from_blob(&blob)?;
        match engine::pack(store, queues, board, side)? {
            PackOutcome::AlreadyPacked => {
                log::debug!("skipped already-packed entry draining {side}");
            }
            PackOutcome::Packed { successor_count } => {
                packed += 1;
                log::debug!("packed entry with {successor_count} successors draining {side}");
            }
        }
    }
}

/// Run the light/dark drain alternation to completion: the loop stops once
/// a pass drains both queues down to empty, not merely down to zero new
/// packs (a pass can report zero new packs on a non-empty queue if
/// `batch_size` truncated it, or if every entry was a duplicate).
pub fn run_to_completion(store: &Store, queues: &Queues, batch_size: usize) -> Result<(), PositionGraphError> {
    loop {
        let light = drain_queue(store, queues, Side::Light, batch_size).map_err(|err| {
            log::warn!("drain pass failed on light queue: {err}");
            err
        })?;
        let dark = drain_queue(store, queues, Side::Dark, batch_size).map_err(|err| {
            log::warn!("drain pass failed on dark queue: {err}");
            err
        })?;
        log::info!("drain pass: light packed={} dark packed={}", light.packed, dark.packed);
        if light.exhausted && dark.exhausted {
            return Ok(());
        }
    }
}
