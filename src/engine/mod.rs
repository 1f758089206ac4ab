//! Frontier expansion engine (§4.6): for one position, write its
//! move-table file and enqueue unseen successors into the opposite
//! colour's queue.

mod error;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

pub use error::EngineError;

use crate::codec::{Board, Move, Side};
use crate::queue::Queues;
use crate::rules::all_possible_moves;
use crate::store::Store;

/// Magic byte leading every move-table record.
const RECORD_MAGIC: u8 = 0x78;

/// Outcome of one `pack` call. `AlreadyPacked` is a signal, not an error:
/// the driver matches on it and moves on without treating it as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackOutcome {
    AlreadyPacked,
    Packed { successor_count: usize },
}

/// Expand one `(board, side)` position: write its move-table file under
/// `side`'s store partition, and append each unseen successor to the
/// opposite side's queue. Logical errors (none exist at this layer — every
/// input `Board` is already well-formed) are detected before any file is
/// created; I/O errors can still leave a partially written move-table file,
/// per §5's documented partial-file hazard.
pub fn pack(store: &Store, queues: &Queues, board: Board, side: Side) -> Result<PackOutcome, EngineError> {
    let identifier = board.to_identifier();
    let path = store.path_for(side, &identifier);
    if path.is_file() {
        return Ok(PackOutcome::AlreadyPacked);
    }

    let moves = all_possible_moves(&board, side);

    store.ensure_parent_dir(&path)?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(PackOutcome::AlreadyPacked),
        Err(source) => return Err(EngineError::Io { path, source }),
    };

    let opponent = side.other();
    let opponent_queue = queues.writer(opponent);
    let queue_scope = opponent_queue.enter();

    let mut successor_count = 0usize;
    for (source, destinations) in moves {
        for destination in destinations {
            let successor = board.apply_move(Move::new(source, destination));
            let successor_blob = successor.to_blob();

            let mut record = [0u8; 35];
            record[0] = RECORD_MAGIC;
            record[1] = source.to_byte();
            record[2] = destination.to_byte();
            record[3..].copy_from_slice(&successor_blob);
            file.write_all(&record).map_err(|source| EngineError::Io { path: path.clone(), source })?;
            successor_count += 1;

            if !store.exists(opponent, &successor.to_identifier()) {
                queue_scope.push(&successor_blob)?;
            }
        }
    }

    log::debug!("packed {} ({side}) with {successor_count} successors", identifier.to_hex());
    Ok(PackOutcome::Packed { successor_count })
}
