//! Anchor-safety filtering (§4.4) and full move enumeration (§4.5).

use std::collections::HashSet;

use crate::codec::{Board, Cell, Coord, Kind, Side};

use super::pseudo;

/// The set of squares `attacking_side` threatens under the relaxed-ray
/// variant: Monotone contributes only its diagonals (unconditionally),
/// Pivot includes Same-occupied squares, and ray pieces x-ray through a
/// defended Anchor. This is the sole input to anchor-safety filtering.
#[must_use]
pub fn unsafe_squares(board: &Board, attacking_side: Side) -> HashSet<Coord> {
    let mut set = HashSet::new();
    for horizon in 0..8u8 {
        for axis in 0..8u8 {
            let coord = Coord::new(horizon, axis);
            let (side, kind) = match board.get(coord) {
                Cell::Piece(side, kind) => (side, kind),
                Cell::Void => continue,
            };
            if side != attacking_side {
                continue;
            }
            let destinations = match kind {
                Kind::Monotone => pseudo::monotone_relaxed(attacking_side, coord),
                Kind::Pivot => pseudo::pivot_relaxed(coord),
                Kind::Slope => pseudo::slope_relaxed(board, attacking_side, coord),
                Kind::Stride => pseudo::stride_relaxed(board, attacking_side, coord),
                Kind::Radius => pseudo::radius_relaxed(board, attacking_side, coord),
                Kind::Anchor => pseudo::anchor_moves(board, attacking_side, coord),
            };
            set.extend(destinations);
        }
    }
    set
}

/// Sweep horizon 0..7, axis 0..7 and return every legal successor move for
/// `side`, grouped by source square in traversal order. Record order in
/// the store file is exactly this traversal order — it is an observable,
/// tested property, not an implementation detail.
///
/// Anchor-destination filtering (dropping destinations in the opponent's
/// unsafe set) is unconditional. The coarse check-evasion rule additionally
/// restricts *non-anchor* pieces to contribute no moves at all when the
/// moving side's anchor square is itself in the opponent's unsafe set; it
/// does not verify that a non-anchor move actually resolves the check, so
/// an absolute pin is not enforced here (see DESIGN.md).
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<(Coord, Vec<Coord>)> {
    let opponent = side.other();
    let threatened = unsafe_squares(board, opponent);
    let anchor_in_check = board
        .find_anchor(side)
        .is_some_and(|anchor| threatened.contains(&anchor));

    let mut moves = Vec::new();
    for horizon in 0..8u8 {
        for axis in 0..8u8 {
            let coord = Coord::new(horizon, axis);
            let (piece_side, kind) = match board.get(coord) {
                Cell::Piece(side, kind) => (side, kind),
                Cell::Void => continue,
            };
            if piece_side != side {
                continue;
            }
            if anchor_in_check && kind != Kind::Anchor {
                continue;
            }

            let destinations = match kind {
                Kind::Monotone => pseudo::monotone_moves(board, side, coord),
                Kind::Pivot => pseudo::pivot_moves(board, side, coord),
                Kind::Slope => pseudo::slope_moves(board, side, coord),
                Kind::Stride => pseudo::stride_moves(board, side, coord),
                Kind::Radius => pseudo::radius_moves(board, side, coord),
                Kind::Anchor => pseudo::anchor_moves(board, side, coord)
                    .into_iter()
                    .filter(|destination| !threatened.contains(destination))
                    .collect(),
            };
            moves.push((coord, destinations));
        }
    }
    moves
}

/// Public alias for [`legal_moves`] matching the distilled specification's
/// `all_possible_moves` name for the full sweep-and-filter enumeration.
#[inline]
#[must_use]
pub fn all_possible_moves(board: &Board, side: Side) -> Vec<(Coord, Vec<Coord>)> {
    legal_moves(board, side)
}
