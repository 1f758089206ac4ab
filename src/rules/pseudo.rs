//! Per-piece pseudo-move enumeration (§4.3) and its relaxed variant (§4.4).
//!
//! Each rule takes the moving side and a source coordinate occupied by a
//! piece of that side and returns destinations reachable by that piece
//! alone, ignoring anchor-safety. The ray walker backing Slope/Stride/
//! Radius is shared; only the direction vectors and the `relaxed` flag
//! differ between a rule and its opponent-threat counterpart.

use crate::codec::{Board, Cell, Coord, Kind, Side};

use super::{mode_check, Mode};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RADIAL: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const PIVOT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

fn forward_dir(side: Side) -> i8 {
    match side {
        Side::Light => 1,
        Side::Dark => -1,
    }
}

fn home_rank(side: Side) -> u8 {
    match side {
        Side::Light => 1,
        Side::Dark => 6,
    }
}

/// Walk each ray in `dirs` from `from`, extending until off-board or a
/// non-VOID cell, per the shared Slope/Stride/Radius semantics.
///
/// Non-relaxed: a Same cell blocks without being included; a Different
/// cell is included and terminates the ray; Void is included and the ray
/// continues.
///
/// Relaxed (the opponent-threat variant used by `unsafe_squares`): a Same
/// cell is included and terminates the ray; a Different cell is included
/// and terminates the ray *unless* it is an Anchor, in which case the ray
/// continues through it (x-raying the defended anchor).
pub(crate) fn walk_rays(board: &Board, from: Coord, side: Side, dirs: &[(i8, i8)], relaxed: bool) -> Vec<Coord> {
    let mut out = Vec::new();
    for &(dh, da) in dirs {
        let mut h = from.horizon as i8;
        let mut a = from.axis as i8;
        loop {
            h += dh;
            a += da;
            let coord = match Coord::from_offsets(h, a) {
                Some(c) => c,
                None => break,
            };
            match mode_check(board, coord, side) {
                Mode::Void => out.push(coord),
                Mode::Same => {
                    if relaxed {
                        out.push(coord);
                    }
                    break;
                }
                Mode::Different => {
                    out.push(coord);
                    if relaxed && matches!(board.get(coord), Cell::Piece(_, Kind::Anchor)) {
                        continue;
                    }
                    break;
                }
            }
        }
    }
    out
}

pub(crate) fn slope_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &DIAGONAL, false)
}

pub(crate) fn stride_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &ORTHOGONAL, false)
}

pub(crate) fn radius_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &RADIAL, false)
}

pub(crate) fn slope_relaxed(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &DIAGONAL, true)
}

pub(crate) fn stride_relaxed(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &ORTHOGONAL, true)
}

pub(crate) fn radius_relaxed(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    walk_rays(board, from, side, &RADIAL, true)
}

/// Monotone (pawn-like): one step forward onto Void, two steps from the
/// home rank when both the one-step and two-step squares are Void, and
/// diagonal captures onto a Different cell.
pub(crate) fn monotone_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    let mut out = Vec::new();
    let dir = forward_dir(side);
    let forward = Coord::from_offsets(from.horizon as i8 + dir, from.axis as i8);

    if let Some(forward) = forward {
        if mode_check(board, forward, side) == Mode::Void {
            out.push(forward);

            if from.horizon == home_rank(side) {
                if let Some(forward2) = Coord::from_offsets(forward.horizon as i8 + dir, from.axis as i8) {
                    if mode_check(board, forward2, side) == Mode::Void {
                        out.push(forward2);
                    }
                }
            }
        }

        for da in [-1i8, 1] {
            if let Some(diag) = Coord::from_offsets(forward.horizon as i8, from.axis as i8 + da) {
                if mode_check(board, diag, side) == Mode::Different {
                    out.push(diag);
                }
            }
        }
    }
    out
}

/// Relaxed Monotone: only the two diagonal squares, included unconditionally
/// (regardless of occupant) since they are never reachable by a forward
/// push and always represent a threatened square.
pub(crate) fn monotone_relaxed(side: Side, from: Coord) -> Vec<Coord> {
    let dir = forward_dir(side);
    let forward_horizon = from.horizon as i8 + dir;
    let mut out = Vec::new();
    for da in [-1i8, 1] {
        if let Some(diag) = Coord::from_offsets(forward_horizon, from.axis as i8 + da) {
            out.push(diag);
        }
    }
    out
}

/// Pivot (knight-like): all eight L-shaped offsets, included iff in-bounds
/// and not occupied by a Same piece.
pub(crate) fn pivot_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    PIVOT_OFFSETS
        .iter()
        .filter_map(|&(dh, da)| Coord::from_offsets(from.horizon as i8 + dh, from.axis as i8 + da))
        .filter(|&coord| mode_check(board, coord, side) != Mode::Same)
        .collect()
}

/// Relaxed Pivot: every in-bounds offset, including ones occupied by a
/// Same piece.
pub(crate) fn pivot_relaxed(from: Coord) -> Vec<Coord> {
    PIVOT_OFFSETS
        .iter()
        .filter_map(|&(dh, da)| Coord::from_offsets(from.horizon as i8 + dh, from.axis as i8 + da))
        .collect()
}

/// Anchor (king-like): the eight neighbouring squares, included iff
/// in-bounds and not occupied by a Same piece. This is the unfiltered
/// rule; the anchor-safety drop (§4.4) is applied by the legality module,
/// not here, and this same unfiltered rule is reused verbatim when
/// computing the opponent's threat set (an anchor always threatens its
/// neighbours regardless of its own safety).
pub(crate) fn anchor_moves(board: &Board, side: Side, from: Coord) -> Vec<Coord> {
    RADIAL
        .iter()
        .filter_map(|&(dh, da)| Coord::from_offsets(from.horizon as i8 + dh, from.axis as i8 + da))
        .filter(|&coord| mode_check(board, coord, side) != Mode::Same)
        .collect()
}
