//! The built-in seed position used to bootstrap a store that does not yet
//! exist (§6 CLI surface). This is the textbook back-ranks-and-pawns
//! arrangement used in scenario S1: a light anchor on `(0, 4)`, a dark
//! anchor on `(7, 4)`, light and dark monotones on their home ranks, and
//! the remaining four ranks empty.

use crate::codec::{Board, Cell, Kind, Side};

const BACK_RANK: [Kind; 8] = [
    Kind::Stride,
    Kind::Pivot,
    Kind::Slope,
    Kind::Radius,
    Kind::Anchor,
    Kind::Slope,
    Kind::Pivot,
    Kind::Stride,
];

/// The standard starting position, with light to move.
#[must_use]
pub fn standard() -> Board {
    let mut cells = [[Cell::Void; 8]; 8];

    // Matrix row 0 is the top of the board, i.e. horizon 7: dark's back rank.
    for (axis, &kind) in BACK_RANK.iter().enumerate() {
        cells[0][axis] = Cell::Piece(Side::Dark, kind);
        cells[7][axis] = Cell::Piece(Side::Light, kind);
    }
    for axis in 0..8 {
        cells[1][axis] = Cell::Piece(Side::Dark, Kind::Monotone);
        cells[6][axis] = Cell::Piece(Side::Light, Kind::Monotone);
    }

    Board::from_matrix(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Coord;
    use crate::rules::all_possible_moves;

    #[test]
    fn anchors_sit_on_axis_four() {
        let board = standard();
        assert_eq!(board.find_anchor(Side::Light), Some(Coord::new(0, 4)));
        assert_eq!(board.find_anchor(Side::Dark), Some(Coord::new(7, 4)));
    }

    #[test]
    fn light_has_twenty_opening_moves() {
        let board = standard();
        let moves = all_possible_moves(&board, Side::Light);
        let total: usize = moves.iter().map(|(_, dests)| dests.len()).sum();
        assert_eq!(total, 20);
    }
}
