//! Property-based round-trip tests for the board codec.

use position_graph::codec::{Board, Cell, Kind, Side};
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Void),
        (light_kind_strategy()).prop_map(|kind| Cell::Piece(Side::Light, kind)),
        (dark_kind_strategy()).prop_map(|kind| Cell::Piece(Side::Dark, kind)),
    ]
}

fn light_kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Monotone),
        Just(Kind::Pivot),
        Just(Kind::Slope),
        Just(Kind::Stride),
        Just(Kind::Radius),
        Just(Kind::Anchor),
    ]
}

fn dark_kind_strategy() -> impl Strategy<Value = Kind> {
    light_kind_strategy()
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), 64).prop_map(|flat| {
        let mut cells = [[Cell::Void; 8]; 8];
        for (i, cell) in flat.into_iter().enumerate() {
            cells[i / 8][i % 8] = cell;
        }
        Board::from_matrix(cells)
    })
}

proptest! {
    /// Every randomly populated board survives a blob round trip unchanged.
    #[test]
    fn prop_blob_roundtrip(board in board_strategy()) {
        let blob = board.to_blob();
        let restored = Board::from_blob(&blob).expect("any cell combination decodes");
        prop_assert!(restored == board);
    }

    /// The hex identifier round trip agrees with the blob round trip.
    #[test]
    fn prop_hex_roundtrip(board in board_strategy()) {
        let hex = board.to_identifier().to_hex();
        let restored = Board::from_hex(&hex).expect("hex round trip");
        prop_assert!(restored == board);
    }
}
