//! Round-trip and boundary tests for the board codec.

use position_graph::codec::{Board, Cell, Identifier, Kind, Side};
use position_graph::seed;

#[test]
fn blob_hex_matrix_round_trip() {
    let board = seed::standard();
    let blob = board.to_blob();
    let restored = Board::from_blob(&blob).expect("standard position decodes");
    assert!(restored == board, "blob round trip must preserve every cell");

    let hex = board.to_identifier().to_hex();
    assert_eq!(hex.len(), 64);
    let from_hex = Board::from_hex(&hex).expect("hex round trip");
    assert!(from_hex == board);
}

#[test]
fn empty_board_has_an_all_zero_identifier() {
    let board = Board::from_matrix([[Cell::Void; 8]; 8]);
    let id = board.to_identifier();
    assert_eq!(id.to_hex(), "0".repeat(64));
}

#[test]
fn malformed_hex_length_is_rejected() {
    let err = Board::from_hex("abcd").unwrap_err();
    assert!(format!("{err}").contains("64"));
}

#[test]
fn identifier_equality_matches_board_equality() {
    let a = seed::standard();
    let b = Board::from_blob(&a.to_blob()).unwrap();
    assert_eq!(a.to_identifier(), b.to_identifier());
}

#[test]
fn every_nibble_value_decodes_to_its_documented_cell() {
    let light = [
        (0x1, Kind::Monotone),
        (0x2, Kind::Pivot),
        (0x3, Kind::Slope),
        (0x4, Kind::Stride),
        (0x5, Kind::Radius),
        (0x6, Kind::Anchor),
    ];
    for (nibble, kind) in light {
        assert_eq!(Cell::from_nibble(nibble).unwrap(), Cell::Piece(Side::Light, kind));
    }
    let dark = [
        (0xA, Kind::Monotone),
        (0xB, Kind::Pivot),
        (0xC, Kind::Slope),
        (0xD, Kind::Stride),
        (0xE, Kind::Radius),
        (0xF, Kind::Anchor),
    ];
    for (nibble, kind) in dark {
        assert_eq!(Cell::from_nibble(nibble).unwrap(), Cell::Piece(Side::Dark, kind));
    }
    assert_eq!(Cell::from_nibble(0x0).unwrap(), Cell::Void);
    assert!(Cell::from_nibble(0x8).is_err());
    assert!(Cell::from_nibble(0x9).is_err());
}

#[test]
fn identifier_from_hex_rejects_uppercase() {
    let mut hex = seed::standard().to_identifier().to_hex();
    hex.replace_range(0..1, "A");
    assert!(Identifier::from_hex(&hex).is_err());
}
