//! Board codec: conversions between matrix, blob, and hex identifier forms.
//!
//! All four conversions round-trip exactly (see `codec` tests and the
//! `prop_codec_roundtrip` property test). The nibble-pack order here is a
//! hard external contract — it determines every on-disk byte in the store,
//! not just an internal representation.

mod board;
mod cell;
mod coord;
mod error;
mod identifier;

pub use board::Board;
pub use cell::{Cell, Kind, Side, HORIZON};
pub use coord::{Coord, Move};
pub use error::CodecError;
pub use identifier::{Blob, Identifier};
