//! Error types for board and identifier codec operations.

use std::fmt;

/// Error type for codec failures (blob, matrix, and hex conversions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Hex identifier is not exactly 64 lowercase `[0-9a-f]` characters.
    MalformedHex { found_len: usize },
    /// A nibble does not decode to one of the 13 permitted cell codes.
    MalformedBlob { nibble: u8, flat_position: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MalformedHex { found_len } => {
                write!(f, "hex identifier must be 64 lowercase hex characters, found length {found_len}")
            }
            CodecError::MalformedBlob { nibble, flat_position } => {
                write!(f, "invalid cell code 0x{nibble:x} at flat position {flat_position}")
            }
        }
    }
}

impl std::error::Error for CodecError {}
