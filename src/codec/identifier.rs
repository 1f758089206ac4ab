//! The 32-byte blob and its 64-char lowercase hex identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// The 32-byte little-packed form of a board; see [`crate::codec::Board`]
/// for the nibble-pack layout. A blob doubles as a queue record.
pub type Blob = [u8; 32];

const HEX_CHARS: usize = 64;

/// A position's content address: the lowercase hex encoding of its blob.
/// Equal boards yield equal identifiers by construction, since the blob is
/// a deterministic function of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(pub Blob);

impl Identifier {
    #[inline]
    #[must_use]
    pub const fn from_blob(blob: Blob) -> Identifier {
        Identifier(blob)
    }

    #[inline]
    #[must_use]
    pub const fn as_blob(&self) -> &Blob {
        &self.0
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_CHARS);
        for byte in self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }

    pub fn from_hex(hex: &str) -> Result<Identifier, CodecError> {
        if hex.len() != HEX_CHARS || !hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(CodecError::MalformedHex { found_len: hex.len() });
        }
        let mut blob = [0u8; 32];
        for (i, byte) in blob.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| CodecError::MalformedHex { found_len: hex.len() })?;
        }
        Ok(Identifier(blob))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.to_hex())
    }
}

impl FromStr for Identifier {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Identifier, CodecError> {
        Identifier::from_hex(s)
    }
}
