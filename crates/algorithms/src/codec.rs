//! Text⇄bytes and bytes⇄hex conversions
//!
//! An independent leaf: nothing here knows about curves or keystreams.
//!
//! Hex decoding is forgiving about formatting and strict about content:
//! any non-hex character (separators, whitespace, stray punctuation) is
//! stripped before pairing, and if the surviving digits cannot form whole
//! bytes the input is rejected with an explicit [`Error::MalformedHex`].
//! Silently truncating the final odd digit would also satisfy round-trip
//! uses, but it is a data-loss path, so rejection wins.

use crate::error::{Error, Result};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

/// UTF-8 encode a text message.
pub fn encode_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode bytes as UTF-8 with replacement semantics.
///
/// Malformed sequences become U+FFFD replacement characters rather than
/// errors. A wrong-key decryption therefore yields visible mojibake
/// instead of failing, which is the behavior the demo wants on display.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

/// Encode bytes as lowercase hex, two digits per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// Non-hex characters are stripped first, so `"de:ad be-ef"` decodes the
/// same as `"deadbeef"`; both digit cases are accepted. An odd number of
/// digits after stripping is rejected with [`Error::MalformedHex`].
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.chars().filter(char::is_ascii_hexdigit).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::MalformedHex {
            context: "hex decoding",
            reason: "odd number of hex digits",
        });
    }
    hex::decode(&digits).map_err(|_| Error::MalformedHex {
        context: "hex decoding",
        reason: "invalid hex digit",
    })
}
