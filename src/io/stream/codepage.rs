//! Byte-string names
//!
//! Names, user info and table strings are raw byte strings on disk. They
//! are exposed as `String` through Windows-1252, whose table maps each of
//! the 256 byte values to a distinct character, so any stored name decodes
//! and encodes back to the same bytes.

use crate::error::{LayoutError, Result};
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// Decode stored bytes; never fails
pub fn decode(bytes: &[u8]) -> String {
    // no BOM sniffing: a leading EF BB BF is three name bytes
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encode a name for storage.
///
/// Characters outside the code page are rejected instead of being replaced.
pub fn encode(text: &str) -> Result<Cow<'_, [u8]>> {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(text);
    if unmappable {
        return Err(LayoutError::Encoding(format!(
            "'{text}' has characters with no single-byte form"
        )));
    }
    Ok(bytes)
}
