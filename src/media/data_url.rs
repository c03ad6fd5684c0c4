// SPDX-License-Identifier: MPL-2.0
//! Inline `data:` URL encoding for stored images.
//!
//! Uploaded images are embedded into the works collection as
//! `data:<mime>;base64,<payload>` strings, the same inline format the
//! collection's JSON originated with.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encodes raw bytes as a base64 data URL with the given MIME type.
#[must_use]
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decodes a base64 data URL into its MIME type and raw bytes.
///
/// Returns `None` for anything that is not a well-formed base64 data URL,
/// including plain paths like the seeded sample work's image.
#[must_use]
pub fn decode(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}
