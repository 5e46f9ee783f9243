//! Base64 helpers for tool payloads.
//!
//! Decoding is deliberately forgiving: callers paste data URLs, line-wrapped
//! blobs, and URL-safe variants. Anything outside the alphabet is dropped and
//! the remainder is decoded, so malformed input produces garbage bytes that the
//! image decoder rejects later instead of a base64 error here.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Decodes base64 text without ever failing.
///
/// An optional `data:<mime>;base64,` prefix is stripped, `-`/`_` are read as
/// `+`/`/`, characters outside the alphabet are skipped, decoding stops at the
/// first `=`, and a dangling final character is discarded.
pub fn decode_lenient(input: &str) -> Vec<u8> {
    let payload = strip_data_url(input.trim());

    let mut cleaned: Vec<u8> = payload
        .bytes()
        .take_while(|&b| b != b'=')
        .filter_map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => Some(b),
            b'-' => Some(b'+'),
            b'_' => Some(b'/'),
            _ => None,
        })
        .collect();

    // A single leftover sextet cannot encode a byte.
    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }

    LENIENT.decode(&cleaned).unwrap_or_default()
}

/// Encodes bytes as standard padded base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn strip_data_url(input: &str) -> &str {
    if !input.starts_with("data:") {
        return input;
    }
    match input.find(',') {
        Some(idx) => &input[idx + 1..],
        None => input,
    }
}
