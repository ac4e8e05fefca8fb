//! String-in, string-out entry points.
//!
//! Text is normalized to UTF-8, hashed, and rendered. These mirror the function set
//! that legacy JavaScript MD5 libraries expose, so digests computed here line up with
//! values produced on the browser side.
//!
//! The `_utf16` variants take raw UTF-16 code units as a host string holds them. Lone
//! surrogates are hashed the permissive way described in [`crate::text`].

use crate::digest::{hmac, md5_digest, RawDigest};
use crate::encoding::{Alphabet, Encoder};
use crate::error::Result;
use crate::text::{normalize, normalize_str};

/// Input hashed by [`self_test`].
pub const SELF_TEST_INPUT: &str = "abc";

/// Expected MD5 of [`SELF_TEST_INPUT`].
pub const SELF_TEST_DIGEST: &str = "900150983cd24fb0d6963f7d28e17f72";

/// MD5 of the UTF-8 form of `text`.
pub fn md5_raw(text: &str) -> RawDigest {
    md5_digest(&normalize_str(text))
}

/// HMAC-MD5 of the UTF-8 form of `data` under the UTF-8 form of `key`.
pub fn hmac_md5_raw(key: &str, data: &str) -> RawDigest {
    hmac(&normalize_str(key), &normalize_str(data))
}

/// Lowercase hex MD5 of `text`.
pub fn md5_hex(text: &str) -> String {
    md5_hex_with(text, &Encoder::default())
}

/// Hex MD5 of `text` in the encoder's case.
pub fn md5_hex_with(text: &str, encoder: &Encoder) -> String {
    encoder.hex(&md5_raw(text))
}

/// Unpadded base-64 MD5 of `text`.
pub fn md5_base64(text: &str) -> String {
    md5_base64_with(text, &Encoder::default())
}

/// Base-64 MD5 of `text` with the encoder's pad.
pub fn md5_base64_with(text: &str, encoder: &Encoder) -> String {
    encoder.base64(&md5_raw(text))
}

/// MD5 of `text` rendered with the symbols of `alphabet`.
///
/// # Errors
/// Fails before hashing when `alphabet` has fewer than two symbols.
pub fn md5_any(text: &str, alphabet: &str) -> Result<String> {
    let alphabet = Alphabet::new(alphabet)?;
    Ok(Encoder::default().radix(&md5_raw(text), &alphabet))
}

/// Lowercase hex HMAC-MD5.
pub fn hmac_md5_hex(key: &str, data: &str) -> String {
    hmac_md5_hex_with(key, data, &Encoder::default())
}

/// Hex HMAC-MD5 in the encoder's case.
pub fn hmac_md5_hex_with(key: &str, data: &str, encoder: &Encoder) -> String {
    encoder.hex(&hmac_md5_raw(key, data))
}

/// Unpadded base-64 HMAC-MD5.
pub fn hmac_md5_base64(key: &str, data: &str) -> String {
    hmac_md5_base64_with(key, data, &Encoder::default())
}

/// Base-64 HMAC-MD5 with the encoder's pad.
pub fn hmac_md5_base64_with(key: &str, data: &str, encoder: &Encoder) -> String {
    encoder.base64(&hmac_md5_raw(key, data))
}

/// HMAC-MD5 rendered with the symbols of `alphabet`.
///
/// # Errors
/// Fails before hashing when `alphabet` has fewer than two symbols.
pub fn hmac_md5_any(key: &str, data: &str, alphabet: &str) -> Result<String> {
    let alphabet = Alphabet::new(alphabet)?;
    Ok(Encoder::default().radix(&hmac_md5_raw(key, data), &alphabet))
}

/// MD5 of UTF-16 code units, normalized to UTF-8.
pub fn md5_raw_utf16(units: &[u16]) -> RawDigest {
    md5_digest(&normalize(units))
}

/// HMAC-MD5 over UTF-16 key and data units, both normalized to UTF-8.
pub fn hmac_md5_raw_utf16(key: &[u16], data: &[u16]) -> RawDigest {
    hmac(&normalize(key), &normalize(data))
}

/// Hex MD5 of UTF-16 code units in the encoder's case.
pub fn md5_hex_utf16(units: &[u16], encoder: &Encoder) -> String {
    encoder.hex(&md5_raw_utf16(units))
}

/// Base-64 MD5 of UTF-16 code units with the encoder's pad.
pub fn md5_base64_utf16(units: &[u16], encoder: &Encoder) -> String {
    encoder.base64(&md5_raw_utf16(units))
}

/// MD5 of UTF-16 code units rendered with the symbols of `alphabet`.
///
/// # Errors
/// Fails before hashing when `alphabet` has fewer than two symbols.
pub fn md5_any_utf16(units: &[u16], alphabet: &str) -> Result<String> {
    let alphabet = Alphabet::new(alphabet)?;
    Ok(Encoder::default().radix(&md5_raw_utf16(units), &alphabet))
}

/// Hex HMAC-MD5 of UTF-16 key and data in the encoder's case.
pub fn hmac_md5_hex_utf16(key: &[u16], data: &[u16], encoder: &Encoder) -> String {
    encoder.hex(&hmac_md5_raw_utf16(key, data))
}

/// Base-64 HMAC-MD5 of UTF-16 key and data with the encoder's pad.
pub fn hmac_md5_base64_utf16(key: &[u16], data: &[u16], encoder: &Encoder) -> String {
    encoder.base64(&hmac_md5_raw_utf16(key, data))
}

/// HMAC-MD5 of UTF-16 key and data rendered with the symbols of `alphabet`.
///
/// # Errors
/// Fails before hashing when `alphabet` has fewer than two symbols.
pub fn hmac_md5_any_utf16(key: &[u16], data: &[u16], alphabet: &str) -> Result<String> {
    let alphabet = Alphabet::new(alphabet)?;
    Ok(Encoder::default().radix(&hmac_md5_raw_utf16(key, data), &alphabet))
}

/// Checks the engine against a known digest.
///
/// Meant to run once at startup so a miscompiled build is caught before it hands out
/// wrong digests.
pub fn self_test() -> bool {
    let ok = md5_hex(SELF_TEST_INPUT).eq_ignore_ascii_case(SELF_TEST_DIGEST);
    if ok {
        log::debug!("md5 self-test passed");
    } else {
        log::warn!("md5 self-test failed");
    }
    ok
}
