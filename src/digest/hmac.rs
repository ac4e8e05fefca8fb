//! HMAC-MD5 (RFC 2104) built directly on the word-level engine.

use super::md5::{digest, md5_digest, RawDigest, BLOCK_WORDS};
use super::words::pack;

const IPAD: u32 = 0x3636_3636;
const OPAD: u32 = 0x5C5C_5C5C;

/// Computes HMAC-MD5 of `message` under `key`.
///
/// Keys longer than one 64-byte block are first replaced by their MD5 digest; shorter
/// keys are zero-extended to a full block.
///
/// # Examples
///
/// ```
/// use legacy_md5::digest::hmac;
///
/// let mac = hmac(b"key", b"The quick brown fox jumps over the lazy dog");
/// assert_eq!(hex::encode(mac), "80070713463e7749b90c2dc24911e275");
/// ```
pub fn hmac(key: &[u8], message: &[u8]) -> RawDigest {
    let mut key_words = pack(key);
    if key_words.len() > BLOCK_WORDS {
        log::debug!("hmac: hashing {}-byte key down to one digest", key.len());
        key_words = pack(&md5_digest(key));
    }
    key_words.resize(BLOCK_WORDS, 0);

    let mut inner: Vec<u32> = key_words.iter().map(|word| word ^ IPAD).collect();
    inner.extend(pack(message));
    let inner_bits = 512 + (message.len() as u64).wrapping_mul(8);
    let inner_digest = digest(inner, inner_bits);

    let mut outer: Vec<u32> = key_words.iter().map(|word| word ^ OPAD).collect();
    outer.extend(pack(&inner_digest));
    digest(outer, 512 + 128)
}
