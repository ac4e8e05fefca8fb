//! Conversion between byte sequences and little-endian 32-bit words.
//!
//! Byte `i` of the input lands in word `i / 4` at bit offset `8 * (i % 4)`. The MD5
//! message schedule reads words in exactly this layout, so packing big-endian would
//! still "hash" but never match reference digests.

/// Packs bytes into little-endian words, zero-extending a trailing partial word.
///
/// # Examples
///
/// ```
/// use legacy_md5::digest::pack;
///
/// assert_eq!(pack(b"abcde"), vec![0x6463_6261, 0x0000_0065]);
/// ```
pub fn pack(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// Unpacks words into bytes, four per word, least significant byte first.
pub fn unpack(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}
