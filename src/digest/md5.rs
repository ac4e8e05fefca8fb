//! DISCLAIMER: MD5 is a legacy hash with practical collision attacks. This engine exists
//! to reproduce digest values that existing systems already rely on. Do not use it for
//! new security-sensitive designs; reach for SHA-2 or SHA-3 instead.
//!
//! The engine works on little-endian 32-bit words (see [`crate::digest::words`]). Padding
//! is applied at the word level: a single set bit after the message, zero fill up to
//! 448 bits mod 512, then the 64-bit message length in bits.

use super::words::pack;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Words per 512-bit block.
pub const BLOCK_WORDS: usize = 16;

/// Bytes per 512-bit block.
pub const BLOCK_SIZE: usize = 64;

/// A finished MD5 digest.
pub type RawDigest = [u8; MD5_OUTPUT_SIZE];

/// The initial values for (A, B, C, D) from the MD5 specification.
const INIT_A: u32 = 0x67452301;
const INIT_B: u32 = 0xEFCDAB89;
const INIT_C: u32 = 0x98BADCFE;
const INIT_D: u32 = 0x10325476;

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// The amount of left rotation performed in each MD5 step.
#[rustfmt::skip]
const S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// The four MD5 chaining registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// Registers loaded with the standard initial constants.
    pub fn new() -> Self {
        Self {
            a: INIT_A,
            b: INIT_B,
            c: INIT_C,
            d: INIT_D,
        }
    }

    /// Folds one 16-word block into the registers.
    ///
    /// The step sequence depends only on the step index, never on the data.
    pub fn compress(&mut self, x: &[u32; BLOCK_WORDS]) {
        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);

        for i in 0..64 {
            let (f, g) = match i / 16 {
                // FF
                0 => ((b & c) | (!b & d), i),
                // GG
                1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
                // HH
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                // II
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let temp = a.wrapping_add(f).wrapping_add(x[g]).wrapping_add(K[i]);
            let temp = temp.rotate_left(S[i]).wrapping_add(b);

            a = d;
            d = c;
            c = b;
            b = temp;
        }

        self.a = self.a.wrapping_add(a);
        self.b = self.b.wrapping_add(b);
        self.c = self.c.wrapping_add(c);
        self.d = self.d.wrapping_add(d);
    }

    /// A, B, C, D as little-endian bytes.
    pub fn to_bytes(&self) -> RawDigest {
        let mut output = [0u8; MD5_OUTPUT_SIZE];
        output[0..4].copy_from_slice(&self.a.to_le_bytes());
        output[4..8].copy_from_slice(&self.b.to_le_bytes());
        output[8..12].copy_from_slice(&self.c.to_le_bytes());
        output[12..16].copy_from_slice(&self.d.to_le_bytes());
        output
    }
}

/// A padded message: little-endian words, length a multiple of [`BLOCK_WORDS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBlock {
    words: Vec<u32>,
}

impl WordBlock {
    /// Pads `words`, whose first `bit_len` bits are the message.
    ///
    /// Sets the bit right after the message, grows (or truncates) the words to the
    /// final block boundary and writes `bit_len` into the last two words of that
    /// block, low word first. Bits already present after `bit_len` are left alone;
    /// [`pack`] never produces any.
    ///
    /// A `bit_len` beyond the supplied words is clamped to `32 * words.len()`: the
    /// message cannot be longer than the words that carry it.
    ///
    /// The high length word is `bit_len >> 32`, which is zero below 2^32 bits; legacy
    /// word-array implementations never set it.
    pub fn pad(mut words: Vec<u32>, bit_len: u64) -> Self {
        let bit_len = bit_len.min((words.len() as u64).saturating_mul(32));
        let length_index = ((((bit_len + 64) >> 9) << 4) + 14) as usize;
        words.resize(length_index + 2, 0);

        words[(bit_len >> 5) as usize] |= 0x80u32 << (bit_len % 32);
        words[length_index] = bit_len as u32;
        words[length_index + 1] = (bit_len >> 32) as u32;

        Self { words }
    }

    /// Pads a byte message.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::pad(pack(bytes), (bytes.len() as u64).wrapping_mul(8))
    }

    /// The padded words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of 512-bit blocks.
    pub fn block_count(&self) -> usize {
        self.words.len() / BLOCK_WORDS
    }

    /// Iterates over the 16-word blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = [u32; BLOCK_WORDS]> + '_ {
        self.words.chunks_exact(BLOCK_WORDS).map(|chunk| {
            let mut block = [0u32; BLOCK_WORDS];
            block.copy_from_slice(chunk);
            block
        })
    }

    /// Runs the compression engine over every block.
    pub fn digest(&self) -> RawDigest {
        let mut state = HashState::new();
        for block in self.blocks() {
            state.compress(&block);
        }
        state.to_bytes()
    }
}

/// MD5 of a word sequence whose first `bit_len` bits are the message.
///
/// Total over every input; see [`WordBlock::pad`] for how an oversized `bit_len` is
/// treated.
pub fn digest(words: Vec<u32>, bit_len: u64) -> RawDigest {
    let block = WordBlock::pad(words, bit_len);
    log::trace!("md5: {} bits in {} blocks", bit_len, block.block_count());
    block.digest()
}

/// MD5 of a byte slice in a single shot.
pub fn md5_digest(data: &[u8]) -> RawDigest {
    WordBlock::from_bytes(data).digest()
}

/// An incremental MD5 context.
///
/// Feeding the same bytes through any sequence of [`Md5::update`] calls yields the same
/// digest as [`md5_digest`] over their concatenation.
#[derive(Debug, Clone)]
pub struct Md5 {
    state: HashState,
    /// 64-byte block buffer
    buffer: [u8; BLOCK_SIZE],
    /// Current buffer length
    buffer_len: usize,
    /// Total message length in bits mod 2^64
    length_bits: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a new MD5 context.
    pub fn new() -> Self {
        Self {
            state: HashState::new(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            length_bits: 0,
        }
    }

    /// Discards everything fed so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds more message bytes.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length_bits = self
            .length_bits
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        while !data.is_empty() {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == BLOCK_SIZE {
                self.process_buffer();
                self.buffer_len = 0;
            }
        }
    }

    /// Finalizes the hash, returning 16 bytes.
    pub fn finalize(mut self) -> RawDigest {
        // append the 0x80
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // if there's not enough room for 8-byte length, process block
        if self.buffer_len > 56 {
            self.buffer[self.buffer_len..].fill(0);
            self.process_buffer();
            self.buffer_len = 0;
        }
        self.buffer[self.buffer_len..56].fill(0);
        self.buffer[56..].copy_from_slice(&self.length_bits.to_le_bytes());
        self.process_buffer();

        self.state.to_bytes()
    }

    fn process_buffer(&mut self) {
        let mut block = [0u32; BLOCK_WORDS];
        for (word, bytes) in block.iter_mut().zip(self.buffer.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        self.state.compress(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known test vectors from RFC 1321

    #[test]
    fn test_md5_rfc1321_suite() {
        let vectors: [(&str, &str); 7] = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];
        for (input, expected) in vectors {
            assert_eq!(hex::encode(md5_digest(input.as_bytes())), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_md5_quick_brown_fox() {
        let digest = md5_digest(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(hex::encode(digest), "9e107d9d372bb6826bd81d3542a419d6");
        let digest = md5_digest(b"The quick brown fox jumps over the lazy dog.");
        assert_eq!(hex::encode(digest), "e4d909c290d0fb1ca068ffaddf22cbd0");
    }

    #[test]
    fn test_padding_layout_empty() {
        let block = WordBlock::pad(Vec::new(), 0);
        assert_eq!(block.block_count(), 1);
        assert_eq!(block.words()[0], 0x80);
        assert!(block.words()[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_padding_layout_spills_into_second_block() {
        // 56 bytes leaves no room for the length field in the first block
        let block = WordBlock::from_bytes(&[0x61; 56]);
        assert_eq!(block.block_count(), 2);
        assert_eq!(block.words()[14], 0x80);
        assert_eq!(block.words()[30], 448);
        assert_eq!(block.words()[31], 0);

        let block = WordBlock::from_bytes(&[0x61; 55]);
        assert_eq!(block.block_count(), 1);
        assert_eq!(block.words()[13], 0x8061_6161);
        assert_eq!(block.words()[14], 440);
    }

    #[test]
    fn test_oversized_bit_length_is_clamped() {
        assert_eq!(digest(Vec::new(), u64::MAX - 10), md5_digest(b""));
        assert_eq!(digest(Vec::new(), u64::MAX), md5_digest(b""));
        // one word carries at most 32 bits: "abc" plus its zero fill byte
        assert_eq!(digest(pack(b"abc"), 1000), md5_digest(b"abc\0"));
        assert_eq!(digest(pack(b"abc"), 24), md5_digest(b"abc"));
    }

    #[test]
    fn test_word_digest_matches_byte_digest() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(digest(pack(data), data.len() as u64 * 8), md5_digest(data));
    }

    #[test]
    fn test_digest_length_across_block_boundaries() {
        for len in [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 128, 1000] {
            let data = vec![0xA5u8; len];
            assert_eq!(md5_digest(&data).len(), MD5_OUTPUT_SIZE);
        }
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();
        for split in [0usize, 1, 55, 56, 63, 64, 65, 128, 299, 300] {
            let mut hasher = Md5::new();
            hasher.update(&data[..split]);
            hasher.update(&data[split..]);
            assert_eq!(hasher.finalize(), md5_digest(&data), "split at {split}");
        }
    }

    #[test]
    fn test_streaming_reset() {
        let mut hasher = Md5::new();
        hasher.update(b"garbage");
        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hex::encode(hasher.finalize()), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_state_is_fresh_per_call() {
        let first = md5_digest(b"determinism");
        let _ = md5_digest(b"something else entirely");
        assert_eq!(md5_digest(b"determinism"), first);
    }
}
