//! Arbitrary-radix rendering by repeated long division.
//!
//! The input is read as one big unsigned number made of 16-bit big-endian limbs (byte
//! pairs). Each pass divides every limb by the radix, carrying the remainder into the
//! next limb, and keeps the final remainder as one output digit. The number of passes
//! is fixed by the input length, so leading zero digits are kept.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Digits and lowercase letters.
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// The Bitcoin base-58 alphabet (no `0`, `O`, `I` or `l`).
pub const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digits, uppercase then lowercase letters.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered set of output symbols; its length is the radix.
///
/// Symbols are not required to be distinct. Repeated symbols make the output ambiguous
/// but not invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`.
    ///
    /// # Errors
    /// [`Error::InvalidAlphabet`] when there are fewer than two symbols.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            log::debug!("rejecting alphabet with {} symbols", symbols.len());
            return Err(Error::invalid_alphabet(symbols.len()));
        }
        Ok(Self { symbols })
    }

    /// Number of symbols.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol for `digit`, which must be below [`Alphabet::radix`].
    pub fn symbol(&self, digit: usize) -> char {
        self.symbols[digit]
    }

    /// Number of digits emitted for `byte_len` input bytes.
    pub fn digits_for(&self, byte_len: usize) -> usize {
        ((byte_len * 8) as f64 / (self.radix() as f64).log2()).ceil() as usize
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Renders `input` in the radix of `alphabet`, most significant digit first.
///
/// An odd trailing byte becomes the high half of a final limb whose low half is zero.
///
/// # Examples
///
/// ```
/// use legacy_md5::encoding::{to_radix, Alphabet};
///
/// let binary = Alphabet::new("01").unwrap();
/// assert_eq!(to_radix(&[0x00, 0x05], &binary), "0000000000000101");
/// ```
pub fn to_radix(input: &[u8], alphabet: &Alphabet) -> String {
    let divisor = alphabet.radix() as u64;

    let mut dividend: Vec<u16> = input
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
        .collect();

    let full_length = alphabet.digits_for(input.len());
    let mut remainders = Vec::with_capacity(full_length);
    for _ in 0..full_length {
        let mut quotient = Vec::with_capacity(dividend.len());
        let mut x = 0u64;
        for &limb in &dividend {
            x = (x << 16) + limb as u64;
            let q = x / divisor;
            x -= q * divisor;
            // x < divisor on entry, so q always fits a limb
            if !quotient.is_empty() || q > 0 {
                quotient.push(q as u16);
            }
        }
        remainders.push(x as usize);
        dividend = quotient;
    }

    remainders
        .iter()
        .rev()
        .map(|&digit| alphabet.symbol(digit))
        .collect()
}
