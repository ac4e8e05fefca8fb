use crate::error::Result;

/// Letter case for hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    /// `0-9a-f`
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

/// Renders bytes as hex, high nibble first.
pub fn to_hex(bytes: &[u8], case: HexCase) -> String {
    match case {
        HexCase::Lower => hex::encode(bytes),
        HexCase::Upper => hex::encode_upper(bytes),
    }
}

/// Decodes hex of either case back into bytes.
///
/// # Examples
///
/// ```
/// use legacy_md5::from_hex;
///
/// assert_eq!(from_hex("00fF10").unwrap(), vec![0x00, 0xFF, 0x10]);
/// assert!(from_hex("abc").is_err());
/// ```
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
