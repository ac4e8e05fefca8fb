//! Conversion of host text into the byte sequences that get hashed.
//!
//! Hosts that store strings as UTF-16 code units (JavaScript, Java, Windows APIs) can
//! hand over text containing unpaired surrogates. [`normalize`] keeps those instead of
//! rejecting them: a lone surrogate is encoded as if it were an ordinary BMP code point,
//! producing three bytes. That output is not valid UTF-8, but it is what legacy digest
//! producers hash, so it is preserved for bit-exact compatibility.

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Encodes UTF-16 code units as UTF-8 bytes.
///
/// A high surrogate directly followed by a low surrogate is combined into one code point
/// above U+FFFF. Any other unit, including an unpaired surrogate, is encoded on its own.
///
/// # Examples
///
/// ```
/// use legacy_md5::text::normalize;
///
/// let units: Vec<u16> = "a\u{1F600}".encode_utf16().collect();
/// assert_eq!(normalize(&units), vec![0x61, 0xF0, 0x9F, 0x98, 0x80]);
///
/// // A lone high surrogate survives as three bytes.
/// assert_eq!(normalize(&[0xD83D]), vec![0xED, 0xA0, 0xBD]);
/// ```
pub fn normalize(units: &[u16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        let x = units[i];
        let y = units.get(i + 1).copied().unwrap_or(0);
        let code_point = if HIGH_SURROGATES.contains(&x) && LOW_SURROGATES.contains(&y) {
            i += 1;
            0x10000 + (((x as u32) & 0x03FF) << 10) + ((y as u32) & 0x03FF)
        } else {
            x as u32
        };
        push_utf8(&mut output, code_point);
        i += 1;
    }
    output
}

/// Normalizes a Rust string.
///
/// A `&str` can never hold an unpaired surrogate, so this is exactly its UTF-8 bytes.
pub fn normalize_str(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Serializes each UTF-16 code unit low byte first.
pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Serializes each UTF-16 code unit high byte first.
pub fn utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

fn push_utf8(output: &mut Vec<u8>, x: u32) {
    match x {
        0..=0x7F => output.push(x as u8),
        0x80..=0x7FF => output.extend_from_slice(&[
            0xC0 | ((x >> 6) & 0x1F) as u8,
            0x80 | (x & 0x3F) as u8,
        ]),
        0x800..=0xFFFF => output.extend_from_slice(&[
            0xE0 | ((x >> 12) & 0x0F) as u8,
            0x80 | ((x >> 6) & 0x3F) as u8,
            0x80 | (x & 0x3F) as u8,
        ]),
        // combined surrogate pairs top out at 0x10FFFF
        _ => output.extend_from_slice(&[
            0xF0 | ((x >> 18) & 0x07) as u8,
            0x80 | ((x >> 12) & 0x3F) as u8,
            0x80 | ((x >> 6) & 0x3F) as u8,
            0x80 | (x & 0x3F) as u8,
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize(&units("abc")), b"abc".to_vec());
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_length_thresholds() {
        // U+00E9, U+20AC, U+1F600
        assert_eq!(normalize(&units("\u{e9}")), vec![0xC3, 0xA9]);
        assert_eq!(normalize(&units("\u{20ac}")), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(normalize(&units("\u{1F600}")), vec![0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn test_surrogate_pair_is_one_code_point() {
        let pair = units("\u{1F600}");
        assert_eq!(pair, vec![0xD83D, 0xDE00]);
        let bytes = normalize(&pair);
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes, "\u{1F600}".as_bytes());
    }

    #[test]
    fn test_unpaired_surrogates_are_kept() {
        // lone low surrogate
        assert_eq!(normalize(&[0xDE00]), vec![0xED, 0xB8, 0x80]);
        // high surrogate followed by a non-surrogate
        assert_eq!(normalize(&[0xD83D, 0x41]), vec![0xED, 0xA0, 0xBD, 0x41]);
        // reversed pair is two separate units
        assert_eq!(normalize(&[0xDE00, 0xD83D]).len(), 6);
    }

    #[test]
    fn test_matches_std_for_valid_text() {
        let text = "héllo wörld \u{4e16}\u{754c} \u{1F680}\u{1F30D}";
        assert_eq!(normalize(&units(text)), normalize_str(text));
    }

    #[test]
    fn test_utf16_serializations() {
        assert_eq!(utf16le("A\u{e9}"), vec![0x41, 0x00, 0xE9, 0x00]);
        assert_eq!(utf16be("A\u{e9}"), vec![0x00, 0x41, 0x00, 0xE9]);
        assert_eq!(utf16le("\u{1F600}"), vec![0x3D, 0xD8, 0x00, 0xDE]);
    }
}
