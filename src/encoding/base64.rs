use ::base64::engine::general_purpose::STANDARD_NO_PAD;
use ::base64::Engine;

/// Renders bytes as standard base-64.
///
/// Each missing position of the final 4-character group is filled with `pad`, or
/// dropped entirely when `pad` is `None`. Bits missing from the final group are zero.
///
/// # Examples
///
/// ```
/// use legacy_md5::encoding::to_base64;
///
/// assert_eq!(to_base64(b"ab", None), "YWI");
/// assert_eq!(to_base64(b"ab", Some("=")), "YWI=");
/// ```
pub fn to_base64(input: &[u8], pad: Option<&str>) -> String {
    let mut output = STANDARD_NO_PAD.encode(input);
    if let Some(pad) = pad {
        let missing = (4 - output.len() % 4) % 4;
        output.push_str(&pad.repeat(missing));
    }
    output
}
