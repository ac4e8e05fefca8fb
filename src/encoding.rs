//! Digest encoders.
//!
//! This module renders raw digest bytes as:
//! - Hexadecimal, lowercase or uppercase
//! - Standard base-64 with a configurable pad
//! - Any radix given by a caller-supplied [`Alphabet`] (base-36, base-58, ...)
//!
//! Output options live in an [`Encoder`] value rather than in global state, so two
//! callers with different settings never affect each other.
//!
//! # Examples
//!
//! ```rust
//! use legacy_md5::encoding::{Encoder, HexCase};
//!
//! let encoder = Encoder::builder()
//!     .hex_case(HexCase::Upper)
//!     .base64_pad("=")
//!     .build();
//! assert_eq!(encoder.hex(&[0xab, 0x01]), "AB01");
//! assert_eq!(encoder.base64(&[0xab, 0x01]), "qwE=");
//! ```

pub mod base64;
pub mod hexadecimal;
pub mod radix;

pub use self::base64::to_base64;
pub use hexadecimal::{from_hex, to_hex, HexCase};
pub use radix::{to_radix, Alphabet, BASE36, BASE58, BASE62};

/// Output settings for hex and base-64 rendering.
///
/// Defaults to lowercase hex and no base-64 padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    hex_case: HexCase,
    base64_pad: Option<String>,
}

impl Encoder {
    /// An encoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a customized encoder.
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// The configured hex case.
    pub fn hex_case(&self) -> HexCase {
        self.hex_case
    }

    /// The configured base-64 pad, if any.
    pub fn base64_pad(&self) -> Option<&str> {
        self.base64_pad.as_deref()
    }

    /// Renders bytes as hex in the configured case.
    pub fn hex(&self, bytes: &[u8]) -> String {
        to_hex(bytes, self.hex_case)
    }

    /// Renders bytes as base-64 with the configured pad.
    pub fn base64(&self, bytes: &[u8]) -> String {
        to_base64(bytes, self.base64_pad())
    }

    /// Renders bytes in the radix of `alphabet`.
    ///
    /// The alphabet fully determines the output; hex case and base-64 pad do not apply.
    /// Same as [`to_radix`], provided so one `Encoder` can drive every format.
    pub fn radix(&self, bytes: &[u8], alphabet: &Alphabet) -> String {
        to_radix(bytes, alphabet)
    }
}

/// A builder for [`Encoder`].
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    hex_case: HexCase,
    base64_pad: Option<String>,
}

impl EncoderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hex digit case.
    pub fn hex_case(mut self, case: HexCase) -> Self {
        self.hex_case = case;
        self
    }

    /// Sets the base-64 pad. An empty string turns padding off.
    pub fn base64_pad(mut self, pad: impl Into<String>) -> Self {
        let pad = pad.into();
        self.base64_pad = if pad.is_empty() { None } else { Some(pad) };
        self
    }

    /// Turns base-64 padding off.
    pub fn no_base64_pad(mut self) -> Self {
        self.base64_pad = None;
        self
    }

    /// Builds the `Encoder`.
    pub fn build(self) -> Encoder {
        Encoder {
            hex_case: self.hex_case,
            base64_pad: self.base64_pad,
        }
    }
}
