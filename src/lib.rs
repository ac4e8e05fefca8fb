//! MD5 and HMAC-MD5 digests rendered as hexadecimal, base-64 or an arbitrary radix.
//!
//! DISCLAIMER: MD5 is broken as a cryptographic hash. This crate exists to reproduce
//! digest values that existing systems already depend on (for example a service login
//! token derived from an uppercased MD5 hex string). Do not use it for anything that
//! needs collision resistance.
//!
//! # Examples
//!
//! ```
//! use legacy_md5::{md5_hex, md5_hex_with, hmac_md5_hex, Encoder, HexCase};
//!
//! assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let upper = Encoder::builder().hex_case(HexCase::Upper).build();
//! assert_eq!(md5_hex_with("abc", &upper), "900150983CD24FB0D6963F7D28E17F72");
//!
//! assert_eq!(
//!     hmac_md5_hex("key", "The quick brown fox jumps over the lazy dog"),
//!     "80070713463e7749b90c2dc24911e275"
//! );
//! ```

pub mod digest;
pub mod encoding;
pub mod error;
mod legacy;
pub mod text;

pub use digest::{digest_batch, hmac, md5_digest, Md5, RawDigest, WordBlock, MD5_OUTPUT_SIZE};
pub use encoding::{from_hex, Alphabet, Encoder, EncoderBuilder, HexCase};
pub use error::{Error, Result};
pub use legacy::{
    hmac_md5_any, hmac_md5_any_utf16, hmac_md5_base64, hmac_md5_base64_utf16,
    hmac_md5_base64_with, hmac_md5_hex, hmac_md5_hex_utf16, hmac_md5_hex_with, hmac_md5_raw,
    hmac_md5_raw_utf16, md5_any, md5_any_utf16, md5_base64, md5_base64_utf16, md5_base64_with,
    md5_hex, md5_hex_utf16, md5_hex_with, md5_raw, md5_raw_utf16, self_test, SELF_TEST_DIGEST,
    SELF_TEST_INPUT,
};
