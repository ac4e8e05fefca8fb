//! MD5 digest computation.
//!
//! This module provides:
//! - Word packing between bytes and little-endian 32-bit words
//! - The MD5 compression engine, one-shot and streaming
//! - HMAC-MD5
//! - Batch hashing of independent inputs (parallel with the `parallel` feature)
//!
//! # Examples
//!
//! ```rust
//! use legacy_md5::digest::{hmac, md5_digest};
//!
//! assert_eq!(hex::encode(md5_digest(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(hmac(b"", b"").len(), 16);
//! ```

pub mod batch;
pub mod hmac;
pub mod md5;
pub mod words;

pub use batch::digest_batch;
pub use hmac::hmac;
pub use md5::{digest, md5_digest, HashState, Md5, RawDigest, WordBlock, MD5_OUTPUT_SIZE};
pub use words::{pack, unpack};
