//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by digest encoding.
///
/// Hashing itself is total; only encoder configuration and hex decoding can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A radix alphabet needs at least two symbols.
    #[error("alphabet must contain at least 2 symbols, got {len}")]
    InvalidAlphabet { len: usize },

    /// Input could not be decoded as hexadecimal.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}

impl Error {
    pub(crate) fn invalid_alphabet(len: usize) -> Self {
        Error::InvalidAlphabet { len }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidHex(err.to_string())
    }
}

/// Result type for fallible encoding operations
pub type Result<T> = std::result::Result<T, Error>;
