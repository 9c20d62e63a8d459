//! Error type for the byte-slice entry points.

use core::fmt;

use thiserror::Error;

/// Which input of the block cipher had the wrong length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// The 16-byte plaintext block.
    Plaintext,
    /// The 176-byte round-key schedule.
    Schedule,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Plaintext => f.write_str("plaintext"),
            InputKind::Schedule => f.write_str("round-key schedule"),
        }
    }
}

/// Errors raised when caller-supplied buffers have the wrong size.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key passed to the key schedule is not 16 bytes.
    #[error("invalid key length: expected 16 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length that was supplied.
        actual: usize,
    },
    /// A block cipher input is not the size it must be.
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidInputLength {
        /// The offending input.
        input: InputKind,
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = Error::InvalidInputLength {
            input: InputKind::Schedule,
            expected: 176,
            actual: 160,
        };
        assert_eq!(
            err.to_string(),
            "invalid round-key schedule length: expected 176 bytes, got 160"
        );
        assert_eq!(
            Error::InvalidKeyLength { actual: 15 }.to_string(),
            "invalid key length: expected 16 bytes, got 15"
        );
    }
}
