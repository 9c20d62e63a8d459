//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, InputKind, Result};

/// Length of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// Length of the flattened round-key schedule in bytes.
pub const SCHEDULE_SIZE: usize = ROUND_KEY_COUNT * BLOCK_SIZE;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than 10.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into 176 bytes, round key 0 first.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_SIZE] {
        let mut out = [0u8; SCHEDULE_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }

    /// Rebuilds a schedule from its 176-byte flat form.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCHEDULE_SIZE {
            return Err(Error::InvalidInputLength {
                input: InputKind::Schedule,
                expected: SCHEDULE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut round_keys = [[0u8; BLOCK_SIZE]; ROUND_KEY_COUNT];
        for (round_key, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
            round_key.copy_from_slice(chunk);
        }
        Ok(Self(round_keys))
    }
}
