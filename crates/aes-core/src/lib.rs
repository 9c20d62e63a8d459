//! AES-128 key schedule and single-block forward encryption.
//!
//! This crate follows FIPS-197 and provides:
//! - Compile-time S-box and round-constant tables.
//! - GF(2^8) arithmetic used by MixColumns.
//! - Key schedule for AES-128.
//! - Single-block encryption, with typed and byte-slice entry points.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, Block, BLOCK_SIZE};
pub use crate::cipher::{cipher, encrypt_block, expand_key, key_expansion, Aes128};
pub use crate::error::{Error, InputKind, Result};
pub use crate::gf::{gf_inv, gf_mul, xtime};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT, SCHEDULE_SIZE};
pub use crate::sbox::{sbox, RCON, SBOX};
