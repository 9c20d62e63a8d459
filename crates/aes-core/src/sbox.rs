//! Compile-time S-box and round-constant tables.

use crate::gf::{gf_inv, xtime};

/// Additive constant of the S-box affine map.
const AFFINE_CONSTANT: u8 = 0x63;

/// Forward AES S-box, generated at compile time.
pub const SBOX: [u8; 256] = build_sbox();

/// Key schedule round constants `Rcon[1..=10]`; `RCON[i - 1]` belongs to round `i`.
pub const RCON: [u8; 10] = build_rcon();

/// Affine map over GF(2): `b ^ rotl(b,1) ^ rotl(b,2) ^ rotl(b,3) ^ rotl(b,4) ^ 0x63`.
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf_inv(i as u8));
        i += 1;
    }
    table
}

const fn build_rcon() -> [u8; 10] {
    let mut table = [0u8; 10];
    let mut value = 0x01u8;
    let mut i = 0;
    while i < 10 {
        table[i] = value;
        value = xtime(value);
        i += 1;
    }
    table
}

/// Substitutes a single byte.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}
