//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial 0x11B.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x`, reducing modulo 0x11B.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
///
/// Shift-and-add over the bits of `b`, doubling `a` with [`xtime`] at each
/// step, so the result is always reduced.
pub const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, with `0` mapped to `0`.
///
/// Computed as `a^254`, since every non-zero element satisfies `a^255 = 1`.
pub const fn gf_inv(a: u8) -> u8 {
    // 254 = 0b1111_1110: square-and-multiply over the exponent bits.
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    if a == 0 {
        0
    } else {
        result
    }
}
