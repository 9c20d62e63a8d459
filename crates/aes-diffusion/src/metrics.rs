//! Bit- and byte-level measurements over blocks.

use aes_core::Block;

/// Number of bits in a block.
pub const BLOCK_BITS: usize = 128;

/// Counts the bits that differ between two blocks.
pub fn hamming_distance(a: &Block, b: &Block) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Returns a copy of `block` with bit `bit` flipped.
///
/// Bits are numbered MSB-first: bit 0 is the top bit of byte 0, bit 127 the
/// low bit of byte 15. Indices wrap modulo 128.
pub fn flip_bit(block: &Block, bit: usize) -> Block {
    let bit = bit % BLOCK_BITS;
    let mut out = *block;
    out[bit / 8] ^= 0x80 >> (bit % 8);
    out
}

/// Shannon entropy of `bytes` in bits per byte; `0.0` for empty input.
pub fn shannon_entropy(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in bytes {
        counts[b as usize] += 1;
    }
    let total = bytes.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}
