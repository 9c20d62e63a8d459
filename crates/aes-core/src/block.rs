//! Block representation helpers.

use crate::error::{Error, InputKind, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major: byte `i` is row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a plaintext slice into a block, rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes.try_into().map_err(|_| Error::InvalidInputLength {
        input: InputKind::Plaintext,
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_with_self_clears() {
        let mut block: Block = core::array::from_fn(|i| i as u8 * 17);
        let copy = block;
        xor_in_place(&mut block, &copy);
        assert_eq!(block, [0u8; 16]);
    }

    #[test]
    fn block_from_slice_checks_length() {
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidInputLength {
                input: InputKind::Plaintext,
                expected: 16,
                actual: 17,
            })
        );
    }
}
