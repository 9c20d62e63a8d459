//! AES round transformations over the column-major state.

use crate::block::{xor_in_place, Block};
use crate::gf::gf_mul;
use crate::sbox::sbox;

/// Circulant MixColumns matrix `{02 03 01 01}` and its rotations.
const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let input = *col;
    for (out, coeffs) in col.iter_mut().zip(MIX_MATRIX.iter()) {
        *out = coeffs
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&c, &a)| acc ^ gf_mul(c, a));
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> Block {
        let bytes = hex::decode(s).expect("valid hex");
        bytes.try_into().expect("16 bytes")
    }

    #[test]
    fn shift_rows_moves_rows_by_index() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn shift_rows_round_one_vector() {
        // FIPS-197 Appendix B, round 1: after SubBytes -> after ShiftRows.
        let mut state = from_hex("d42711aee0bf98f1b8b45de51e415230");
        shift_rows(&mut state);
        assert_eq!(state, from_hex("d4bf5d30e0b452aeb84111f11e2798e5"));
    }

    #[test]
    fn mix_columns_round_one_vector() {
        let mut state = from_hex("d4bf5d30e0b452aeb84111f11e2798e5");
        mix_columns(&mut state);
        assert_eq!(state, from_hex("046681e5e0cb199a48f8d37a2806264c"));
    }

    #[test]
    fn mix_single_column_known_columns() {
        let mut col = [0xdb, 0x13, 0x53, 0x45];
        mix_single_column(&mut col);
        assert_eq!(col, [0x8e, 0x4d, 0xa1, 0xbc]);

        let mut col = [0xc6; 4];
        mix_single_column(&mut col);
        assert_eq!(col, [0xc6; 4]);
    }

    #[test]
    fn sub_bytes_round_one_vector() {
        let mut state = from_hex("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state);
        assert_eq!(state, from_hex("d42711aee0bf98f1b8b45de51e415230"));
    }

    #[test]
    fn add_round_key_is_xor() {
        let mut state = [0xffu8; 16];
        add_round_key(&mut state, &[0x0fu8; 16]);
        assert_eq!(state, [0xf0u8; 16]);
    }
}
