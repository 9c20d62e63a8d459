//! AES-128 key schedule and block encryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT, SCHEDULE_SIZE};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::{sbox, RCON};

/// Total rounds (Nr); rounds 1..Nr-1 are full, round Nr omits MixColumns.
const ROUNDS: usize = 10;

/// Words in the expanded schedule (`Nb * (Nr + 1)`).
const SCHEDULE_WORDS: usize = 4 * ROUND_KEY_COUNT;

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in (KEY_SIZE / 4)..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4 - 1];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words.iter()) {
            dst.copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round has no MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Expands a key given as raw bytes into the flat 176-byte schedule.
///
/// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
/// unless `key` is exactly 16 bytes.
pub fn key_expansion(key: &[u8]) -> Result<[u8; SCHEDULE_SIZE]> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand_key(&key).to_bytes())
}

/// Encrypts one block given as raw bytes under a flat 176-byte schedule.
///
/// Fails with [`Error::InvalidInputLength`](crate::Error::InvalidInputLength)
/// if `plaintext` is not 16 bytes or `round_keys` is not 176 bytes.
pub fn cipher(plaintext: &[u8], round_keys: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext)?;
    let round_keys = RoundKeys::from_slice(round_keys)?;
    Ok(encrypt_block(&block, &round_keys))
}

/// AES-128 encryptor holding a precomputed key schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` once for reuse across many blocks.
    pub fn new(key: &Aes128Key) -> Self {
        Self::from_round_keys(expand_key(key))
    }

    /// Wraps a schedule expanded earlier.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a single block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InputKind};
    use crate::key::Aes128Key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn encrypt_all_zero_vector() {
        let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
        let ct = encrypt_block(&[0u8; 16], &round_keys);
        assert_eq!(hex::encode(ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
    }

    #[test]
    fn first_round_key_is_the_key() {
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));
        assert_eq!(round_keys.get(0), &NIST_KEY);
        assert_eq!(
            hex::encode(round_keys.get(10)),
            "13111d7fe3944a17f307a78b4d2b30c5"
        );
    }

    #[test]
    fn rot_and_sub_word() {
        // FIPS-197 Appendix A.1, i = 4.
        let rotated = rot_word([0x09, 0xcf, 0x4f, 0x3c]);
        assert_eq!(rotated, [0xcf, 0x4f, 0x3c, 0x09]);
        assert_eq!(sub_word(rotated), [0x8a, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn final_round_skips_mix_columns() {
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));

        let mut with_mix = NIST_PLAIN;
        add_round_key(&mut with_mix, round_keys.get(0));
        for round in 1..=ROUNDS {
            sub_bytes(&mut with_mix);
            shift_rows(&mut with_mix);
            mix_columns(&mut with_mix);
            add_round_key(&mut with_mix, round_keys.get(round));
        }

        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
        assert_ne!(with_mix, NIST_CIPHER);
    }

    #[test]
    fn slice_api_matches_typed_api() {
        let schedule = key_expansion(&NIST_KEY).expect("valid key");
        assert_eq!(schedule, expand_key(&Aes128Key::from(NIST_KEY)).to_bytes());
        assert_eq!(cipher(&NIST_PLAIN, &schedule), Ok(NIST_CIPHER));
    }

    #[test]
    fn slice_api_rejects_bad_lengths() {
        assert_eq!(
            key_expansion(&[0u8; 24]),
            Err(Error::InvalidKeyLength { actual: 24 })
        );
        let schedule = key_expansion(&NIST_KEY).expect("valid key");
        assert_eq!(
            cipher(&NIST_PLAIN[..15], &schedule),
            Err(Error::InvalidInputLength {
                input: InputKind::Plaintext,
                expected: 16,
                actual: 15,
            })
        );
        assert_eq!(
            cipher(&NIST_PLAIN, &schedule[..160]),
            Err(Error::InvalidInputLength {
                input: InputKind::Schedule,
                expected: 176,
                actual: 160,
            })
        );
    }

    #[test]
    fn cached_schedule_matches_one_shot() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let aes = Aes128::new(&key);
            assert_eq!(aes.encrypt_block(&block), encrypt_block(&block, &expand_key(&key)));
            assert_eq!(aes.encrypt_block(&block), aes.encrypt_block(&block));
        }
    }
}
