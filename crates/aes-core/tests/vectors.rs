//! Published AES-128 known-answer vectors.

use aes_core::{cipher, encrypt_block, expand_key, key_expansion, Aes128, Aes128Key, Block};

fn key(hex_str: &str) -> Aes128Key {
    let bytes = hex::decode(hex_str).expect("valid hex");
    Aes128Key::try_from(bytes.as_slice()).expect("16-byte key")
}

fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16-byte block")
}

// (key, plaintext, ciphertext)
const VECTORS: &[(&str, &str, &str)] = &[
    // All-zero key and block.
    (
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66e94bd4ef8a2c3b884cfa59ca342b2e",
    ),
    // FIPS-197 Appendix C.1.
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    // FIPS-197 Appendix B.
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    // SP 800-38A F.1.1, first two blocks.
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "6bc1bee22e409f96e93d7e117393172a",
        "3ad77bb40d7a3660a89ecaf32466ef97",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "f5d3d58503b9699de785895a96fdbaaf",
    ),
    // AESAVS GFSbox and VarKey.
    (
        "00000000000000000000000000000000",
        "f34481ec3cc627bacd5dc3fb08f273e6",
        "0336763e966d92595a567cc9ce537f5e",
    ),
    (
        "80000000000000000000000000000000",
        "00000000000000000000000000000000",
        "0edd33d3c621e546455bd8ba1418bec8",
    ),
];

#[test]
fn typed_api_matches_vectors() {
    for (k, pt, ct) in VECTORS {
        let round_keys = expand_key(&key(k));
        assert_eq!(encrypt_block(&block(pt), &round_keys), block(ct), "key {k}");
    }
}

#[test]
fn slice_api_matches_vectors() {
    for (k, pt, ct) in VECTORS {
        let schedule = key_expansion(&hex::decode(k).expect("hex")).expect("valid key");
        let out = cipher(&hex::decode(pt).expect("hex"), &schedule).expect("valid input");
        assert_eq!(hex::encode(out), *ct);
    }
}

#[test]
fn cached_encryptor_matches_vectors() {
    let aes = Aes128::new(&key("2b7e151628aed2a6abf7158809cf4f3c"));
    for (_, pt, ct) in VECTORS.iter().skip(2).take(3) {
        assert_eq!(aes.encrypt_block(&block(pt)), block(ct));
    }
}

#[test]
fn appendix_a_round_keys() {
    let round_keys = expand_key(&key("2b7e151628aed2a6abf7158809cf4f3c"));
    assert_eq!(
        hex::encode(round_keys.get(1)),
        "a0fafe1788542cb123a339392a6c7605"
    );
    assert_eq!(
        hex::encode(round_keys.get(10)),
        "d014f9a8c9ee2589e13f0cc8b6630ca6"
    );
}
