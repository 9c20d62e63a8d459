//! Expands a key once and encrypts two blocks with the cached schedule.

use aes_core::{cipher, key_expansion, Aes128, Aes128Key};

fn main() -> Result<(), aes_core::Error> {
    let key = Aes128Key::from(*b"YELLOW SUBMARINE");
    let aes = Aes128::new(&key);

    let first = aes.encrypt_block(b"first block here");
    let second = aes.encrypt_block(b"second blockhere");

    // The byte-slice entry points produce the same output.
    let schedule = key_expansion(&key.0)?;
    assert_eq!(cipher(b"first block here", &schedule)?, first);

    println!("first:  {}", hex::encode(first));
    println!("second: {}", hex::encode(second));
    Ok(())
}
