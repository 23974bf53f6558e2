//! Basic usage example for Rocca-S authenticated encryption.

use rocca_s::{decrypt, decrypt_to_vec, encrypt, encrypt_to_vec, is_supported, Error, TAG_SIZE};

fn main() -> Result<(), Error> {
    println!("Rocca-S Basic Usage Example");
    println!("===========================");

    if !is_supported() {
        println!("This CPU has no AES instructions; Rocca-S is unavailable.");
        return Ok(());
    }

    // Example 1: Basic encryption and decryption
    basic_example()?;

    // Example 2: Handling different input sizes
    size_examples()?;

    // Example 3: Error handling
    error_handling_example()?;

    Ok(())
}

fn basic_example() -> Result<(), Error> {
    println!("\n1. Basic Encryption/Decryption:");

    let key = [0x01; 32]; // 256-bit key
    let nonce = [0x02; 16]; // 128-bit nonce
    let plaintext = b"Hello, Rocca-S! This is a secret message.";
    let aad = b"public header";

    // Encrypt into a caller-provided buffer
    let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
    encrypt(&mut ciphertext, plaintext, &nonce, &key, aad)?;
    let (body, tag) = ciphertext.split_at(plaintext.len());
    println!("  Plaintext: {:?}", String::from_utf8_lossy(plaintext));
    println!("  Ciphertext: {} bytes + {} byte tag", body.len(), tag.len());
    println!("  Tag: {:02x?}", &tag[..8]); // Show first 8 bytes

    // Decrypt
    let mut decrypted = vec![0u8; plaintext.len()];
    decrypt(&mut decrypted, &ciphertext, &nonce, &key, aad)?;
    println!("  Decrypted: {:?}", String::from_utf8_lossy(&decrypted));

    assert_eq!(decrypted, plaintext);
    println!("  ✓ Encryption/decryption successful!");

    Ok(())
}

fn size_examples() -> Result<(), Error> {
    println!("\n2. Different Input Sizes:");

    let key = [0x03; 32];
    let nonce = [0x04; 16];

    // Empty message: the output is just the tag
    let ct = encrypt_to_vec(b"", &nonce, &key, b"just aad")?;
    let pt = decrypt_to_vec(&ct, &nonce, &key, b"just aad")?;
    println!("  Empty message: {} bytes -> {} bytes", ct.len(), pt.len());
    assert!(pt.is_empty());

    // Single byte
    let ct = encrypt_to_vec(b"A", &nonce, &key, b"")?;
    let pt = decrypt_to_vec(&ct, &nonce, &key, b"")?;
    println!("  Single byte: {} bytes -> {} bytes", ct.len(), pt.len());
    assert_eq!(pt, b"A");

    // Large message (multiple blocks plus a partial one)
    let large_msg = vec![0x42u8; 1000];
    let ct = encrypt_to_vec(&large_msg, &nonce, &key, b"large message")?;
    let pt = decrypt_to_vec(&ct, &nonce, &key, b"large message")?;
    println!(
        "  Large message: {} bytes -> {} bytes",
        large_msg.len(),
        ct.len()
    );
    assert_eq!(pt, large_msg);

    println!("  ✓ All size tests passed!");
    Ok(())
}

fn error_handling_example() -> Result<(), Error> {
    println!("\n3. Error Handling:");

    let key = [0x05; 32];
    let nonce = [0x06; 16];
    let plaintext = b"secret data";
    let aad = b"header";

    let mut ciphertext = encrypt_to_vec(plaintext, &nonce, &key, aad)?;
    let mut decrypted = vec![0u8; plaintext.len()];

    // Test authentication failure with corrupted tag
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 1; // Flip one bit
    match decrypt(&mut decrypted, &ciphertext, &nonce, &key, aad) {
        Ok(()) => println!("  ✗ Should have failed!"),
        Err(Error::AuthenticationFailed) => {
            assert!(decrypted.iter().all(|&b| b == 0));
            println!("  ✓ Authentication failure detected, output wiped");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    // Test with wrong AAD
    ciphertext[last] ^= 1; // Fix the tag
    match decrypt_to_vec(&ciphertext, &nonce, &key, b"wrong header") {
        Ok(_) => println!("  ✗ Should have failed!"),
        Err(Error::AuthenticationFailed) => {
            println!("  ✓ Wrong AAD detected correctly");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    // Test with a short key
    match decrypt_to_vec(&ciphertext, &nonce, &key[..16], aad) {
        Ok(_) => println!("  ✗ Should have failed!"),
        Err(e) if e.is_invalid_argument() => {
            println!("  ✓ Rejected bad argument: {e}");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    println!("  ✓ All error handling tests passed!");
    Ok(())
}
