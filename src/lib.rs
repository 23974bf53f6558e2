//! # Rocca-S - AES-based Authenticated Encryption
//!
//! This crate provides an implementation of the Rocca-S authenticated encryption
//! algorithm as specified in the IETF Internet-Draft `draft-nakano-rocca-s`.
//!
//! Rocca-S is designed for very high throughput on CPUs with AES instructions. Its
//! state is seven 128-bit blocks updated with single AES rounds, and it produces a
//! 256-bit authentication tag.
//!
//! ## Features
//!
//! - **High Performance**: Uses x86-64 AES-NI or ARMv8 Crypto Extensions
//! - **Security**: 256-bit keys and tags, 128-bit nonces, constant-time tag verification
//! - **Memory Hygiene**: Cipher state and scratch buffers are zeroized on every exit path
//! - **No-std Compatible**: Can be used in embedded environments
//!
//! Hardware AES support is required. There is no software fallback: on a CPU
//! without AES instructions every operation fails with [`Error::UnsupportedPlatform`].
//!
//! ## Usage
//!
//! ```rust
//! use rocca_s::{decrypt, encrypt, TAG_SIZE};
//!
//! let key = [0u8; 32];      // 256-bit key
//! let nonce = [0u8; 16];    // 128-bit nonce
//! let plaintext = b"Hello, world!";
//! let aad = b"additional data";
//!
//! // Encrypt: the tag is appended to the ciphertext
//! let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
//! encrypt(&mut ciphertext, plaintext, &nonce, &key, aad)?;
//!
//! // Decrypt
//! let mut decrypted = vec![0u8; ciphertext.len() - TAG_SIZE];
//! decrypt(&mut decrypted, &ciphertext, &nonce, &key, aad)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), rocca_s::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

extern crate alloc;

mod core;
mod error;
mod intrinsics;
mod utils;


pub use error::{Error, Result};
pub use intrinsics::is_supported;

use ::core::mem;
use alloc::vec;
use alloc::vec::Vec;
use intrinsics::Backend;
use zeroize::Zeroizing;

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;
/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 16;
/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 32;

/// Rocca-S key.
pub type Key = [u8; KEY_SIZE];
/// Rocca-S nonce.
pub type Nonce = [u8; NONCE_SIZE];
/// Rocca-S authentication tag.
pub type Tag = [u8; TAG_SIZE];

/// Runs `$body` with `$aes` bound to the AES round backend of this CPU.
macro_rules! with_backend {
    ($aes:ident => $body:expr) => {
        match intrinsics::detect()? {
            #[cfg(target_arch = "x86_64")]
            Backend::AesNi($aes) => $body,
            #[cfg(target_arch = "aarch64")]
            Backend::Neon($aes) => $body,
        }
    };
}

/// Encrypts plaintext with associated data using Rocca-S.
///
/// # Arguments
///
/// * `ciphertext` - Output buffer, exactly `plaintext.len() + TAG_SIZE` bytes
/// * `plaintext` - The data to encrypt
/// * `nonce` - 128-bit nonce (must be unique for each encryption with the same key)
/// * `key` - 256-bit encryption key
/// * `associated_data` - Additional authenticated data (not encrypted, but authenticated)
///
/// The ciphertext is written to the first `plaintext.len()` bytes of `ciphertext`
/// and the authentication tag to the last `TAG_SIZE` bytes.
///
/// # Errors
///
/// Buffer length errors are reported before anything is written. Fails with
/// [`Error::UnsupportedPlatform`] if the CPU has no AES instructions.
///
/// # Security
///
/// - The nonce MUST NOT be reused with the same key
/// - The key MUST be randomly chosen from a uniform distribution
///
/// # Example
///
/// ```rust
/// use rocca_s::{encrypt, TAG_SIZE};
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 16];
/// let plaintext = b"secret message";
/// let aad = b"public header";
///
/// let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
/// encrypt(&mut ciphertext, plaintext, &nonce, &key, aad)?;
/// # Ok::<(), rocca_s::Error>(())
/// ```
pub fn encrypt(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<()> {
    let (nonce, key) =
        utils::validate_encrypt_params(ciphertext.len(), plaintext.len(), nonce, key)?;

    with_backend!(aes => core::encrypt(&aes, ciphertext, plaintext, nonce, key, associated_data));
    Ok(())
}

/// Decrypts ciphertext and verifies the authentication tag.
///
/// # Arguments
///
/// * `plaintext` - Output buffer, exactly `ciphertext.len() - TAG_SIZE` bytes
/// * `ciphertext` - The encrypted data followed by the 256-bit tag
/// * `nonce` - 128-bit nonce (must match encryption)
/// * `key` - 256-bit encryption key (must match encryption)
/// * `associated_data` - Additional authenticated data (must match encryption)
///
/// # Errors
///
/// Buffer length errors are reported before anything is written. On
/// [`Error::AuthenticationFailed`] the whole `plaintext` buffer is zeroed.
///
/// # Security
///
/// - If tag verification fails, no plaintext data is left in the output buffer
/// - Tag comparison is performed in constant time
///
/// # Example
///
/// ```rust
/// use rocca_s::{decrypt, encrypt, TAG_SIZE};
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 16];
/// let plaintext = b"secret message";
/// let aad = b"public header";
///
/// let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
/// encrypt(&mut ciphertext, plaintext, &nonce, &key, aad)?;
///
/// let mut decrypted = vec![0u8; plaintext.len()];
/// decrypt(&mut decrypted, &ciphertext, &nonce, &key, aad)?;
///
/// assert_eq!(decrypted, plaintext);
/// # Ok::<(), rocca_s::Error>(())
/// ```
pub fn decrypt(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<()> {
    let (nonce, key) =
        utils::validate_decrypt_params(plaintext.len(), ciphertext.len(), nonce, key)?;

    with_backend!(aes => core::decrypt(&aes, plaintext, ciphertext, nonce, key, associated_data))
}

/// Encrypts plaintext and returns `ciphertext || tag` in a new vector.
///
/// # Example
///
/// ```rust
/// use rocca_s::{encrypt_to_vec, TAG_SIZE};
///
/// let ciphertext = encrypt_to_vec(b"secret message", &[0u8; 16], &[0u8; 32], b"")?;
/// assert_eq!(ciphertext.len(), 14 + TAG_SIZE);
/// # Ok::<(), rocca_s::Error>(())
/// ```
pub fn encrypt_to_vec(
    plaintext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    // Slices never exceed `isize::MAX` bytes, so this cannot overflow.
    let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
    encrypt(&mut ciphertext, plaintext, nonce, key, associated_data)?;
    Ok(ciphertext)
}

/// Decrypts `ciphertext || tag` and returns the plaintext in a new vector.
///
/// No vector is returned unless the tag verifies; the working buffer is zeroized
/// on every failure.
///
/// # Example
///
/// ```rust
/// use rocca_s::{decrypt_to_vec, encrypt_to_vec};
///
/// let key = [0x01u8; 32];
/// let nonce = [0x02u8; 16];
///
/// let ciphertext = encrypt_to_vec(b"secret message", &nonce, &key, b"header")?;
/// let plaintext = decrypt_to_vec(&ciphertext, &nonce, &key, b"header")?;
/// assert_eq!(plaintext, b"secret message");
/// # Ok::<(), rocca_s::Error>(())
/// ```
pub fn decrypt_to_vec(
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let len = ciphertext
        .len()
        .checked_sub(TAG_SIZE)
        .ok_or(Error::CiphertextTooShort {
            len: ciphertext.len(),
        })?;

    let mut plaintext = Zeroizing::new(vec![0u8; len]);
    decrypt(&mut plaintext, ciphertext, nonce, key, associated_data)?;
    Ok(mem::take(&mut *plaintext))
}
