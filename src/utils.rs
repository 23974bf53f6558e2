//! Utility functions for byte manipulation and parameter validation.

use crate::error::{Error, Result};
use crate::{Key, Nonce, TAG_SIZE};
use zeroize::Zeroizing;

/// XOR two 16-byte blocks.
#[inline]
pub fn xor_block(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut result = [0u8; 16];
    for i in 0..16 {
        result[i] = a[i] ^ b[i];
    }
    result
}

/// Encode a byte length as a 128-bit little-endian bit count.
#[inline]
pub fn le128_bits(len: usize) -> [u8; 16] {
    ((len as u128) * 8).to_le_bytes()
}

/// Split a 32-byte slice into its two 16-byte halves.
///
/// Halves are wiped when dropped, since they usually hold key or message bytes.
#[inline]
pub fn split_halves(data: &[u8]) -> (Zeroizing<[u8; 16]>, Zeroizing<[u8; 16]>) {
    debug_assert_eq!(data.len(), 32);

    let mut lo = Zeroizing::new([0u8; 16]);
    let mut hi = Zeroizing::new([0u8; 16]);
    lo.copy_from_slice(&data[..16]);
    hi.copy_from_slice(&data[16..32]);
    (lo, hi)
}

/// Borrow the nonce and key as fixed-size arrays, rejecting wrong sizes.
fn validate_nonce_and_key<'a>(nonce: &'a [u8], key: &'a [u8]) -> Result<(&'a Nonce, &'a Key)> {
    let nonce = nonce
        .try_into()
        .map_err(|_| Error::InvalidNonceLength { len: nonce.len() })?;
    let key = key
        .try_into()
        .map_err(|_| Error::InvalidKeyLength { len: key.len() })?;
    Ok((nonce, key))
}

/// Validate input parameters for encryption.
pub fn validate_encrypt_params<'a>(
    ciphertext_len: usize,
    plaintext_len: usize,
    nonce: &'a [u8],
    key: &'a [u8],
) -> Result<(&'a Nonce, &'a Key)> {
    let expected = plaintext_len
        .checked_add(TAG_SIZE)
        .ok_or(Error::InvalidOutputLength {
            expected: usize::MAX,
            actual: ciphertext_len,
        })?;

    if ciphertext_len != expected {
        return Err(Error::InvalidOutputLength {
            expected,
            actual: ciphertext_len,
        });
    }

    validate_nonce_and_key(nonce, key)
}

/// Validate input parameters for decryption.
pub fn validate_decrypt_params<'a>(
    plaintext_len: usize,
    ciphertext_len: usize,
    nonce: &'a [u8],
    key: &'a [u8],
) -> Result<(&'a Nonce, &'a Key)> {
    if ciphertext_len < TAG_SIZE {
        return Err(Error::CiphertextTooShort {
            len: ciphertext_len,
        });
    }

    let expected = ciphertext_len - TAG_SIZE;
    if plaintext_len != expected {
        return Err(Error::InvalidOutputLength {
            expected,
            actual: plaintext_len,
        });
    }

    validate_nonce_and_key(nonce, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le128_bits() {
        assert_eq!(le128_bits(0), [0; 16]);

        let mut expected = [0u8; 16];
        expected[0] = 0x90;
        expected[1] = 0x01;
        assert_eq!(le128_bits(50), expected);
    }

    #[test]
    fn test_le128_bits_no_overflow() {
        let encoded = le128_bits(usize::MAX);
        assert_eq!(u128::from_le_bytes(encoded), (usize::MAX as u128) * 8);
    }

    #[test]
    fn test_xor_block() {
        let a = [0xf0; 16];
        let b = [0x0f; 16];
        let result = xor_block(&a, &b);
        assert_eq!(result, [0xff; 16]);
    }

    #[test]
    fn test_split_halves() {
        let data: [u8; 32] = core::array::from_fn(|i| i as u8);
        let (lo, hi) = split_halves(&data);
        assert_eq!(lo[0], 0);
        assert_eq!(lo[15], 15);
        assert_eq!(hi[0], 16);
        assert_eq!(hi[15], 31);
    }

    #[test]
    fn test_validate_returns_arrays() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce: [u8; 16] = core::array::from_fn(|i| 0x80 | i as u8);

        let (n, k) = validate_encrypt_params(TAG_SIZE, 0, &nonce, &key).unwrap();
        assert_eq!(n, &nonce);
        assert_eq!(k, &key);

        let (n, k) = validate_decrypt_params(0, TAG_SIZE, &nonce, &key).unwrap();
        assert_eq!(n, &nonce);
        assert_eq!(k, &key);
    }

    #[test]
    fn test_validate_encrypt_params() {
        let key = [0u8; 32];
        let nonce = [0u8; 16];

        assert!(validate_encrypt_params(132, 100, &nonce, &key).is_ok());

        // Wrong output length
        assert_eq!(
            validate_encrypt_params(131, 100, &nonce, &key),
            Err(Error::InvalidOutputLength {
                expected: 132,
                actual: 131
            })
        );

        // Wrong nonce length
        assert_eq!(
            validate_encrypt_params(132, 100, &[0u8; 15], &key),
            Err(Error::InvalidNonceLength { len: 15 })
        );

        // Wrong key length
        assert_eq!(
            validate_encrypt_params(132, 100, &nonce, &[0u8; 33]),
            Err(Error::InvalidKeyLength { len: 33 })
        );
    }

    #[test]
    fn test_validate_decrypt_params() {
        let key = [0u8; 32];
        let nonce = [0u8; 16];

        assert!(validate_decrypt_params(0, 32, &nonce, &key).is_ok());
        assert!(validate_decrypt_params(100, 132, &nonce, &key).is_ok());

        assert_eq!(
            validate_decrypt_params(0, 31, &nonce, &key),
            Err(Error::CiphertextTooShort { len: 31 })
        );
        assert_eq!(
            validate_decrypt_params(1, 32, &nonce, &key),
            Err(Error::InvalidOutputLength {
                expected: 0,
                actual: 1
            })
        );
        assert_eq!(
            validate_decrypt_params(0, 32, &[0u8; 17], &key),
            Err(Error::InvalidNonceLength { len: 17 })
        );
        assert_eq!(
            validate_decrypt_params(0, 32, &nonce, &[0u8; 31]),
            Err(Error::InvalidKeyLength { len: 31 })
        );
    }
}
