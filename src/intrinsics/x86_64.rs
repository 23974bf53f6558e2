//! x86-64 AES-NI optimized implementation.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::AesRound;

/// AES-NI backend.
///
/// Holding a value of this type proves that the CPU supports the `aes` target
/// feature; it can only be created through [`AesNi::new`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct AesNi(());

impl AesNi {
    /// Returns the backend if the running CPU supports AES-NI.
    #[inline]
    pub(crate) fn new() -> Option<Self> {
        if super::is_supported() {
            Some(AesNi(()))
        } else {
            None
        }
    }
}

/// One keyed AES round with the fused `aesenc` instruction.
///
/// `_mm_aesenc_si128(y, z)` computes MixColumns(ShiftRows(SubBytes(y))) ^ z in a
/// single instruction.
#[target_feature(enable = "aes")]
unsafe fn round_impl(block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
    let block_vec = _mm_loadu_si128(block.as_ptr() as *const __m128i);
    let key_vec = _mm_loadu_si128(round_key.as_ptr() as *const __m128i);

    let result = _mm_aesenc_si128(block_vec, key_vec);

    let mut output = [0u8; 16];
    _mm_storeu_si128(output.as_mut_ptr() as *mut __m128i, result);
    output
}

impl AesRound for AesNi {
    #[inline]
    fn round(&self, block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
        // SAFETY: an `AesNi` value only exists once `aes` support was detected.
        unsafe { round_impl(block, round_key) }
    }
}
