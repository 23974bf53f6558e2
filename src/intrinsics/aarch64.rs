//! ARM NEON + Crypto Extensions optimized implementation.

#![allow(unsafe_code)]

#[cfg(target_arch = "aarch64")]
use core::arch::aarch64::*;

use super::AesRound;

/// ARMv8 Crypto Extensions backend.
///
/// Holding a value of this type proves that the CPU supports the `neon` and `aes`
/// target features; it can only be created through [`Neon::new`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Neon(());

impl Neon {
    /// Returns the backend if the running CPU supports NEON and AES.
    #[inline]
    pub(crate) fn new() -> Option<Self> {
        if super::is_supported() {
            Some(Neon(()))
        } else {
            None
        }
    }
}

/// One keyed AES round.
///
/// ARM has no fused equivalent of `aesenc`: `vaeseq_u8` performs AddRoundKey
/// before SubBytes + ShiftRows, so it is given a zero key, followed by
/// `vaesmcq_u8` (MixColumns) and an explicit XOR with the round key.
#[target_feature(enable = "neon,aes")]
unsafe fn round_impl(block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
    let input = vld1q_u8(block.as_ptr());
    let key = vld1q_u8(round_key.as_ptr());

    let after_sub_shift = vaeseq_u8(input, vdupq_n_u8(0));
    let mixed = vaesmcq_u8(after_sub_shift);
    let result = veorq_u8(mixed, key);

    let mut output = [0u8; 16];
    vst1q_u8(output.as_mut_ptr(), result);
    output
}

impl AesRound for Neon {
    #[inline]
    fn round(&self, block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
        // SAFETY: a `Neon` value only exists once `neon` and `aes` support was detected.
        unsafe { round_impl(block, round_key) }
    }
}
