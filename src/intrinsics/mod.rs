//! Platform-specific intrinsics for AES operations.

use crate::error::{Error, Result};
use core::sync::atomic::{AtomicU8, Ordering};

/// A single AES encryption round over a 128-bit block.
///
/// This is the only architecture-specific piece of Rocca-S; the cipher itself is
/// written once against this trait.
pub(crate) trait AesRound {
    /// Computes `MixColumns(ShiftRows(SubBytes(block))) ^ round_key`.
    fn round(&self, block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16];
}

/// CPU capability detection cache.
static CPU_FEATURES: AtomicU8 = AtomicU8::new(0);

/// Feature detection states.
const FEATURES_UNKNOWN: u8 = 0;
const FEATURES_HARDWARE: u8 = 1;
const FEATURES_UNSUPPORTED: u8 = 2;

/// Initialize CPU feature detection (called once).
#[cold]
fn init_cpu_features() -> u8 {
    #[cfg(target_arch = "aarch64")]
    {
        #[cfg(feature = "std")]
        {
            if std::arch::is_aarch64_feature_detected!("neon")
                && std::arch::is_aarch64_feature_detected!("aes")
            {
                log::debug!("rocca-s: using ARMv8 Crypto Extensions backend");
                return FEATURES_HARDWARE;
            }
        }
        #[cfg(not(feature = "std"))]
        {
            // In no-std mode, compile-time detection only
            #[cfg(all(target_feature = "neon", target_feature = "aes"))]
            {
                log::debug!("rocca-s: using ARMv8 Crypto Extensions backend");
                return FEATURES_HARDWARE;
            }
        }
    }

    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(feature = "std")]
        {
            if std::arch::is_x86_feature_detected!("aes") {
                log::debug!("rocca-s: using AES-NI backend");
                return FEATURES_HARDWARE;
            }
        }
        #[cfg(not(feature = "std"))]
        {
            #[cfg(target_feature = "aes")]
            {
                log::debug!("rocca-s: using AES-NI backend");
                return FEATURES_HARDWARE;
            }
        }
    }

    log::warn!("rocca-s: no hardware AES support detected");
    FEATURES_UNSUPPORTED
}

/// Get CPU features with caching.
#[inline]
fn get_cpu_features() -> u8 {
    let features = CPU_FEATURES.load(Ordering::Relaxed);
    if features == FEATURES_UNKNOWN {
        let detected = init_cpu_features();
        CPU_FEATURES.store(detected, Ordering::Relaxed);
        detected
    } else {
        features
    }
}

/// Returns `true` if this CPU provides the AES instructions Rocca-S requires.
#[inline]
pub fn is_supported() -> bool {
    get_cpu_features() == FEATURES_HARDWARE
}

/// The AES round realization selected for the running CPU.
pub(crate) enum Backend {
    /// x86-64 AES-NI.
    #[cfg(target_arch = "x86_64")]
    AesNi(x86_64::AesNi),
    /// ARMv8 Crypto Extensions.
    #[cfg(target_arch = "aarch64")]
    Neon(aarch64::Neon),
}

/// Selects the hardware backend, or fails if the CPU has no AES instructions.
///
/// There is no software fallback.
#[inline]
pub(crate) fn detect() -> Result<Backend> {
    #[cfg(target_arch = "x86_64")]
    if let Some(aes) = x86_64::AesNi::new() {
        return Ok(Backend::AesNi(aes));
    }

    #[cfg(target_arch = "aarch64")]
    if let Some(aes) = aarch64::Neon::new() {
        return Ok(Backend::Neon(aes));
    }

    Err(Error::UnsupportedPlatform)
}

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(test)]
pub(crate) mod soft;
