//! Core Rocca-S algorithm implementation.

use crate::error::{Error, Result};
use crate::intrinsics::AesRound;
use crate::utils::{le128_bits, split_halves, xor_block};
use crate::Tag;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Rocca-S key schedule constant Z0.
const Z0: [u8; 16] = [
    0xcd, 0x65, 0xef, 0x23, 0x91, 0x44, 0x37, 0x71, 0x22, 0xae, 0x28, 0xd7, 0x98, 0x2f, 0x8a, 0x42,
];
/// Rocca-S key schedule constant Z1.
const Z1: [u8; 16] = [
    0xbc, 0xdb, 0x89, 0x81, 0xa5, 0xdb, 0xb5, 0xe9, 0x2f, 0x3b, 0x4d, 0xec, 0xcf, 0xfb, 0xc0, 0xb5,
];

/// Number of blank rounds in initialization and finalization.
const ROUNDS: usize = 16;

/// Rocca-S processes data in 256-bit blocks.
pub(crate) const BLOCK_SIZE: usize = 32;

/// Rocca-S state containing seven 128-bit blocks.
///
/// The AES round primitive is passed to every method rather than stored, so the
/// state is plain data that is wiped when it goes out of scope.
#[derive(Zeroize, ZeroizeOnDrop)]
struct RoccaState {
    blocks: [[u8; 16]; 7],
}

impl RoccaState {
    /// Initialize state from key and nonce.
    fn new<A: AesRound>(aes: &A, key: &[u8; 32], nonce: &[u8; 16]) -> Self {
        let (k0, k1) = split_halves(key);

        let mut state = Self {
            blocks: [*k1, *nonce, Z0, *k0, Z1, xor_block(nonce, &k1), [0u8; 16]],
        };

        for _ in 0..ROUNDS {
            state.round(aes, &Z0, &Z1);
        }

        // Key whitening
        let s = &mut state.blocks;
        s[0] = xor_block(&s[0], &k0);
        s[1] = xor_block(&s[1], &k0);
        s[2] = xor_block(&s[2], &k1);
        s[3] = xor_block(&s[3], &k0);
        s[4] = xor_block(&s[4], &k0);
        s[5] = xor_block(&s[5], &k1);
        s[6] = xor_block(&s[6], &k1);

        state
    }

    /// The Rocca-S round function.
    ///
    /// Every new block is derived from the previous state before any is replaced.
    #[inline]
    fn round<A: AesRound>(&mut self, aes: &A, x0: &[u8; 16], x1: &[u8; 16]) {
        let s = &self.blocks;
        let next = [
            xor_block(&s[6], &s[1]),
            aes.round(&s[0], x0),
            aes.round(&s[1], &s[0]),
            aes.round(&s[2], &s[6]),
            aes.round(&s[3], x1),
            aes.round(&s[4], &s[3]),
            aes.round(&s[5], &s[4]),
        ];
        self.blocks = next;
    }

    /// Keystream for the next 256-bit block.
    #[inline]
    fn keystream<A: AesRound>(&self, aes: &A) -> (Zeroizing<[u8; 16]>, Zeroizing<[u8; 16]>) {
        let s = &self.blocks;
        (
            Zeroizing::new(aes.round(&xor_block(&s[3], &s[5]), &s[0])),
            Zeroizing::new(aes.round(&xor_block(&s[4], &s[6]), &s[2])),
        )
    }

    /// Absorb a single 256-bit block of associated data.
    #[inline]
    fn absorb<A: AesRound>(&mut self, aes: &A, ad: &[u8]) {
        let (ad0, ad1) = split_halves(ad);
        self.round(aes, &ad0, &ad1);
    }

    /// Encrypt a single 256-bit block.
    #[inline]
    fn enc<A: AesRound>(&mut self, aes: &A, dst: &mut [u8], src: &[u8]) {
        let (m0, m1) = split_halves(src);
        let (k0, k1) = self.keystream(aes);

        dst[..16].copy_from_slice(&xor_block(&k0, &m0));
        dst[16..BLOCK_SIZE].copy_from_slice(&xor_block(&k1, &m1));

        self.round(aes, &m0, &m1);
    }

    /// Decrypt a single 256-bit block.
    #[inline]
    fn dec<A: AesRound>(&mut self, aes: &A, dst: &mut [u8], src: &[u8]) {
        let (c0, c1) = split_halves(src);
        let (k0, k1) = self.keystream(aes);

        let m0 = Zeroizing::new(xor_block(&k0, &c0));
        let m1 = Zeroizing::new(xor_block(&k1, &c1));
        dst[..16].copy_from_slice(&m0[..]);
        dst[16..BLOCK_SIZE].copy_from_slice(&m1[..]);

        self.round(aes, &m0, &m1);
    }

    /// Decrypt a partial block.
    ///
    /// The state is updated with the recovered plaintext zero-padded to a full
    /// block, which is exactly what the encryption side absorbed.
    fn dec_partial<A: AesRound>(&mut self, aes: &A, dst: &mut [u8], src: &[u8]) {
        debug_assert!(src.len() < BLOCK_SIZE);
        debug_assert_eq!(src.len(), dst.len());

        let mut padded = Zeroizing::new([0u8; BLOCK_SIZE]);
        padded[..src.len()].copy_from_slice(src);

        let (c0, c1) = split_halves(&padded[..]);
        let (k0, k1) = self.keystream(aes);
        padded[..16].copy_from_slice(&xor_block(&k0, &c0));
        padded[16..].copy_from_slice(&xor_block(&k1, &c1));

        dst.copy_from_slice(&padded[..dst.len()]);
        padded[dst.len()..].fill(0);

        let (m0, m1) = split_halves(&padded[..]);
        self.round(aes, &m0, &m1);
    }

    /// Generate authentication tag.
    fn finalize<A: AesRound>(&mut self, aes: &A, ad_len: usize, msg_len: usize) -> Tag {
        let l0 = le128_bits(ad_len);
        let l1 = le128_bits(msg_len);

        for _ in 0..ROUNDS {
            self.round(aes, &l0, &l1);
        }

        let s = &self.blocks;
        let t0 = xor_block(&xor_block(&s[0], &s[1]), &xor_block(&s[2], &s[3]));
        let t1 = xor_block(&xor_block(&s[4], &s[5]), &s[6]);

        let mut tag = [0u8; 32];
        tag[..16].copy_from_slice(&t0);
        tag[16..].copy_from_slice(&t1);
        tag
    }

    /// Absorb all associated data, zero-padding the final block.
    fn absorb_ad<A: AesRound>(&mut self, aes: &A, ad: &[u8]) {
        let mut blocks = ad.chunks_exact(BLOCK_SIZE);
        for block in blocks.by_ref() {
            self.absorb(aes, block);
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            let mut pad = Zeroizing::new([0u8; BLOCK_SIZE]);
            pad[..rest.len()].copy_from_slice(rest);
            self.absorb(aes, &pad[..]);
        }
    }
}

/// Encrypt plaintext with associated data using Rocca-S.
///
/// `ciphertext` must be exactly `plaintext.len() + TAG_SIZE` bytes long; the tag
/// is written to its last `TAG_SIZE` bytes.
pub(crate) fn encrypt<A: AesRound>(
    aes: &A,
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8; 16],
    key: &[u8; 32],
    ad: &[u8],
) {
    let mut state = RoccaState::new(aes, key, nonce);
    state.absorb_ad(aes, ad);

    let (body, tag_out) = ciphertext.split_at_mut(plaintext.len());

    let mut src_blocks = plaintext.chunks_exact(BLOCK_SIZE);
    let mut dst_blocks = body.chunks_exact_mut(BLOCK_SIZE);
    for (src, dst) in src_blocks.by_ref().zip(dst_blocks.by_ref()) {
        state.enc(aes, dst, src);
    }

    // Process partial block
    let src = src_blocks.remainder();
    let dst = dst_blocks.into_remainder();
    if !src.is_empty() {
        let mut pad = Zeroizing::new([0u8; BLOCK_SIZE]);
        let mut out = Zeroizing::new([0u8; BLOCK_SIZE]);
        pad[..src.len()].copy_from_slice(src);
        state.enc(aes, &mut out[..], &pad[..]);
        dst.copy_from_slice(&out[..src.len()]);
    }

    let tag = state.finalize(aes, ad.len(), plaintext.len());
    tag_out.copy_from_slice(&tag);
}

/// Decrypt ciphertext and verify authentication tag.
///
/// `plaintext` must be exactly `ciphertext.len() - TAG_SIZE` bytes long. If the
/// tag does not verify, `plaintext` is zeroed before returning.
pub(crate) fn decrypt<A: AesRound>(
    aes: &A,
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; 16],
    key: &[u8; 32],
    ad: &[u8],
) -> Result<()> {
    let mut state = RoccaState::new(aes, key, nonce);
    state.absorb_ad(aes, ad);

    let (body, tag) = ciphertext.split_at(plaintext.len());

    let mut src_blocks = body.chunks_exact(BLOCK_SIZE);
    let mut dst_blocks = plaintext.chunks_exact_mut(BLOCK_SIZE);
    for (src, dst) in src_blocks.by_ref().zip(dst_blocks.by_ref()) {
        state.dec(aes, dst, src);
    }

    // Process partial block
    let src = src_blocks.remainder();
    let dst = dst_blocks.into_remainder();
    if !src.is_empty() {
        state.dec_partial(aes, dst, src);
    }

    let expected_tag = Zeroizing::new(state.finalize(aes, ad.len(), plaintext.len()));

    // Verify tag in constant time
    if !bool::from(expected_tag[..].ct_eq(tag)) {
        plaintext.zeroize();
        return Err(Error::AuthenticationFailed);
    }

    Ok(())
}
