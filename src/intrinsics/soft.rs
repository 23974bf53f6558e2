//! Portable AES round used as a reference in tests.
//!
//! Not constant-time. Never compiled into the library.

use super::AesRound;

#[derive(Clone, Copy, Debug)]
pub(crate) struct SoftAes;

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

fn sbox(x: u8) -> u8 {
    // x^254 is the multiplicative inverse, with 0 mapping to 0.
    let mut inv = 1u8;
    for _ in 0..254 {
        inv = gmul(inv, x);
    }
    inv ^ inv.rotate_left(1) ^ inv.rotate_left(2) ^ inv.rotate_left(3) ^ inv.rotate_left(4)
        ^ 0x63
}

impl AesRound for SoftAes {
    fn round(&self, block: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
        let mut sub = [0u8; 16];
        for (out, &b) in sub.iter_mut().zip(block.iter()) {
            *out = sbox(b);
        }

        // Byte 4 * column + row; row r rotates left by r columns.
        let mut shifted = [0u8; 16];
        for c in 0..4 {
            for r in 0..4 {
                shifted[4 * c + r] = sub[4 * ((c + r) % 4) + r];
            }
        }

        let mut output = [0u8; 16];
        for c in 0..4 {
            let a = &shifted[4 * c..4 * c + 4];
            output[4 * c] = gmul(a[0], 2) ^ gmul(a[1], 3) ^ a[2] ^ a[3];
            output[4 * c + 1] = a[0] ^ gmul(a[1], 2) ^ gmul(a[2], 3) ^ a[3];
            output[4 * c + 2] = a[0] ^ a[1] ^ gmul(a[2], 2) ^ gmul(a[3], 3);
            output[4 * c + 3] = gmul(a[0], 3) ^ a[1] ^ a[2] ^ gmul(a[3], 2);
        }

        for (out, k) in output.iter_mut().zip(round_key.iter()) {
            *out ^= k;
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
    }

    #[test]
    fn test_soft_round() {
        let input = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        let expected = [
            0x63, 0x79, 0xe6, 0xd9, 0xf4, 0x67, 0xfb, 0x76, 0xad, 0x06, 0x3c, 0xf4, 0xd2, 0xeb,
            0x8a, 0xa3,
        ];

        assert_eq!(SoftAes.round(&input, &[0u8; 16]), expected);

        let mut keyed = expected;
        keyed[0] ^= 0xff;
        let mut key = [0u8; 16];
        key[0] = 0xff;
        assert_eq!(SoftAes.round(&input, &key), keyed);
    }
}
