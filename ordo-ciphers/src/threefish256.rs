//! Threefish-256, the tweakable block cipher underlying Skein-256 (spec §4.2, §6.2).
//!
//! Block, key and tweak sizes are fixed at 256/256/128 bits, per the Skein specification.

use ordo_bytes::{read_u64_le, write_u64_le};
use ordo_core::{query_from_sizes, BlockCipher, Error, Query};
use zeroize::Zeroize;

/// Skein's key-schedule parity constant, `0x1BD11BDAA9FC1A22`.
const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Rotation constants `R[d % 8][j]` for Threefish-256's two MIX operations per round.
const ROTATION: [[u32; 2]; 8] =
    [[14, 16], [52, 57], [23, 40], [5, 37], [25, 33], [46, 12], [58, 22], [32, 32]];

const ROUNDS: usize = 72;
/// One subkey is injected every 4 rounds, plus the initial whitening: 19 subkeys total (spec
/// §6.2 counts 18 of these as mid-cipher injections, plus the initial one).
const SUBKEYS: usize = ROUNDS / 4 + 1;

/// Threefish-256 with a 128-bit tweak, as used by Skein-256's UBI chaining.
pub struct Threefish256 {
    key: [u64; 5],
    tweak: [u64; 3],
}

opaque_debug::implement!(Threefish256);

impl Threefish256 {
    /// Build the cipher directly from a raw 32-byte key and 16-byte tweak, bypassing the
    /// `BlockCipher::init` key-length contract. Used internally by the Skein-256 UBI harness: each
    /// UBI step keys the cipher with the previous step's chaining value, which changes every
    /// block, so there's no key schedule worth holding onto across steps — every step builds a
    /// fresh `Threefish256`.
    #[must_use]
    pub fn with_tweak(key: &[u8; 32], tweak: &[u8; 16]) -> Self {
        let mut k = [0u64; 5];
        for i in 0..4 {
            k[i] = read_u64_le(&key[8 * i..8 * i + 8]);
        }
        k[4] = k[0] ^ k[1] ^ k[2] ^ k[3] ^ C240;

        let t0 = read_u64_le(&tweak[0..8]);
        let t1 = read_u64_le(&tweak[8..16]);
        Self { key: k, tweak: [t0, t1, t0 ^ t1] }
    }

    fn subkey(&self, s: usize) -> [u64; 4] {
        [
            self.key[s % 5],
            self.key[(s + 1) % 5].wrapping_add(self.tweak[s % 3]),
            self.key[(s + 2) % 5].wrapping_add(self.tweak[(s + 1) % 3]),
            self.key[(s + 3) % 5].wrapping_add(s as u64),
        ]
    }

    fn forward_words(&self, block: [u64; 4]) -> [u64; 4] {
        let mut v = block;
        for d in 0..ROUNDS {
            if d % 4 == 0 {
                let sk = self.subkey(d / 4);
                for i in 0..4 {
                    v[i] = v[i].wrapping_add(sk[i]);
                }
            }
            let r = ROTATION[d % 8];
            let (y0, y1) = mix(v[0], v[1], r[0]);
            let (y2, y3) = mix(v[2], v[3], r[1]);
            v = [y0, y3, y2, y1];
        }
        let sk = self.subkey(SUBKEYS - 1);
        for i in 0..4 {
            v[i] = v[i].wrapping_add(sk[i]);
        }
        v
    }

    fn inverse_words(&self, block: [u64; 4]) -> [u64; 4] {
        let mut v = block;
        let sk = self.subkey(SUBKEYS - 1);
        for i in 0..4 {
            v[i] = v[i].wrapping_sub(sk[i]);
        }
        for d in (0..ROUNDS).rev() {
            let y = [v[0], v[3], v[2], v[1]];
            let r = ROTATION[d % 8];
            let (x0, x1) = unmix(y[0], y[1], r[0]);
            let (x2, x3) = unmix(y[2], y[3], r[1]);
            v = [x0, x1, x2, x3];
            if d % 4 == 0 {
                let sk = self.subkey(d / 4);
                for i in 0..4 {
                    v[i] = v[i].wrapping_sub(sk[i]);
                }
            }
        }
        v
    }
}

#[inline]
fn mix(x0: u64, x1: u64, rot: u32) -> (u64, u64) {
    let y0 = x0.wrapping_add(x1);
    let y1 = x1.rotate_left(rot) ^ y0;
    (y0, y1)
}

#[inline]
fn unmix(y0: u64, y1: u64, rot: u32) -> (u64, u64) {
    let x1 = (y1 ^ y0).rotate_right(rot);
    let x0 = y0.wrapping_sub(x1);
    (x0, x1)
}

fn block_to_words(block: &[u8]) -> [u64; 4] {
    let mut w = [0u64; 4];
    for i in 0..4 {
        w[i] = read_u64_le(&block[8 * i..8 * i + 8]);
    }
    w
}

fn words_to_block(w: [u64; 4], block: &mut [u8]) {
    for i in 0..4 {
        write_u64_le(w[i], &mut block[8 * i..8 * i + 8]);
    }
}

impl BlockCipher for Threefish256 {
    /// The 128-bit tweak. Defaults to zero.
    type Params = [u8; 16];

    const BLOCK_SIZE: usize = 32;

    fn init(key: &[u8], tweak: [u8; 16]) -> ordo_core::Result<Self> {
        if key.len() != 32 {
            return Err(Error::KeyLen);
        }
        let mut key_bytes = [0u8; 32];
        key_bytes.copy_from_slice(key);
        Ok(Self::with_tweak(&key_bytes, &tweak))
    }

    fn forward(&self, block: &mut [u8]) {
        let w = self.forward_words(block_to_words(block));
        words_to_block(w, block);
    }

    fn inverse(&self, block: &mut [u8]) {
        let w = self.inverse_words(block_to_words(block));
        words_to_block(w, block);
    }

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::KeyLen => query_from_sizes(&[32], suggested),
            Query::BlockSize => query_from_sizes(&[Self::BLOCK_SIZE], suggested),
            Query::DigestLen | Query::IvLen => None,
        }
    }
}

impl Drop for Threefish256 {
    fn drop(&mut self) {
        self.key.zeroize();
        self.tweak.zeroize();
    }
}
