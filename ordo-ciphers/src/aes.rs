//! AES (FIPS-197) with a configurable round count (spec §4.2).

use ordo_core::{query_from_sizes, BlockCipher, Error, Query};
use zeroize::Zeroize;

const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// Maximum round count this implementation supports. Regular AES uses 10/12/14; the spec allows
/// any value in `1..=20`.
const MAX_ROUNDS: usize = 20;
const MAX_KEY_WORDS: usize = 8;
/// `4 * (MAX_ROUNDS + 1)` 32-bit words, the largest key schedule this crate ever expands.
const MAX_SCHEDULE_WORDS: usize = 4 * (MAX_ROUNDS + 1);

#[inline]
fn xtime(x: u8) -> u8 {
    (x << 1) ^ (if x & 0x80 != 0 { 0x1b } else { 0 })
}

#[inline]
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}

#[inline]
fn rcon(i: u32) -> u8 {
    let mut r = 1u8;
    for _ in 1..i {
        r = xtime(r);
    }
    r
}

fn sub_word(w: [u8; 4]) -> [u8; 4] {
    [SBOX[w[0] as usize], SBOX[w[1] as usize], SBOX[w[2] as usize], SBOX[w[3] as usize]]
}

fn rot_word(w: [u8; 4]) -> [u8; 4] {
    [w[1], w[2], w[3], w[0]]
}

/// AES-128/192/256, with the round count configurable rather than fixed to the FIPS-197 defaults.
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct Aes {
    round_keys: [[u8; 16]; MAX_ROUNDS + 1],
    rounds: usize,
}

opaque_debug::implement!(Aes);

/// Extra initialization parameters for [`Aes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Params {
    /// Override the round count. `None` selects the FIPS-197 default for the key length
    /// (10/12/14 rounds for 128/192/256-bit keys).
    pub rounds: Option<u32>,
}

impl BlockCipher for Aes {
    type Params = Params;

    const BLOCK_SIZE: usize = 16;

    fn init(key: &[u8], params: Params) -> ordo_core::Result<Self> {
        let nk = match key.len() {
            16 => 4,
            24 => 6,
            32 => 8,
            _ => return Err(Error::KeyLen),
        };

        let rounds = match params.rounds {
            None => match nk {
                4 => 10,
                6 => 12,
                _ => 14,
            },
            Some(0) => return Err(Error::Arg),
            Some(r) if r as usize > MAX_ROUNDS => return Err(Error::Arg),
            Some(r) => r as usize,
        };

        let mut words = [[0u8; 4]; MAX_SCHEDULE_WORDS];
        for i in 0..nk {
            words[i].copy_from_slice(&key[4 * i..4 * i + 4]);
        }

        let total_words = 4 * (rounds + 1);
        for i in nk..total_words {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= rcon((i / nk) as u32);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            for j in 0..4 {
                words[i][j] = words[i - nk][j] ^ temp[j];
            }
        }

        let mut round_keys = [[0u8; 16]; MAX_ROUNDS + 1];
        for r in 0..=rounds {
            for w in 0..4 {
                round_keys[r][4 * w..4 * w + 4].copy_from_slice(&words[4 * r + w]);
            }
        }
        words.zeroize();

        Ok(Self { round_keys, rounds })
    }

    fn forward(&self, block: &mut [u8]) {
        let mut state = [0u8; 16];
        state.copy_from_slice(&block[..16]);

        add_round_key(&mut state, &self.round_keys[0]);
        for round in 1..self.rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, &self.round_keys[round]);
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, &self.round_keys[self.rounds]);

        block[..16].copy_from_slice(&state);
    }

    fn inverse(&self, block: &mut [u8]) {
        let mut state = [0u8; 16];
        state.copy_from_slice(&block[..16]);

        add_round_key(&mut state, &self.round_keys[self.rounds]);
        for round in (1..self.rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, &self.round_keys[round]);
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &self.round_keys[0]);

        block[..16].copy_from_slice(&state);
    }

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::KeyLen => query_from_sizes(&[16, 24, 32], suggested),
            Query::BlockSize => query_from_sizes(&[Self::BLOCK_SIZE], suggested),
            Query::DigestLen | Query::IvLen => None,
        }
    }
}

impl Drop for Aes {
    fn drop(&mut self) {
        for rk in &mut self.round_keys {
            rk.zeroize();
        }
    }
}

fn add_round_key(state: &mut [u8; 16], key: &[u8; 16]) {
    for i in 0..16 {
        state[i] ^= key[i];
    }
}

fn sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

/// State is stored column-major, as four 4-byte columns laid out consecutively, matching
/// FIPS-197's column-major state array.
fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) % 4) * 4 + row];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) % 4) * 4 + row];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let c = col * 4;
        let a = [state[c], state[c + 1], state[c + 2], state[c + 3]];
        state[c] = gmul(a[0], 2) ^ gmul(a[1], 3) ^ a[2] ^ a[3];
        state[c + 1] = a[0] ^ gmul(a[1], 2) ^ gmul(a[2], 3) ^ a[3];
        state[c + 2] = a[0] ^ a[1] ^ gmul(a[2], 2) ^ gmul(a[3], 3);
        state[c + 3] = gmul(a[0], 3) ^ a[1] ^ a[2] ^ gmul(a[3], 2);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let c = col * 4;
        let a = [state[c], state[c + 1], state[c + 2], state[c + 3]];
        state[c] = gmul(a[0], 14) ^ gmul(a[1], 11) ^ gmul(a[2], 13) ^ gmul(a[3], 9);
        state[c + 1] = gmul(a[0], 9) ^ gmul(a[1], 14) ^ gmul(a[2], 11) ^ gmul(a[3], 13);
        state[c + 2] = gmul(a[0], 13) ^ gmul(a[1], 9) ^ gmul(a[2], 14) ^ gmul(a[3], 11);
        state[c + 3] = gmul(a[0], 11) ^ gmul(a[1], 13) ^ gmul(a[2], 9) ^ gmul(a[3], 14);
    }
}

#[cfg(test)]
mod tests {
    use super::{Aes, Params};
    use ordo_core::{BlockCipher, Error, Query};

    // FIPS-197 Appendix B/C test vectors.
    const KEY_128: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    ];
    const PLAINTEXT: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
    ];
    const CIPHERTEXT_128: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
    ];

    #[test]
    fn fips197_appendix_b_128_bit_key() {
        let cipher = Aes::init(&KEY_128, Params::default()).unwrap();
        let mut block = PLAINTEXT;
        cipher.forward(&mut block);
        assert_eq!(block, CIPHERTEXT_128);
        cipher.inverse(&mut block);
        assert_eq!(block, PLAINTEXT);
    }

    #[test]
    fn round_trip_for_every_key_length() {
        let key32 = [0x42u8; 32];
        for key in [&key32[..16], &key32[..24], &key32[..32]] {
            let cipher = Aes::init(key, Params::default()).unwrap();
            let mut block = PLAINTEXT;
            cipher.forward(&mut block);
            assert_ne!(block, PLAINTEXT);
            cipher.inverse(&mut block);
            assert_eq!(block, PLAINTEXT);
        }
    }

    #[test]
    fn rejects_bad_key_length() {
        assert_eq!(Aes::init(&[0u8; 20], Params::default()), Err(Error::KeyLen));
    }

    #[test]
    fn rejects_zero_rounds_and_too_many_rounds() {
        assert_eq!(Aes::init(&KEY_128, Params { rounds: Some(0) }), Err(Error::Arg));
        assert_eq!(Aes::init(&KEY_128, Params { rounds: Some(21) }), Err(Error::Arg));
    }

    #[test]
    fn custom_round_count_still_round_trips() {
        let cipher = Aes::init(&KEY_128, Params { rounds: Some(6) }).unwrap();
        let mut block = PLAINTEXT;
        cipher.forward(&mut block);
        cipher.inverse(&mut block);
        assert_eq!(block, PLAINTEXT);
    }

    #[test]
    fn query_reports_the_three_key_lengths() {
        assert_eq!(Aes::query(Query::KeyLen, 0), Some(16));
        assert_eq!(Aes::query(Query::KeyLen, 20), Some(24));
        assert_eq!(Aes::query(Query::KeyLen, usize::MAX), Some(32));
    }
}
