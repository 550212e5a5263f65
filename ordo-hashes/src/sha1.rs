//! SHA-1 (FIPS 180-4): big-endian length, big-endian digest, 160-bit output (spec §4.4).

use ordo_buffer::BlockBuffer;
use ordo_bytes::{read_u32_be, write_u32_be};
use ordo_core::{query_from_sizes, Hash, Query, Result};

/// SHA-1 as a streaming [`Hash`].
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<64>,
    len: u64,
}

fn compress(state: &mut [u32; 5], block: &[u8; 64]) {
    let mut w = [0u32; 80];
    for i in 0..16 {
        w[i] = read_u32_be(&block[4 * i..4 * i + 4]);
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;
    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), 0x5a82_7999),
            20..=39 => (b ^ c ^ d, 0x6ed9_eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1b_bcdc),
            _ => (b ^ c ^ d, 0xca62_c1d6),
        };
        let temp = a.rotate_left(5).wrapping_add(f).wrapping_add(e).wrapping_add(k).wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

impl Hash for Sha1 {
    type Params = ();

    const BLOCK_SIZE: usize = 64;

    fn init((): ()) -> Result<Self> {
        Ok(Self {
            state: [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0],
            buffer: BlockBuffer::new(),
            len: 0,
        })
    }

    fn update(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64 * 8);
        let state = &mut self.state;
        self.buffer.input(data, |block| compress(state, block));
    }

    fn finalize(mut self, out: &mut [u8]) {
        let state = &mut self.state;
        self.buffer.len_padding_be(self.len, |block| compress(state, block));
        for i in 0..5 {
            write_u32_be(self.state[i], &mut out[4 * i..4 * i + 4]);
        }
    }

    fn output_len(&self) -> usize {
        20
    }

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::DigestLen => query_from_sizes(&[20], suggested),
            Query::BlockSize => query_from_sizes(&[Self::BLOCK_SIZE], suggested),
            Query::KeyLen | Query::IvLen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sha1;
    use ordo_core::Hash;

    fn digest(data: &[u8]) -> [u8; 20] {
        let mut h = Sha1::init(()).unwrap();
        h.update(data);
        let mut out = [0u8; 20];
        h.finalize(&mut out);
        out
    }

    fn hex20(s: &str) -> [u8; 20] {
        let mut out = [0u8; 20];
        for i in 0..20 {
            out[i] = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
        }
        out
    }

    #[test]
    fn empty_input() {
        assert_eq!(digest(b""), hex20("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
    }

    #[test]
    fn abc() {
        assert_eq!(digest(b"abc"), hex20("a9993e364706816aba3e25717850c26c9cd0d89d"));
    }

    #[test]
    fn chunked_update_matches_one_shot() {
        let message = b"the quick brown fox jumps over the lazy dog";
        let mut chunked = Sha1::init(()).unwrap();
        for chunk in message.chunks(9) {
            chunked.update(chunk);
        }
        let mut out = [0u8; 20];
        chunked.finalize(&mut out);
        assert_eq!(out, digest(message));
    }
}
