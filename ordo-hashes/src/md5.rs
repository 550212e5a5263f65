//! MD5 (RFC 1321): little-endian length, little-endian digest, 128-bit output (spec §4.4).

use ordo_buffer::BlockBuffer;
use ordo_bytes::{read_u32_le, write_u32_le};
use ordo_core::{query_from_sizes, Hash, Query, Result};

const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9,
    14, 20, 5, 9, 14, 20, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 6, 10, 15,
    21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

// floor(abs(sin(i + 1)) * 2^32), i = 0..64, per RFC 1321 §3.4.
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613,
    0xfd46_9501, 0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193,
    0xa679_438e, 0x49b4_0821, 0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d,
    0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8, 0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a, 0xfffa_3942, 0x8771_f681, 0x6d9d_6122,
    0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70, 0x289b_7ec6, 0xeaa1_27fa,
    0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665, 0xf429_2244,
    0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb,
    0xeb86_d391,
];

/// MD5 as a streaming [`Hash`].
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: BlockBuffer<64>,
    len: u64,
}

fn compress(state: &mut [u32; 4], block: &[u8; 64]) {
    let mut m = [0u32; 16];
    for i in 0..16 {
        m[i] = read_u32_le(&block[4 * i..4 * i + 4]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for i in 0..64 {
        let (f, g) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };
        let f = f.wrapping_add(a).wrapping_add(K[i]).wrapping_add(m[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(S[i]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

impl Hash for Md5 {
    type Params = ();

    const BLOCK_SIZE: usize = 64;

    fn init((): ()) -> Result<Self> {
        Ok(Self {
            state: [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476],
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
        self.buffer.len_padding_le(self.len, |block| compress(state, block));
        for i in 0..4 {
            write_u32_le(self.state[i], &mut out[4 * i..4 * i + 4]);
        }
    }

    fn output_len(&self) -> usize {
        16
    }

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::DigestLen => query_from_sizes(&[16], suggested),
            Query::BlockSize => query_from_sizes(&[Self::BLOCK_SIZE], suggested),
            Query::KeyLen | Query::IvLen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Md5;
    use ordo_core::Hash;

    fn digest(data: &[u8]) -> [u8; 16] {
        let mut h = Md5::init(()).unwrap();
        h.update(data);
        let mut out = [0u8; 16];
        h.finalize(&mut out);
        out
    }

    #[test]
    fn empty_input() {
        assert_eq!(digest(b""), hex("d41d8cd98f00b204e9800998ecf8427e"));
    }

    #[test]
    fn abc() {
        assert_eq!(digest(b"abc"), hex("900150983cd24fb0d6963f7d28e17f72"));
    }

    #[test]
    fn chunked_update_matches_one_shot() {
        let message = b"the quick brown fox jumps over the lazy dog";
        let mut chunked = Md5::init(()).unwrap();
        for chunk in message.chunks(7) {
            chunked.update(chunk);
        }
        let mut out = [0u8; 16];
        chunked.finalize(&mut out);
        assert_eq!(out, digest(message));
    }

    fn hex(s: &str) -> [u8; 16] {
        let mut out = [0u8; 16];
        for i in 0..16 {
            out[i] = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
        }
        out
    }
}
