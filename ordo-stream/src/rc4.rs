//! RC4 (spec §4.3): standard KSA/PRGA, with a configurable keystream-drop count.

use ordo_core::{query_from_range, Error, Query, StreamCipher};
use zeroize::Zeroize;

/// Extra initialization parameters for [`Rc4`].
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Number of leading keystream bytes to discard after the key schedule, working around
    /// RC4's well-known weak early keystream bytes. Default 2048 (spec §4.3).
    pub drop: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { drop: 2048 }
    }
}

/// RC4 keyed stream cipher state: the 256-byte permutation plus the two running indices.
#[derive(Clone, PartialEq, Eq)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

opaque_debug::implement!(Rc4);

impl Rc4 {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[idx as usize]
    }
}

impl StreamCipher for Rc4 {
    type Params = Params;

    fn init(key: &[u8], params: Params) -> ordo_core::Result<Self> {
        if key.len() < 5 || key.len() > 256 {
            return Err(Error::KeyLen);
        }

        let mut s = [0u8; 256];
        for (i, b) in s.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        let mut rc4 = Self { s, i: 0, j: 0 };
        for _ in 0..params.drop {
            rc4.next_byte();
        }
        Ok(rc4)
    }

    fn apply(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b ^= self.next_byte();
        }
    }

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::KeyLen => query_from_range(5, 256, suggested),
            Query::BlockSize | Query::DigestLen | Query::IvLen => None,
        }
    }
}

impl Drop for Rc4 {
    fn drop(&mut self) {
        self.s.zeroize();
        self.i.zeroize();
        self.j.zeroize();
    }
}
