//! Curve25519 field arithmetic mod `2^255 - 19`, radix-51 five-limb elements (spec §4.10).
//!
//! The representation and carry chains follow the standard constructions used throughout the
//! Curve25519 ecosystem (`donna`, `curve25519-dalek`'s serial `u64` backend): each limb holds
//! roughly 51 bits, with the five limbs together covering 255 bits and a little slack for lazy
//! (not-fully-normalized) intermediate results between reductions.

use ordo_ctutils::{Choice, CtSelect};

const MASK51: u64 = (1 << 51) - 1;

/// A Curve25519 field element, held in loosely-reduced radix-2^51 form.
///
/// Limbs are kept below `2^51` (give or take a handful of ULPs carried over from an `add`/`sub`)
/// after every operation; full reduction mod `p` only happens in [`Fe::to_bytes`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fe(pub [u64; 5]);

impl Fe {
    pub(crate) const ZERO: Fe = Fe([0, 0, 0, 0, 0]);
    pub(crate) const ONE: Fe = Fe([1, 0, 0, 0, 0]);

    /// `486662` (the Montgomery `A` coefficient) reduced to this representation, scaled by `1/4`:
    /// `a24 = (A - 2) / 4 = 121665`, the constant the ladder's `E`-coefficient step multiplies by.
    pub(crate) const A24: Fe = Fe([121_665, 0, 0, 0, 0]);

    /// Load a little-endian 32-byte encoding (the top bit is ignored, per RFC 7748 §5).
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Fe {
        let load8 = |b: &[u8]| -> u64 {
            u64::from(b[0])
                | u64::from(b[1]) << 8
                | u64::from(b[2]) << 16
                | u64::from(b[3]) << 24
                | u64::from(b[4]) << 32
                | u64::from(b[5]) << 40
                | u64::from(b[6]) << 48
                | u64::from(b[7]) << 56
        };
        Fe([
            load8(&bytes[0..8]) & MASK51,
            (load8(&bytes[6..14]) >> 3) & MASK51,
            (load8(&bytes[12..20]) >> 6) & MASK51,
            (load8(&bytes[19..27]) >> 1) & MASK51,
            (load8(&bytes[24..32]) >> 12) & MASK51,
        ])
    }

    /// Fully reduce mod `p` and pack into a little-endian 32-byte encoding.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut l = self.0;

        // Bring every limb below 2^51.
        let mut c;
        c = l[0] >> 51;
        l[0] &= MASK51;
        l[1] += c;
        c = l[1] >> 51;
        l[1] &= MASK51;
        l[2] += c;
        c = l[2] >> 51;
        l[2] &= MASK51;
        l[3] += c;
        c = l[3] >> 51;
        l[3] &= MASK51;
        l[4] += c;
        c = l[4] >> 51;
        l[4] &= MASK51;
        l[0] += c * 19;
        c = l[0] >> 51;
        l[0] &= MASK51;
        l[1] += c;

        // l now represents an integer in [0, 2*p). Subtract p once if l >= p, by computing the
        // carry that a full `l + 19` addition (the two's-complement trick for `l - p`) produces
        // out of the top limb.
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;
        c = l[0] >> 51;
        l[0] &= MASK51;
        l[1] += c;
        c = l[1] >> 51;
        l[1] &= MASK51;
        l[2] += c;
        c = l[2] >> 51;
        l[2] &= MASK51;
        l[3] += c;
        c = l[3] >> 51;
        l[3] &= MASK51;
        l[4] += c;
        l[4] &= MASK51;

        let mut out = [0u8; 32];
        out[0] = l[0] as u8;
        out[1] = (l[0] >> 8) as u8;
        out[2] = (l[0] >> 16) as u8;
        out[3] = (l[0] >> 24) as u8;
        out[4] = (l[0] >> 32) as u8;
        out[5] = (l[0] >> 40) as u8;
        out[6] = ((l[0] >> 48) | (l[1] << 3)) as u8;
        out[7] = (l[1] >> 5) as u8;
        out[8] = (l[1] >> 13) as u8;
        out[9] = (l[1] >> 21) as u8;
        out[10] = (l[1] >> 29) as u8;
        out[11] = (l[1] >> 37) as u8;
        out[12] = ((l[1] >> 45) | (l[2] << 6)) as u8;
        out[13] = (l[2] >> 2) as u8;
        out[14] = (l[2] >> 10) as u8;
        out[15] = (l[2] >> 18) as u8;
        out[16] = (l[2] >> 26) as u8;
        out[17] = (l[2] >> 34) as u8;
        out[18] = (l[2] >> 42) as u8;
        out[19] = ((l[2] >> 50) | (l[3] << 1)) as u8;
        out[20] = (l[3] >> 7) as u8;
        out[21] = (l[3] >> 15) as u8;
        out[22] = (l[3] >> 23) as u8;
        out[23] = (l[3] >> 31) as u8;
        out[24] = (l[3] >> 39) as u8;
        out[25] = ((l[3] >> 47) | (l[4] << 4)) as u8;
        out[26] = (l[4] >> 4) as u8;
        out[27] = (l[4] >> 12) as u8;
        out[28] = (l[4] >> 20) as u8;
        out[29] = (l[4] >> 28) as u8;
        out[30] = (l[4] >> 36) as u8;
        out[31] = (l[4] >> 44) as u8;
        out
    }

    pub(crate) fn add(self, rhs: Fe) -> Fe {
        let mut t = [0u64; 5];
        for i in 0..5 {
            t[i] = self.0[i] + rhs.0[i];
        }
        reduce_loose(t)
    }

    /// `self - rhs`, safe against per-limb underflow: each limb is bumped by `2*p`'s limb value
    /// (a fixed multiple of the modulus, so the result is unchanged mod `p`) before subtracting,
    /// which dominates any single rhs limb (bounded below `2^51`).
    pub(crate) fn sub(self, rhs: Fe) -> Fe {
        const TWO_P0: u64 = 2 * ((1u64 << 51) - 19);
        const TWO_PH: u64 = 2 * ((1u64 << 51) - 1);
        let bump = [TWO_P0, TWO_PH, TWO_PH, TWO_PH, TWO_PH];
        let mut t = [0u64; 5];
        for i in 0..5 {
            t[i] = (self.0[i] + bump[i]) - rhs.0[i];
        }
        reduce_loose(t)
    }

    pub(crate) fn mul(self, rhs: Fe) -> Fe {
        let a = self.0;
        let b = rhs.0;
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let m = |x: u64, y: u64| u128::from(x) * u128::from(y);

        let c0 = m(a[0], b[0]) + m(a[1], b4_19) + m(a[2], b3_19) + m(a[3], b2_19) + m(a[4], b1_19);
        let c1 = m(a[0], b[1]) + m(a[1], b[0]) + m(a[2], b4_19) + m(a[3], b3_19) + m(a[4], b2_19);
        let c2 = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]) + m(a[3], b4_19) + m(a[4], b3_19);
        let c3 = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]) + m(a[4], b4_19);
        let c4 = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);

        reduce_wide([c0, c1, c2, c3, c4])
    }

    pub(crate) fn square(self) -> Fe {
        self.mul(self)
    }

    /// `self^(p-2) mod p`, i.e. the modular inverse by Fermat's little theorem.
    ///
    /// Implemented as a plain left-to-right square-and-multiply over the bits of the fixed public
    /// exponent `p - 2`; since the exponent is a compile-time constant rather than secret data,
    /// branching on its bits leaks nothing about `self`.
    pub(crate) fn invert(self) -> Fe {
        let mut result = Fe::ONE;
        for word in EXP_P_MINUS_2 {
            for bit in (0..64).rev() {
                result = result.square();
                if (word >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }
}

/// `p - 2 = 2^255 - 21`, most-significant 64-bit word first.
const EXP_P_MINUS_2: [u64; 4] =
    [0x7fff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffeb];

fn reduce_loose(mut t: [u64; 5]) -> Fe {
    let mut c;
    c = t[0] >> 51;
    t[0] &= MASK51;
    t[1] += c;
    c = t[1] >> 51;
    t[1] &= MASK51;
    t[2] += c;
    c = t[2] >> 51;
    t[2] &= MASK51;
    t[3] += c;
    c = t[3] >> 51;
    t[3] &= MASK51;
    t[4] += c;
    c = t[4] >> 51;
    t[4] &= MASK51;
    t[0] += c * 19;
    c = t[0] >> 51;
    t[0] &= MASK51;
    t[1] += c;
    c = t[1] >> 51;
    t[1] &= MASK51;
    t[2] += c;
    Fe(t)
}

fn reduce_wide(mut t: [u128; 5]) -> Fe {
    let mut c;
    c = t[0] >> 51;
    t[0] &= u128::from(MASK51);
    t[1] += c;
    c = t[1] >> 51;
    t[1] &= u128::from(MASK51);
    t[2] += c;
    c = t[2] >> 51;
    t[2] &= u128::from(MASK51);
    t[3] += c;
    c = t[3] >> 51;
    t[3] &= u128::from(MASK51);
    t[4] += c;
    c = t[4] >> 51;
    t[4] &= u128::from(MASK51);
    t[0] += c * 19;
    c = t[0] >> 51;
    t[0] &= u128::from(MASK51);
    t[1] += c;
    c = t[1] >> 51;
    t[1] &= u128::from(MASK51);
    t[2] += c;

    Fe([t[0] as u64, t[1] as u64, t[2] as u64, t[3] as u64, t[4] as u64])
}

impl CtSelect for Fe {
    fn ct_select(&self, other: &Self, choice: Choice) -> Self {
        Fe(self.0.ct_select(&other.0, choice))
    }
}
