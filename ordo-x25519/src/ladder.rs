//! The Montgomery ladder (RFC 7748 §5): scalar multiplication of a Curve25519 `u`-coordinate.

use ordo_ctutils::{Choice, CtSelect};

use crate::field::Fe;

/// Multiply the point with `u`-coordinate `u` by the clamped scalar `k`, returning the resulting
/// `u`-coordinate.
///
/// `k` is consumed bit-by-bit from the most significant (bit 254, since clamping always clears
/// bit 255 and sets bit 254) down to bit 0. The running pair `(x2, x3)` is conditionally swapped
/// in constant time via [`CtSelect`], matching RFC 7748's reference algorithm and the ladder's
/// standard resistance to scalar-dependent timing variation.
pub(crate) fn scalar_mult(k: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let u = Fe::from_bytes(u);

    let x1 = u;
    let mut x2 = Fe::ONE;
    let mut z2 = Fe::ZERO;
    let mut x3 = u;
    let mut z3 = Fe::ONE;
    let mut swap = Choice::FALSE;

    for pos in (0..255).rev() {
        let bit = Choice::new((k[pos / 8] >> (pos % 8)) & 1);
        swap = swap ^ bit;
        x2.ct_swap(&mut x3, swap);
        z2.ct_swap(&mut z3, swap);
        swap = bit;

        let a = x2.add(z2);
        let aa = a.square();
        let b = x2.sub(z2);
        let bb = b.square();
        let e = aa.sub(bb);
        let c = x3.add(z3);
        let d = x3.sub(z3);
        let da = d.mul(a);
        let cb = c.mul(b);
        x3 = da.add(cb).square();
        z3 = x1.mul(da.sub(cb).square());
        x2 = aa.mul(bb);
        z2 = e.mul(aa.add(e.mul(Fe::A24)));
    }
    x2.ct_swap(&mut x3, swap);
    z2.ct_swap(&mut z3, swap);

    x2.mul(z2.invert()).to_bytes()
}
