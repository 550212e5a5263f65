//! X25519 elliptic-curve Diffie-Hellman over Curve25519 (RFC 7748, spec §4.10).
//!
//! Three entry points: [`gen`] draws a clamped private scalar from the OS CSPRNG, [`pub_`]
//! derives the corresponding public key by multiplying the curve's base point, and [`ecdh`]
//! computes a shared secret against a peer's public key. The Montgomery ladder and field
//! arithmetic behind them are an internal, self-contained sub-module; callers only ever see
//! 32-byte scalars and `u`-coordinates.
#![no_std]

mod field;
mod ladder;

use ordo_core::{Error, Result};

/// The Curve25519 base point's `u`-coordinate, `u = 9`.
const BASE_POINT: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

/// Clamp a raw 32-byte scalar per RFC 7748 §5: clear the low 3 bits (cofactor), clear the top
/// bit, and set the second-highest bit.
fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

/// Fill `priv_out` with a freshly generated, clamped X25519 private scalar.
///
/// # Errors
/// Returns [`Error::Fail`] if the OS entropy source could not be read.
pub fn gen(priv_out: &mut [u8; 32]) -> Result<()> {
    getrandom::fill(priv_out).map_err(|_| Error::Fail)?;
    clamp(priv_out);
    Ok(())
}

/// Derive the public key corresponding to private scalar `priv_key`, by multiplying the curve's
/// base point (`u = 9`).
pub fn pub_(pub_out: &mut [u8; 32], priv_key: &[u8; 32]) {
    *pub_out = ladder::scalar_mult(priv_key, &BASE_POINT);
}

/// Compute the shared secret between `priv_key` and `peer_pub`.
///
/// Per RFC 7748, the result is not checked against low-order points; callers that need contributory
/// behavior should additionally reject an all-zero output.
pub fn ecdh(shared_out: &mut [u8; 32], priv_key: &[u8; 32], peer_pub: &[u8; 32]) {
    *shared_out = ladder::scalar_mult(priv_key, peer_pub);
}
