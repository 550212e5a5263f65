//! The Ordo cryptographic toolkit's high-level façade (spec §4.11).
//!
//! Every lower-level crate in the workspace is generic over a concrete algorithm type chosen at
//! compile time (`Cbc<Aes>`, `Hmac<Sha256>`, ...). This crate adds a runtime-selectable layer on
//! top: [`PrimitiveId`]-driven tagged-union contexts (per spec §9's "opaque contexts re-
//! architect to tagged variants") plus one-shot convenience functions mirroring the C original's
//! `ordo_digest`/`ordo_hmac`/`ordo_enc_block`/`ordo_enc_stream` entry points.
//!
//! Key derivation (PBKDF2, HKDF — [`ordo_kdf`]), X25519 ([`ordo_x25519`]), and the OS entropy
//! source ([`ordo_rand`]) are generic over a caller-chosen hash or are already primitive-free, so
//! they're re-exported as-is rather than wrapped in another tagged layer.
#![no_std]

mod block;
mod digest;
mod hmac;
mod query;
mod stream;

pub use block::{ordo_enc_block, BlockCipherParams, EncBlockContext, ModeParams};
pub use digest::{ordo_digest, DigestContext, DigestParams};
pub use hmac::{ordo_hmac, ordo_hmac_verify, HmacContext};
pub use query::query;
pub use stream::{ordo_enc_stream, EncStreamContext, StreamCipherParams};

pub use ordo_core::{Error, PrimitiveId, PrimitiveType, Query, Result};
pub use ordo_kdf::{hkdf, pbkdf2};
pub use ordo_rand::{os_random, os_secure_random};
pub use ordo_x25519 as x25519;

#[cfg(test)]
mod tests {
    use super::{ordo_digest, DigestParams};
    use ordo_core::PrimitiveId;

    #[test]
    fn facade_reexports_are_reachable() {
        let mut out = [0u8; 32];
        ordo_digest(PrimitiveId::Sha256, DigestParams::Default, b"abc", &mut out).unwrap();
        assert_ne!(out, [0u8; 32]);
    }
}
