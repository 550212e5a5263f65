//! [`HmacContext`]: HMAC (spec §4.7) generic over whichever hash a [`PrimitiveId`] selects.

use ordo_core::{Error, PrimitiveId, Result};
use ordo_mac::Hmac;

#[cfg(feature = "md5")]
use ordo_hashes::Md5;
#[cfg(feature = "sha1")]
use ordo_hashes::Sha1;
#[cfg(feature = "sha256")]
use ordo_hashes::Sha256;
#[cfg(feature = "skein256")]
use ordo_hashes::Skein256;

use crate::digest::DigestParams;

/// A running HMAC computation, keyed on initialization, over whichever hash [`PrimitiveId`]
/// selected.
pub enum HmacContext {
    /// HMAC-MD5.
    #[cfg(feature = "md5")]
    Md5(Hmac<Md5>),
    /// HMAC-SHA-1.
    #[cfg(feature = "sha1")]
    Sha1(Hmac<Sha1>),
    /// HMAC-SHA-256.
    #[cfg(feature = "sha256")]
    Sha256(Hmac<Sha256>),
    /// HMAC-Skein-256.
    #[cfg(feature = "skein256")]
    Skein256(Hmac<Skein256>),
}

impl HmacContext {
    /// Key an HMAC context over the hash named by `id`.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `id` does not name a compiled-in hash, or if `params` is
    /// invalid for that hash.
    pub fn init(id: PrimitiveId, key: &[u8], params: DigestParams) -> Result<Self> {
        match id {
            #[cfg(feature = "md5")]
            PrimitiveId::Md5 => Ok(Self::Md5(Hmac::init(key, ())?)),
            #[cfg(feature = "sha1")]
            PrimitiveId::Sha1 => Ok(Self::Sha1(Hmac::init(key, ())?)),
            #[cfg(feature = "sha256")]
            PrimitiveId::Sha256 => Ok(Self::Sha256(Hmac::init(key, ())?)),
            #[cfg(feature = "skein256")]
            PrimitiveId::Skein256 => {
                let out_len = match params {
                    DigestParams::Skein256 { out_len } => out_len,
                    DigestParams::Default => ordo_hashes::skein256::Params::default().out_len,
                };
                Ok(Self::Skein256(Hmac::init(key, ordo_hashes::skein256::Params { out_len })?))
            }
            _ => Err(Error::Arg),
        }
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.update(data),
            #[cfg(feature = "sha1")]
            Self::Sha1(h) => h.update(data),
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.update(data),
            #[cfg(feature = "skein256")]
            Self::Skein256(h) => h.update(data),
        }
    }

    /// The MAC length this context will produce.
    #[must_use]
    pub fn output_len(&self) -> usize {
        match self {
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.output_len(),
            #[cfg(feature = "sha1")]
            Self::Sha1(h) => h.output_len(),
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.output_len(),
            #[cfg(feature = "skein256")]
            Self::Skein256(h) => h.output_len(),
        }
    }

    /// Finalize, writing `self.output_len()` bytes to the front of `out`.
    ///
    /// # Errors
    /// Propagates the underlying `Hmac::finalize`'s error, which in practice never fires (see
    /// [`ordo_mac::Hmac::finalize`]'s doc comment).
    ///
    /// # Panics
    /// Panics if `out.len() < self.output_len()`.
    pub fn finalize(self, out: &mut [u8]) -> Result<()> {
        match self {
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.finalize(out),
            #[cfg(feature = "sha1")]
            Self::Sha1(h) => h.finalize(out),
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.finalize(out),
            #[cfg(feature = "skein256")]
            Self::Skein256(h) => h.finalize(out),
        }
    }

    /// Finalize and compare against `expected` in constant time, rather than finalizing into a
    /// caller-owned buffer and comparing with `==`.
    ///
    /// # Errors
    /// See [`HmacContext::finalize`].
    #[must_use]
    pub fn verify(self, expected: &[u8]) -> Result<bool> {
        match self {
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.verify(expected),
            #[cfg(feature = "sha1")]
            Self::Sha1(h) => h.verify(expected),
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.verify(expected),
            #[cfg(feature = "skein256")]
            Self::Skein256(h) => h.verify(expected),
        }
    }
}

/// Run one complete HMAC computation (spec §4.11's `ordo_hmac`), returning the number of bytes
/// written to the front of `out`.
///
/// # Errors
/// Returns [`Error::Arg`] if `hash` does not name a compiled-in hash.
///
/// # Panics
/// Panics if `out` is shorter than the selected hash's digest length.
pub fn ordo_hmac(
    hash: PrimitiveId,
    params: DigestParams,
    key: &[u8],
    input: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    let mut ctx = HmacContext::init(hash, key, params)?;
    ctx.update(input);
    let n = ctx.output_len();
    ctx.finalize(&mut out[..n])?;
    Ok(n)
}

/// Run one complete HMAC computation and compare it against `expected` in constant time,
/// returning `true` only if `expected` matches exactly (spec §5's constant-time-compare
/// requirement applied to tag verification).
///
/// # Errors
/// Returns [`Error::Arg`] if `hash` does not name a compiled-in hash.
#[must_use]
pub fn ordo_hmac_verify(
    hash: PrimitiveId,
    params: DigestParams,
    key: &[u8],
    input: &[u8],
    expected: &[u8],
) -> Result<bool> {
    let mut ctx = HmacContext::init(hash, key, params)?;
    ctx.update(input);
    ctx.verify(expected)
}

#[cfg(test)]
mod tests {
    use super::{ordo_hmac, ordo_hmac_verify};
    use crate::digest::DigestParams;
    use ordo_core::PrimitiveId;

    const KEY: [u8; 20] = [0x0bu8; 20];
    const TAG: [u8; 32] = [
        0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53, 0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b, 0xf1,
        0x2b, 0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7, 0x26, 0xe9, 0x37, 0x6c, 0x2e, 0x32,
        0xcf, 0xf7,
    ];

    #[test]
    fn hmac_sha256_rfc4231_test_1() {
        let mut out = [0u8; 32];
        ordo_hmac(PrimitiveId::Sha256, DigestParams::Default, &KEY, b"Hi There", &mut out)
            .unwrap();
        assert_eq!(out, TAG);
    }

    #[test]
    fn verify_accepts_correct_tag_and_rejects_tampered_one() {
        assert_eq!(
            ordo_hmac_verify(PrimitiveId::Sha256, DigestParams::Default, &KEY, b"Hi There", &TAG),
            Ok(true)
        );

        let mut wrong_tag = TAG;
        wrong_tag[0] ^= 0xff;
        assert_eq!(
            ordo_hmac_verify(
                PrimitiveId::Sha256,
                DigestParams::Default,
                &KEY,
                b"Hi There",
                &wrong_tag
            ),
            Ok(false)
        );
    }
}
