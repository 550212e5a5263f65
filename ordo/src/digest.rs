//! [`DigestContext`]: a tagged union over every [`ordo_core::Hash`] impl (spec §4.6).
//!
//! The C original holds an opaque state pointer plus a function table selected by
//! `PrimitiveId`; spec §9 asks for that to become a tagged variant instead, one arm per
//! compiled-in hash.

use ordo_core::{Error, Hash, PrimitiveId, Result};

#[cfg(feature = "md5")]
use ordo_hashes::Md5;
#[cfg(feature = "sha1")]
use ordo_hashes::Sha1;
#[cfg(feature = "sha256")]
use ordo_hashes::Sha256;
#[cfg(feature = "skein256")]
use ordo_hashes::Skein256;

/// Extra initialization parameters for [`DigestContext::init`].
///
/// Every hash but Skein-256 takes no parameters; `Skein256`'s configured output length is the
/// one case worth naming explicitly rather than burying behind a `()`.
#[derive(Debug, Clone, Copy)]
pub enum DigestParams {
    /// No extra parameters (MD5, SHA-1, SHA-256).
    Default,
    /// Skein-256's configured digest length, in bytes.
    #[cfg(feature = "skein256")]
    Skein256 {
        /// Output length in bytes.
        out_len: usize,
    },
}

impl Default for DigestParams {
    fn default() -> Self {
        Self::Default
    }
}

/// A running digest computation over whichever hash [`PrimitiveId`] selected at [`Self::init`].
pub enum DigestContext {
    /// MD5.
    #[cfg(feature = "md5")]
    Md5(Md5),
    /// SHA-1.
    #[cfg(feature = "sha1")]
    Sha1(Sha1),
    /// SHA-256.
    #[cfg(feature = "sha256")]
    Sha256(Sha256),
    /// Skein-256.
    #[cfg(feature = "skein256")]
    Skein256(Skein256),
}

impl DigestContext {
    /// Initialize a digest context for `id`.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `id` does not name a compiled-in hash, or if `params` is
    /// rejected by that hash's `init` (e.g. Skein-256's `out_len == 0`).
    pub fn init(id: PrimitiveId, params: DigestParams) -> Result<Self> {
        match id {
            #[cfg(feature = "md5")]
            PrimitiveId::Md5 => Ok(Self::Md5(Md5::init(())?)),
            #[cfg(feature = "sha1")]
            PrimitiveId::Sha1 => Ok(Self::Sha1(Sha1::init(())?)),
            #[cfg(feature = "sha256")]
            PrimitiveId::Sha256 => Ok(Self::Sha256(Sha256::init(())?)),
            #[cfg(feature = "skein256")]
            PrimitiveId::Skein256 => {
                let out_len = match params {
                    DigestParams::Skein256 { out_len } => out_len,
                    DigestParams::Default => ordo_hashes::skein256::Params::default().out_len,
                };
                Ok(Self::Skein256(Skein256::init(ordo_hashes::skein256::Params { out_len })?))
            }
            _ => Err(Error::Arg),
        }
    }

    /// Absorb more input.
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

    /// The digest length this context will produce.
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
    /// # Panics
    /// Panics if `out.len() < self.output_len()`.
    pub fn finalize(self, out: &mut [u8]) {
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
}

/// Run one complete digest computation (spec §4.11's `ordo_digest`), returning the number of
/// bytes written to the front of `out`.
///
/// # Errors
/// Returns [`Error::Arg`] if `hash` does not name a compiled-in hash or `params` is invalid.
///
/// # Panics
/// Panics if `out` is shorter than the selected hash's digest length.
pub fn ordo_digest(hash: PrimitiveId, params: DigestParams, input: &[u8], out: &mut [u8]) -> Result<usize> {
    let mut ctx = DigestContext::init(hash, params)?;
    ctx.update(input);
    let n = ctx.output_len();
    ctx.finalize(&mut out[..n]);
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::{ordo_digest, DigestParams};
    use ordo_core::PrimitiveId;

    #[test]
    fn sha256_empty_input() {
        let mut out = [0u8; 32];
        let n = ordo_digest(PrimitiveId::Sha256, DigestParams::Default, b"", &mut out).unwrap();
        assert_eq!(n, 32);
        assert_eq!(
            out,
            [
                0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
                0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
                0x78, 0x52, 0xb8, 0x55,
            ]
        );
    }

    #[test]
    fn sha256_abc() {
        let mut out = [0u8; 32];
        ordo_digest(PrimitiveId::Sha256, DigestParams::Default, b"abc", &mut out).unwrap();
        assert_eq!(
            out,
            [
                0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
                0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
                0xf2, 0x00, 0x15, 0xad,
            ]
        );
    }

    #[test]
    fn unavailable_primitive_is_rejected() {
        let mut out = [0u8; 16];
        let result = ordo_digest(PrimitiveId::Aes, DigestParams::Default, b"x", &mut out);
        assert!(result.is_err());
    }
}
