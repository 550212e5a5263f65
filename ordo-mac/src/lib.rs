//! HMAC (RFC 2104), generic over any [`ordo_core::Hash`] (spec §4.7).
#![no_std]

use ordo_core::{Hash, Result};
use ordo_ctutils::ctcmp;
use zeroize::Zeroize;

/// Upper bound on the block size of any hash this toolkit implements (MD5/SHA-1/SHA-256 use 64,
/// Skein-256 uses 32). Sized generously so a new hash with a larger block doesn't silently
/// truncate the key.
const MAX_BLOCK_SIZE: usize = 128;

/// Upper bound on the digest length of any hash this toolkit implements.
const MAX_OUTPUT_SIZE: usize = 64;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A running HMAC computation over hash `H`.
///
/// Per spec §4.7: `key` is expanded to the hash's block size (zero-padded if short, hashed down
/// if long), XORed with the inner/outer pad constants, and the outer pad is retained until
/// [`Hmac::finalize`] composes the two passes.
///
/// `Clone` lets a caller key the MAC once and fork a fresh copy per iteration (spec §4.8's PBKDF2
/// optimization note: the password-keyed inner state is reusable across iterations).
#[derive(Clone)]
pub struct Hmac<H: Hash> {
    inner: H,
    outer_key_pad: [u8; MAX_BLOCK_SIZE],
    block_size: usize,
    params: H::Params,
}

impl<H: Hash> Hmac<H> {
    /// Key the MAC and absorb the inner pad, ready for [`Hmac::update`].
    ///
    /// # Errors
    /// Propagates [`ordo_core::Error::Arg`] from `H::init` if `params` is invalid.
    ///
    /// # Panics
    /// Panics if `H::BLOCK_SIZE` exceeds this crate's internal buffer bound (128 bytes), which
    /// is larger than every block size this toolkit's hashes use.
    pub fn init(key: &[u8], params: H::Params) -> Result<Self> {
        let block_size = H::BLOCK_SIZE;
        assert!(block_size <= MAX_BLOCK_SIZE, "hash block size exceeds HMAC's internal bound");

        let mut key_block = [0u8; MAX_BLOCK_SIZE];
        if key.len() <= block_size {
            key_block[..key.len()].copy_from_slice(key);
        } else {
            let mut hasher = H::init(params.clone())?;
            hasher.update(key);
            let out_len = hasher.output_len();
            let mut digest = [0u8; MAX_OUTPUT_SIZE];
            hasher.finalize(&mut digest[..out_len]);
            key_block[..out_len].copy_from_slice(&digest[..out_len]);
            digest.zeroize();
        }

        let mut inner_key_pad = [0u8; MAX_BLOCK_SIZE];
        let mut outer_key_pad = [0u8; MAX_BLOCK_SIZE];
        for i in 0..block_size {
            inner_key_pad[i] = key_block[i] ^ IPAD;
            outer_key_pad[i] = key_block[i] ^ OPAD;
        }
        key_block.zeroize();

        let mut inner = H::init(params.clone())?;
        inner.update(&inner_key_pad[..block_size]);
        inner_key_pad.zeroize();

        Ok(Self { inner, outer_key_pad, block_size, params })
    }

    /// Absorb more message bytes into the inner hash.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// The MAC length this instance will produce (equal to the underlying hash's digest length).
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.inner.output_len()
    }

    /// Finalize: compose the outer pass over the outer pad and the inner digest, writing
    /// `self.output_len()` bytes to the front of `out`.
    ///
    /// # Errors
    /// Propagates [`ordo_core::Error::Arg`] from the outer `H::init`, which can only occur if
    /// `params` was already rejected at [`Hmac::init`], so this never actually fails in practice.
    ///
    /// # Panics
    /// Panics if `out.len() < self.output_len()`.
    pub fn finalize(self, out: &mut [u8]) -> Result<()> {
        let inner_len = self.inner.output_len();
        let mut inner_digest = [0u8; MAX_OUTPUT_SIZE];
        self.inner.clone().finalize(&mut inner_digest[..inner_len]);

        let mut outer = H::init(self.params.clone())?;
        outer.update(&self.outer_key_pad[..self.block_size]);
        outer.update(&inner_digest[..inner_len]);
        outer.finalize(out);

        inner_digest.zeroize();
        Ok(())
    }

    /// Finalize and compare the result against `expected` in constant time (spec §5: "key
    /// comparisons use the supplied constant-time compare").
    ///
    /// Prefer this to computing the tag with [`Hmac::finalize`] and comparing with `==`, which
    /// can leak the position of the first mismatching byte through timing.
    ///
    /// # Errors
    /// See [`Hmac::finalize`].
    #[must_use]
    pub fn verify(self, expected: &[u8]) -> Result<bool> {
        let out_len = self.output_len();
        let mut computed = [0u8; MAX_OUTPUT_SIZE];
        self.finalize(&mut computed[..out_len])?;
        let matches = expected.len() == out_len && ctcmp(expected, &computed[..out_len]);
        computed.zeroize();
        Ok(matches)
    }
}

impl<H: Hash> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.outer_key_pad.zeroize();
    }
}

// `opaque_debug::impl_opaque_debug!` only targets concrete types; `Hmac` is generic over `H`, so
// the same opaque-by-design contract is hand-written here instead.
impl<H: Hash> core::fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Hmac { ... }")
    }
}
