//! [`EncStreamContext`]: a stream cipher selected at runtime by [`PrimitiveId`] (spec §4.3,
//! §4.11).

use ordo_core::{Error, PrimitiveId, Result, StreamCipher};

#[cfg(feature = "rc4")]
use ordo_stream::Rc4;

/// Extra initialization parameters for [`EncStreamContext::init`].
#[derive(Debug, Clone, Copy)]
pub enum StreamCipherParams {
    /// RC4's keystream-drop count.
    #[cfg(feature = "rc4")]
    Rc4(ordo_stream::rc4::Params),
}

#[cfg(feature = "rc4")]
impl Default for StreamCipherParams {
    fn default() -> Self {
        Self::Rc4(Default::default())
    }
}

/// A keyed stream-cipher state, selected at runtime.
pub enum EncStreamContext {
    /// RC4.
    #[cfg(feature = "rc4")]
    Rc4(Rc4),
}

impl EncStreamContext {
    /// Initialize a stream-cipher context for `id`.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `id` does not name a compiled-in stream cipher, or
    /// [`Error::KeyLen`] if `key` is invalid for it.
    pub fn init(id: PrimitiveId, key: &[u8], params: StreamCipherParams) -> Result<Self> {
        match (id, params) {
            #[cfg(feature = "rc4")]
            (PrimitiveId::Rc4, StreamCipherParams::Rc4(params)) => Ok(Self::Rc4(Rc4::init(key, params)?)),
            _ => Err(Error::Arg),
        }
    }

    /// XOR the next `buf.len()` keystream bytes into `buf` in place.
    pub fn apply(&mut self, buf: &mut [u8]) {
        match self {
            #[cfg(feature = "rc4")]
            Self::Rc4(c) => c.apply(buf),
        }
    }
}

/// Run one in-place stream-cipher encryption (spec §4.11's `ordo_enc_stream`).
///
/// # Errors
/// See [`EncStreamContext::init`].
pub fn ordo_enc_stream(cipher: PrimitiveId, params: StreamCipherParams, key: &[u8], inout: &mut [u8]) -> Result<()> {
    let mut ctx = EncStreamContext::init(cipher, key, params)?;
    ctx.apply(inout);
    Ok(())
}
