//! [`EncBlockContext`]: a block cipher plus a mode of operation (spec §4.5, §4.11), composed
//! exactly as spec §9 directs ("Ownership: the high-level `EncBlockContext` owns both").
//!
//! Cipher selection is the outer tag, since block size (and therefore every buffer the mode
//! layer sizes against it) is fixed per cipher type, not per instance. Mode selection is an
//! inner tag generic over whichever concrete cipher the outer tag picked.

use ordo_core::{BlockCipher, BlockMode, Error, PrimitiveId, Result};
use ordo_modes::{Cbc, Cfb, Ctr, Ecb, Ofb};

#[cfg(feature = "aes")]
use ordo_ciphers::Aes;
#[cfg(feature = "nullcipher")]
use ordo_ciphers::NullCipher;
#[cfg(feature = "threefish256")]
use ordo_ciphers::Threefish256;

/// Extra initialization parameters for [`EncBlockContext::init`]'s cipher half.
#[derive(Debug, Clone, Copy)]
pub enum BlockCipherParams {
    /// NullCipher takes no parameters.
    #[cfg(feature = "nullcipher")]
    NullCipher,
    /// AES's optional non-default round count.
    #[cfg(feature = "aes")]
    Aes(ordo_ciphers::aes::Params),
    /// Threefish-256's 128-bit tweak.
    #[cfg(feature = "threefish256")]
    Threefish256([u8; 16]),
}

/// Extra initialization parameters for [`EncBlockContext::init`]'s mode half.
#[derive(Debug, Clone, Copy)]
pub enum ModeParams {
    /// ECB/CBC's PKCS#7-padding toggle.
    Padded {
        /// Whether padding is applied on encrypt / validated on decrypt.
        padding: bool,
    },
    /// CTR/CFB/OFB take no extra parameters.
    Unpadded,
}

impl Default for ModeParams {
    fn default() -> Self {
        Self::Padded { padding: true }
    }
}

/// The mode half of an [`EncBlockContext`], generic over whichever concrete cipher type the
/// outer tag selected.
enum ModeState<C: BlockCipher> {
    Ecb(Ecb<C>),
    Cbc(Cbc<C>),
    Ctr(Ctr<C>),
    Cfb(Cfb<C>),
    Ofb(Ofb<C>),
}

impl<C: BlockCipher> ModeState<C> {
    fn init(mode: PrimitiveId, cipher: C, iv: &[u8], encrypt: bool, params: ModeParams) -> Result<Self> {
        match (mode, params) {
            (PrimitiveId::Ecb, ModeParams::Padded { padding }) => {
                Ok(Self::Ecb(Ecb::init(cipher, iv, encrypt, ordo_modes::ecb::Params { padding })?))
            }
            (PrimitiveId::Ecb, ModeParams::Unpadded) => {
                Ok(Self::Ecb(Ecb::init(cipher, iv, encrypt, ordo_modes::ecb::Params { padding: false })?))
            }
            (PrimitiveId::Cbc, ModeParams::Padded { padding }) => {
                Ok(Self::Cbc(Cbc::init(cipher, iv, encrypt, ordo_modes::cbc::Params { padding })?))
            }
            (PrimitiveId::Cbc, ModeParams::Unpadded) => {
                Ok(Self::Cbc(Cbc::init(cipher, iv, encrypt, ordo_modes::cbc::Params { padding: false })?))
            }
            (PrimitiveId::Ctr, _) => Ok(Self::Ctr(Ctr::init(cipher, iv, encrypt, ())?)),
            (PrimitiveId::Cfb, _) => Ok(Self::Cfb(Cfb::init(cipher, iv, encrypt, ())?)),
            (PrimitiveId::Ofb, _) => Ok(Self::Ofb(Ofb::init(cipher, iv, encrypt, ())?)),
            _ => Err(Error::Arg),
        }
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        match self {
            Self::Ecb(m) => m.update(input, output),
            Self::Cbc(m) => m.update(input, output),
            Self::Ctr(m) => m.update(input, output),
            Self::Cfb(m) => m.update(input, output),
            Self::Ofb(m) => m.update(input, output),
        }
    }

    fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        match self {
            Self::Ecb(m) => m.finalize(output),
            Self::Cbc(m) => m.finalize(output),
            Self::Ctr(m) => m.finalize(output),
            Self::Cfb(m) => m.finalize(output),
            Self::Ofb(m) => m.finalize(output),
        }
    }
}

/// A block cipher plus a mode of operation, selected at runtime by a pair of [`PrimitiveId`]s.
pub struct EncBlockContext(Inner);

enum Inner {
    #[cfg(feature = "nullcipher")]
    NullCipher(ModeState<NullCipher>),
    #[cfg(feature = "aes")]
    Aes(ModeState<Aes>),
    #[cfg(feature = "threefish256")]
    Threefish256(ModeState<Threefish256>),
}

impl EncBlockContext {
    /// Initialize a cipher+mode context.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `cipher`/`mode` don't name compiled-in primitives, if
    /// `cipher_params`/`mode_params` don't match the primitive they're paired with, or if the
    /// underlying cipher/mode `init` rejects `key`/`iv`.
    pub fn init(
        cipher: PrimitiveId,
        cipher_params: BlockCipherParams,
        mode: PrimitiveId,
        mode_params: ModeParams,
        encrypt: bool,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        match (cipher, cipher_params) {
            #[cfg(feature = "nullcipher")]
            (PrimitiveId::NullCipher, BlockCipherParams::NullCipher) => {
                let c = NullCipher::init(key, ())?;
                Ok(Self(Inner::NullCipher(ModeState::init(mode, c, iv, encrypt, mode_params)?)))
            }
            #[cfg(feature = "aes")]
            (PrimitiveId::Aes, BlockCipherParams::Aes(params)) => {
                let c = Aes::init(key, params)?;
                Ok(Self(Inner::Aes(ModeState::init(mode, c, iv, encrypt, mode_params)?)))
            }
            #[cfg(feature = "threefish256")]
            (PrimitiveId::Threefish256, BlockCipherParams::Threefish256(tweak)) => {
                let c = Threefish256::init(key, tweak)?;
                Ok(Self(Inner::Threefish256(ModeState::init(mode, c, iv, encrypt, mode_params)?)))
            }
            _ => Err(Error::Arg),
        }
    }

    /// Feed `input` through the cipher+mode, writing to the front of `output`; see
    /// [`ordo_core::BlockMode::update`].
    ///
    /// # Errors
    /// See [`ordo_core::BlockMode::update`].
    pub fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        match &mut self.0 {
            #[cfg(feature = "nullcipher")]
            Inner::NullCipher(m) => m.update(input, output),
            #[cfg(feature = "aes")]
            Inner::Aes(m) => m.update(input, output),
            #[cfg(feature = "threefish256")]
            Inner::Threefish256(m) => m.update(input, output),
        }
    }

    /// Flush buffered input; see [`ordo_core::BlockMode::finalize`].
    ///
    /// # Errors
    /// See [`ordo_core::BlockMode::finalize`].
    pub fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        match &mut self.0 {
            #[cfg(feature = "nullcipher")]
            Inner::NullCipher(m) => m.finalize(output),
            #[cfg(feature = "aes")]
            Inner::Aes(m) => m.finalize(output),
            #[cfg(feature = "threefish256")]
            Inner::Threefish256(m) => m.finalize(output),
        }
    }
}

/// Run one complete block-cipher-mode operation (spec §4.11's `ordo_enc_block`): init, feed all
/// of `input` through `update`, then `finalize`, returning the total bytes written to `output`.
///
/// `output` must be sized for at least `input.len()` plus one block of padding overhead.
///
/// # Errors
/// See [`EncBlockContext::init`], [`EncBlockContext::update`], [`EncBlockContext::finalize`].
#[allow(clippy::too_many_arguments)]
pub fn ordo_enc_block(
    cipher: PrimitiveId,
    cipher_params: BlockCipherParams,
    mode: PrimitiveId,
    mode_params: ModeParams,
    encrypt: bool,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<usize> {
    let mut ctx = EncBlockContext::init(cipher, cipher_params, mode, mode_params, encrypt, key, iv)?;
    let n = ctx.update(input, output)?;
    let m = ctx.finalize(&mut output[n..])?;
    Ok(n + m)
}
