//! ECB (spec §4.5.1): independent per-block encryption, no chaining, no IV.

use ordo_core::{BlockCipher, BlockMode, Error, Result};
use ordo_padding::{Padding, Pkcs7};

use crate::common::BlockBuf;

/// Extra initialization parameters for [`Ecb`].
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Whether PKCS#7 padding is applied on encrypt / validated on decrypt.
    pub padding: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self { padding: true }
    }
}

/// Electronic Codebook mode.
pub struct Ecb<C: BlockCipher> {
    cipher: C,
    encrypt: bool,
    padding: bool,
    buf: BlockBuf,
}

impl<C: BlockCipher> BlockMode<C> for Ecb<C> {
    type Params = Params;

    fn init(cipher: C, iv: &[u8], encrypt: bool, params: Params) -> Result<Self> {
        if !iv.is_empty() {
            return Err(Error::Arg);
        }
        Ok(Self { cipher, encrypt, padding: params.padding, buf: BlockBuf::new() })
    }

    fn update(&mut self, mut input: &[u8], output: &mut [u8]) -> Result<usize> {
        let bs = C::BLOCK_SIZE;
        // Decrypting with padding enabled must hold back one full block, since the true final
        // block is only known at `finalize` and needs PKCS#7 validation, not direct emission.
        let lookahead = self.padding && !self.encrypt;
        let mut out_pos = 0;

        while !input.is_empty() || self.buf.len == bs {
            if self.buf.len < bs {
                self.buf.fill(bs, &mut input);
            }
            if self.buf.len != bs {
                break;
            }
            if lookahead && input.is_empty() {
                break;
            }

            let block = self.buf.block_mut(bs);
            if self.encrypt {
                self.cipher.forward(block);
            } else {
                self.cipher.inverse(block);
            }
            output[out_pos..out_pos + bs].copy_from_slice(self.buf.block(bs));
            self.buf.reset();
            out_pos += bs;
        }
        Ok(out_pos)
    }

    fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        let bs = C::BLOCK_SIZE;
        if self.encrypt {
            if self.padding {
                let buf_len = self.buf.len;
                Pkcs7::pad(self.buf.block_mut(bs), buf_len);
                self.cipher.forward(self.buf.block_mut(bs));
                output[..bs].copy_from_slice(self.buf.block(bs));
                self.buf.reset();
                Ok(bs)
            } else if self.buf.len == 0 {
                Ok(0)
            } else {
                Err(Error::Leftover(self.buf.len))
            }
        } else if self.padding {
            if self.buf.len == 0 {
                return Err(Error::Arg);
            }
            if self.buf.len != bs {
                return Err(Error::Leftover(self.buf.len));
            }
            self.cipher.inverse(self.buf.block_mut(bs));
            let unpadded = Pkcs7::unpad(self.buf.block(bs)).map_err(|_| Error::Padding)?;
            let n = unpadded.len();
            output[..n].copy_from_slice(unpadded);
            self.buf.reset();
            Ok(n)
        } else if self.buf.len == 0 {
            Ok(0)
        } else {
            Err(Error::Leftover(self.buf.len))
        }
    }
}
