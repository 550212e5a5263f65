//! CBC (spec §4.5.2): each block is chained against the previous ciphertext block.

use ordo_core::{BlockCipher, BlockMode, Error, Result};
use ordo_padding::{Padding, Pkcs7};

use crate::common::{zero_padded_iv, BlockBuf, MAX_BLOCK_SIZE};

/// Extra initialization parameters for [`Cbc`].
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

/// Cipher Block Chaining mode.
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    encrypt: bool,
    padding: bool,
    chain: [u8; MAX_BLOCK_SIZE],
    buf: BlockBuf,
}

impl<C: BlockCipher> Cbc<C> {
    /// Run one block through the cipher, chaining against and updating `self.chain` in place.
    fn process_block(&mut self) {
        let bs = C::BLOCK_SIZE;
        if self.encrypt {
            let block = self.buf.block_mut(bs);
            for i in 0..bs {
                block[i] ^= self.chain[i];
            }
            self.cipher.forward(block);
            self.chain[..bs].copy_from_slice(self.buf.block(bs));
        } else {
            let mut original = [0u8; MAX_BLOCK_SIZE];
            original[..bs].copy_from_slice(self.buf.block(bs));
            let block = self.buf.block_mut(bs);
            self.cipher.inverse(block);
            for i in 0..bs {
                block[i] ^= self.chain[i];
            }
            self.chain[..bs].copy_from_slice(&original[..bs]);
        }
    }
}

impl<C: BlockCipher> BlockMode<C> for Cbc<C> {
    type Params = Params;

    fn init(cipher: C, iv: &[u8], encrypt: bool, params: Params) -> Result<Self> {
        if iv.len() != C::BLOCK_SIZE {
            return Err(Error::Arg);
        }
        Ok(Self { cipher, encrypt, padding: params.padding, chain: zero_padded_iv(iv), buf: BlockBuf::new() })
    }

    fn update(&mut self, mut input: &[u8], output: &mut [u8]) -> Result<usize> {
        let bs = C::BLOCK_SIZE;
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

            self.process_block();
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
                self.process_block();
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
            self.process_block();
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
