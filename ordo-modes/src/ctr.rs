//! CTR (spec §4.5.3): the cipher encrypts a counter block to produce a keystream; encryption and
//! decryption are the same operation.

use ordo_bytes::increment_be;
use ordo_core::{BlockCipher, BlockMode, Error, Result};
use ordo_inout::InOutBuf;

use crate::common::{zero_padded_iv, MAX_BLOCK_SIZE};

/// Counter mode. Takes no extra parameters.
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    counter: [u8; MAX_BLOCK_SIZE],
    keystream: [u8; MAX_BLOCK_SIZE],
    pos: usize,
}

impl<C: BlockCipher> Ctr<C> {
    fn advance(&mut self) {
        let bs = C::BLOCK_SIZE;
        increment_be(&mut self.counter[..bs]);
        self.keystream[..bs].copy_from_slice(&self.counter[..bs]);
        self.cipher.forward(&mut self.keystream[..bs]);
        self.pos = 0;
    }
}

impl<C: BlockCipher> BlockMode<C> for Ctr<C> {
    type Params = ();

    fn init(cipher: C, iv: &[u8], _encrypt: bool, (): ()) -> Result<Self> {
        let bs = C::BLOCK_SIZE;
        if bs < 8 || iv.len() != bs - 8 {
            return Err(Error::Arg);
        }
        let counter = zero_padded_iv(iv);
        let mut keystream = counter;
        cipher.forward(&mut keystream[..bs]);
        Ok(Self { cipher, counter, keystream, pos: 0 })
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let bs = C::BLOCK_SIZE;
        let mut remaining = InOutBuf::buffer_to_buffer(input, &mut output[..input.len()]);
        let total = remaining.len();

        while !remaining.is_empty() {
            let avail = bs - self.pos;
            let take = avail.min(remaining.len());
            let (mut head, tail) = remaining.split_at(take);
            head.xor_into_out(&self.keystream[self.pos..self.pos + take]);
            self.pos += take;
            remaining = tail;
            if self.pos == bs {
                self.advance();
            }
        }
        Ok(total)
    }

    fn finalize(&mut self, _output: &mut [u8]) -> Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::Ctr;
    use ordo_ciphers::Aes;
    use ordo_core::{BlockCipher, BlockMode};

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 8]; // block_size(16) - 8
        let plaintext = b"CTR mode is just a keystream generator built from a block cipher.";

        let enc_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut enc: Ctr<Aes> = Ctr::init(enc_cipher, &iv, true, ()).unwrap();
        let mut ciphertext = [0u8; 67];
        enc.update(plaintext, &mut ciphertext[..plaintext.len()]).unwrap();

        let dec_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut dec: Ctr<Aes> = Ctr::init(dec_cipher, &iv, false, ()).unwrap();
        let mut recovered = [0u8; 67];
        dec.update(&ciphertext, &mut recovered).unwrap();

        assert_eq!(&recovered[..], &plaintext[..]);
    }

    #[test]
    fn keystream_advances_across_block_boundary() {
        let key = [0x33u8; 16];
        let iv = [0u8; 8];
        let cipher = Aes::init(&key, Default::default()).unwrap();
        let mut ctr: Ctr<Aes> = Ctr::init(cipher, &iv, true, ()).unwrap();
        let zeros = [0u8; 20];
        let mut keystream = [0u8; 20];
        ctr.update(&zeros, &mut keystream).unwrap();
        // Bytes 16..20 come from the second counter value's keystream, which must not equal the
        // first four bytes of the first block's keystream.
        assert_ne!(keystream[16..20], keystream[0..4]);
    }

    #[test]
    fn rejects_wrong_iv_length() {
        let cipher = Aes::init(&[0u8; 16], Default::default()).unwrap();
        let result: Result<Ctr<Aes>, _> = Ctr::init(cipher, &[0u8; 16], true, ());
        assert!(result.is_err());
    }

    #[test]
    fn finalize_never_writes_output() {
        let cipher = Aes::init(&[0u8; 16], Default::default()).unwrap();
        let mut ctr: Ctr<Aes> = Ctr::init(cipher, &[0u8; 8], true, ()).unwrap();
        let mut out = [0u8; 16];
        assert_eq!(ctr.finalize(&mut out).unwrap(), 0);
    }
}
