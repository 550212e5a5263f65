//! CFB (spec §4.5.5): the keystream block is fed back from the ciphertext (encrypt) or the
//! original ciphertext (decrypt), so unlike OFB the keystream does depend on the data stream.

use ordo_core::{BlockCipher, BlockMode, Error, Result};

use crate::common::{zero_padded_iv, MAX_BLOCK_SIZE};

/// Cipher Feedback mode. Takes no extra parameters.
pub struct Cfb<C: BlockCipher> {
    cipher: C,
    encrypt: bool,
    state: [u8; MAX_BLOCK_SIZE],
    pos: usize,
}

impl<C: BlockCipher> BlockMode<C> for Cfb<C> {
    type Params = ();

    fn init(cipher: C, iv: &[u8], encrypt: bool, (): ()) -> Result<Self> {
        if iv.len() != C::BLOCK_SIZE {
            return Err(Error::Arg);
        }
        let mut state = zero_padded_iv(iv);
        cipher.forward(&mut state[..C::BLOCK_SIZE]);
        Ok(Self { cipher, encrypt, state, pos: 0 })
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let bs = C::BLOCK_SIZE;
        for (i, &in_byte) in input.iter().enumerate() {
            let out_byte = in_byte ^ self.state[self.pos];
            self.state[self.pos] = if self.encrypt { out_byte } else { in_byte };
            output[i] = out_byte;
            self.pos += 1;
            if self.pos == bs {
                self.cipher.forward(&mut self.state[..bs]);
                self.pos = 0;
            }
        }
        Ok(input.len())
    }

    fn finalize(&mut self, _output: &mut [u8]) -> Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::Cfb;
    use ordo_ciphers::Aes;
    use ordo_core::{BlockCipher, BlockMode};

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let key = [0xaau8; 16];
        let iv = [0xbbu8; 16];
        let plaintext = b"CFB turns a block cipher into a self-synchronizing stream cipher.";

        let enc_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut enc: Cfb<Aes> = Cfb::init(enc_cipher, &iv, true, ()).unwrap();
        let mut ciphertext = [0u8; 65];
        enc.update(plaintext, &mut ciphertext).unwrap();

        let dec_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut dec: Cfb<Aes> = Cfb::init(dec_cipher, &iv, false, ()).unwrap();
        let mut recovered = [0u8; 65];
        dec.update(&ciphertext, &mut recovered).unwrap();

        assert_eq!(&recovered[..], &plaintext[..]);
    }

    #[test]
    fn feedback_means_one_byte_at_a_time_still_round_trips() {
        let key = [0xccu8; 16];
        let iv = [0xddu8; 16];
        let plaintext = b"byte by byte";

        let enc_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut enc: Cfb<Aes> = Cfb::init(enc_cipher, &iv, true, ()).unwrap();
        let mut ciphertext = [0u8; 12];
        for (i, &b) in plaintext.iter().enumerate() {
            enc.update(&[b], &mut ciphertext[i..i + 1]).unwrap();
        }

        let dec_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut dec: Cfb<Aes> = Cfb::init(dec_cipher, &iv, false, ()).unwrap();
        let mut recovered = [0u8; 12];
        dec.update(&ciphertext, &mut recovered).unwrap();

        assert_eq!(&recovered[..], &plaintext[..]);
    }

    #[test]
    fn rejects_wrong_iv_length() {
        let cipher = Aes::init(&[0u8; 16], Default::default()).unwrap();
        let result: Result<Cfb<Aes>, _> = Cfb::init(cipher, &[0u8; 15], true, ());
        assert!(result.is_err());
    }
}
