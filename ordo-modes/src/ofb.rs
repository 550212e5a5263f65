//! OFB (spec §4.5.4): the keystream is generated by repeatedly re-encrypting itself, independent
//! of the plaintext/ciphertext; encryption and decryption are the same operation.

use ordo_core::{BlockCipher, BlockMode, Error, Result};
use ordo_inout::InOutBuf;

use crate::common::{zero_padded_iv, MAX_BLOCK_SIZE};

/// Output Feedback mode. Takes no extra parameters.
pub struct Ofb<C: BlockCipher> {
    cipher: C,
    keystream: [u8; MAX_BLOCK_SIZE],
    pos: usize,
}

impl<C: BlockCipher> BlockMode<C> for Ofb<C> {
    type Params = ();

    fn init(cipher: C, iv: &[u8], _encrypt: bool, (): ()) -> Result<Self> {
        if iv.len() != C::BLOCK_SIZE {
            return Err(Error::Arg);
        }
        let mut keystream = zero_padded_iv(iv);
        cipher.forward(&mut keystream[..C::BLOCK_SIZE]);
        Ok(Self { cipher, keystream, pos: 0 })
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
                self.cipher.forward(&mut self.keystream[..bs]);
                self.pos = 0;
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
    use super::Ofb;
    use ordo_ciphers::Aes;
    use ordo_core::{BlockCipher, BlockMode};

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let key = [0x66u8; 16];
        let iv = [0x77u8; 16];
        let plaintext = b"OFB self-feeds its keystream, independent of the data stream.";

        let enc_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut enc: Ofb<Aes> = Ofb::init(enc_cipher, &iv, true, ()).unwrap();
        let mut ciphertext = [0u8; 63];
        enc.update(plaintext, &mut ciphertext).unwrap();

        let dec_cipher = Aes::init(&key, Default::default()).unwrap();
        let mut dec: Ofb<Aes> = Ofb::init(dec_cipher, &iv, false, ()).unwrap();
        let mut recovered = [0u8; 63];
        dec.update(&ciphertext, &mut recovered).unwrap();

        assert_eq!(&recovered[..], &plaintext[..]);
    }

    #[test]
    fn keystream_is_independent_of_plaintext() {
        let key = [0x88u8; 16];
        let iv = [0x99u8; 16];

        let cipher_a = Aes::init(&key, Default::default()).unwrap();
        let mut a: Ofb<Aes> = Ofb::init(cipher_a, &iv, true, ()).unwrap();
        let mut ks_a = [0u8; 32];
        a.update(&[0u8; 32], &mut ks_a).unwrap();

        let cipher_b = Aes::init(&key, Default::default()).unwrap();
        let mut b: Ofb<Aes> = Ofb::init(cipher_b, &iv, true, ()).unwrap();
        let mut ks_b = [0u8; 32];
        b.update(&[0xffu8; 32], &mut ks_b).unwrap();

        // Same keystream applied to different plaintexts: XOR the two ciphertexts back together
        // to recover the (different) plaintexts' XOR, proving the keystream itself matched.
        for i in 0..32 {
            assert_eq!(ks_a[i] ^ ks_b[i], 0u8 ^ 0xffu8);
        }
    }

    #[test]
    fn rejects_wrong_iv_length() {
        let cipher = Aes::init(&[0u8; 16], Default::default()).unwrap();
        let result: Result<Ofb<Aes>, _> = Ofb::init(cipher, &[0u8; 15], true, ());
        assert!(result.is_err());
    }
}
