//! PKCS#7 padding and unpadding for block-cipher modes (spec §4.5.1, §6.2).
#![no_std]

/// Padding validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

/// Pad or unpad a message divided into fixed-size blocks.
pub trait Padding {
    /// Fill `block[pos..]` with padding bytes, given that `block[..pos]` holds message data.
    ///
    /// # Panics
    /// Panics if `pos >= block.len()`.
    fn pad(block: &mut [u8], pos: usize);

    /// Validate and strip the padding from a fully-decrypted final block.
    ///
    /// # Errors
    /// Returns [`Error`] if the block's trailing bytes are not a valid encoding of this padding
    /// scheme.
    fn unpad(block: &[u8]) -> Result<&[u8], Error>;
}

/// PKCS#7 padding (RFC 5652 §6.3): fill the remaining `n` bytes of the block with the byte value
/// `n`, where `1 <= n <= block_size`. A full extra block of padding (`n == block_size`) is
/// emitted when the message length is already a multiple of the block size.
#[derive(Debug, Clone, Copy)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(block: &mut [u8], pos: usize) {
        assert!(pos < block.len(), "pos is bigger than or equal to block size");
        let bs = block.len();
        assert!(bs <= 255, "block size is too big for PKCS#7");
        #[allow(clippy::cast_possible_truncation)]
        let n = (bs - pos) as u8;
        block[pos..].fill(n);
    }

    fn unpad(block: &[u8]) -> Result<&[u8], Error> {
        let bs = block.len();
        assert!(bs <= 255, "block size is too big for PKCS#7");
        let n = *block.last().ok_or(Error)?;
        if n == 0 || usize::from(n) > bs {
            return Err(Error);
        }
        let unpadded_len = bs - usize::from(n);
        if block[unpadded_len..].iter().any(|&b| b != n) {
            return Err(Error);
        }
        Ok(&block[..unpadded_len])
    }
}

#[cfg(test)]
mod tests {
    use super::{Padding, Pkcs7};

    #[test]
    fn pads_with_remaining_count() {
        let mut block = [0xffu8; 8];
        block[..4].copy_from_slice(b"test");
        Pkcs7::pad(&mut block, 4);
        assert_eq!(&block, b"test\x04\x04\x04\x04");
    }

    #[test]
    fn round_trip() {
        let mut block = [0u8; 8];
        block[..5].copy_from_slice(b"hello");
        Pkcs7::pad(&mut block, 5);
        assert_eq!(Pkcs7::unpad(&block).unwrap(), b"hello");
    }

    #[test]
    fn full_block_of_padding_when_message_is_exact() {
        // A mode finalizing on an exact multiple of the block size emits a full extra block of
        // padding, i.e. `pad` is called with `pos == 0` on an otherwise-empty block.
        let mut block = [0u8; 8];
        Pkcs7::pad(&mut block, 0);
        assert_eq!(block, [8u8; 8]);
        assert_eq!(Pkcs7::unpad(&block).unwrap(), b"");
    }

    #[test]
    fn rejects_zero_padding_byte() {
        let block = [1u8, 2, 3, 0];
        assert!(Pkcs7::unpad(&block).is_err());
    }

    #[test]
    fn rejects_inconsistent_padding_bytes() {
        let block = [1u8, 2, 3, 2]; // last byte says 2 bytes of padding, but block[2] != 2
        assert!(Pkcs7::unpad(&block).is_err());
    }

    #[test]
    fn rejects_oversized_padding_value() {
        let block = [0u8, 0, 0, 9];
        assert!(Pkcs7::unpad(&block).is_err());
    }
}
