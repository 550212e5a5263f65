//! The identity permutation, for debugging mode and harness plumbing only (spec §4.2).

use ordo_core::{query_from_sizes, BlockCipher, Error, Query, Result};

/// A block cipher that does nothing. Only the empty key is accepted, so it can never be reached
/// by accident through a real key-derivation path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCipher;

impl BlockCipher for NullCipher {
    type Params = ();

    const BLOCK_SIZE: usize = 16;

    fn init(key: &[u8], (): ()) -> Result<Self> {
        if key.is_empty() {
            Ok(Self)
        } else {
            Err(Error::KeyLen)
        }
    }

    fn forward(&self, _block: &mut [u8]) {}

    fn inverse(&self, _block: &mut [u8]) {}

    fn query(tag: Query, suggested: usize) -> Option<usize> {
        match tag {
            Query::KeyLen => query_from_sizes(&[0], suggested),
            Query::BlockSize => query_from_sizes(&[Self::BLOCK_SIZE], suggested),
            Query::DigestLen | Query::IvLen => None,
        }
    }
}
