//! Shared buffering helpers for the mode implementations (spec §4.5's common init contract).

/// Largest block size any `ordo-ciphers` primitive currently reports (Threefish-256: 32 bytes).
/// Fixed-size internal buffers are sized to this bound rather than `C::BLOCK_SIZE` directly,
/// since a trait's associated const cannot size an array on stable Rust.
pub(crate) const MAX_BLOCK_SIZE: usize = 32;

/// Zero-pad `iv` into a full `MAX_BLOCK_SIZE` block (spec §4.5: "stores the IV (zero-padded to
/// one block if shorter)").
pub(crate) fn zero_padded_iv(iv: &[u8]) -> [u8; MAX_BLOCK_SIZE] {
    let mut block = [0u8; MAX_BLOCK_SIZE];
    block[..iv.len()].copy_from_slice(iv);
    block
}

/// An accumulator for one block's worth of bytes, used by the padded modes (ECB, CBC) to buffer
/// input until a full block (or the final, possibly short, block) is available.
#[derive(Clone, Copy)]
pub(crate) struct BlockBuf {
    bytes: [u8; MAX_BLOCK_SIZE],
    pub(crate) len: usize,
}

impl BlockBuf {
    pub(crate) fn new() -> Self {
        Self { bytes: [0u8; MAX_BLOCK_SIZE], len: 0 }
    }

    /// Copy as much of `*input` as fits before `self.len` reaches `block_size`, advancing
    /// `*input` past the bytes consumed.
    pub(crate) fn fill(&mut self, block_size: usize, input: &mut &[u8]) {
        let space = block_size - self.len;
        let take = space.min(input.len());
        self.bytes[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        *input = &input[take..];
    }

    pub(crate) fn block(&self, block_size: usize) -> &[u8] {
        &self.bytes[..block_size]
    }

    pub(crate) fn block_mut(&mut self, block_size: usize) -> &mut [u8] {
        &mut self.bytes[..block_size]
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
    }
}
