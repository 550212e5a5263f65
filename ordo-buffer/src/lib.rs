//! A fixed-size streaming block buffer shared by every Merkle–Damgård hash (MD5/SHA-1/SHA-256)
//! and by Skein-256's UBI chaining.
//!
//! `input` is the ordinary streaming accumulator: it calls back with each full block as soon as
//! it has one, flushing eagerly. `input_with_lazy_flush` instead holds back the last full block
//! until it sees more data, because Skein's UBI construction tags the final message block with a
//! distinct tweak flag and so must know whether a block is the last one *before* compressing it.
#![no_std]

/// A `BLOCK_SIZE`-byte streaming buffer with no heap allocation.
///
/// Invariant (spec §3, `HashState`): `pos` is always the number of unprocessed bytes buffered at
/// the front of `buffer`, with `0 <= pos < BLOCK_SIZE`.
#[derive(Clone)]
pub struct BlockBuffer<const BLOCK_SIZE: usize> {
    buffer: [u8; BLOCK_SIZE],
    pos: usize,
}

impl<const BLOCK_SIZE: usize> Default for BlockBuffer<BLOCK_SIZE> {
    fn default() -> Self {
        Self {
            buffer: [0u8; BLOCK_SIZE],
            pos: 0,
        }
    }
}

impl<const BLOCK_SIZE: usize> BlockBuffer<BLOCK_SIZE> {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many bytes are currently buffered.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// How much room is left before the buffer holds a full block.
    #[must_use]
    pub fn remaining(&self) -> usize {
        BLOCK_SIZE - self.pos
    }

    /// Feed `input` through the buffer, invoking `func` with each full block as soon as it fills,
    /// without retaining a final partial block past this call.
    pub fn input<F: FnMut(&[u8; BLOCK_SIZE])>(&mut self, mut input: &[u8], mut func: F) {
        if self.pos != 0 && input.len() >= self.remaining() {
            let rem = self.remaining();
            let (head, tail) = input.split_at(rem);
            input = tail;
            self.buffer[self.pos..].copy_from_slice(head);
            self.pos = 0;
            func(&self.buffer);
        }

        while input.len() >= BLOCK_SIZE {
            let (head, tail) = input.split_at(BLOCK_SIZE);
            input = tail;
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(head);
            func(&block);
        }

        self.buffer[self.pos..self.pos + input.len()].copy_from_slice(input);
        self.pos += input.len();
    }

    /// Like [`Self::input`], but a block is only flushed once *more* data arrives to fill the
    /// buffer past capacity, never merely to capacity. Used by constructions that must see the
    /// final block before processing it (Skein-256's UBI chaining).
    pub fn input_with_lazy_flush<F: FnMut(&[u8; BLOCK_SIZE])>(&mut self, mut input: &[u8], mut func: F) {
        if self.pos != 0 && input.len() > self.remaining() {
            let rem = self.remaining();
            let (head, tail) = input.split_at(rem);
            input = tail;
            self.buffer[self.pos..].copy_from_slice(head);
            self.pos = 0;
            func(&self.buffer);
        }

        while input.len() > BLOCK_SIZE {
            let (head, tail) = input.split_at(BLOCK_SIZE);
            input = tail;
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(head);
            func(&block);
        }

        self.buffer[self.pos..self.pos + input.len()].copy_from_slice(input);
        self.pos += input.len();
    }

    /// Append the Merkle–Damgård padding byte (`0x80`) then zero bytes, flushing the current
    /// block first if there isn't room for `reserved` trailing bytes (the length encoding).
    pub fn digest_pad<F: FnMut(&[u8; BLOCK_SIZE])>(&mut self, reserved: usize, mut func: F) {
        self.buffer[self.pos] = 0x80;
        self.pos += 1;
        self.buffer[self.pos..].fill(0);

        if self.remaining() < reserved {
            func(&self.buffer);
            self.buffer.fill(0);
        }
        self.pos = BLOCK_SIZE - reserved;
    }

    /// Full Merkle–Damgård finalization: pad, append a 64-bit little-endian bit length, flush.
    pub fn len_padding_le<F: FnMut(&[u8; BLOCK_SIZE])>(&mut self, bit_len: u64, mut func: F) {
        self.digest_pad(8, &mut func);
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&bit_len.to_le_bytes());
        func(&self.buffer);
        self.pos = 0;
    }

    /// Full Merkle–Damgård finalization: pad, append a 64-bit big-endian bit length, flush.
    pub fn len_padding_be<F: FnMut(&[u8; BLOCK_SIZE])>(&mut self, bit_len: u64, mut func: F) {
        self.digest_pad(8, &mut func);
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&bit_len.to_be_bytes());
        func(&self.buffer);
        self.pos = 0;
    }

    /// The remaining buffered bytes with zero padding applied up to the block boundary (used by
    /// Skein's message-tail handling, which pads with zeros rather than Merkle–Damgård's `0x80`
    /// marker).
    pub fn zero_pad_tail(&mut self) -> &[u8; BLOCK_SIZE] {
        self.buffer[self.pos..].fill(0);
        self.pos = 0;
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::BlockBuffer;

    #[test]
    fn flushes_eagerly_on_exact_block() {
        let mut buf: BlockBuffer<4> = BlockBuffer::new();
        let mut blocks = 0;
        buf.input(b"abcd", |_| blocks += 1);
        assert_eq!(blocks, 1);
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn lazy_flush_holds_final_block() {
        let mut buf: BlockBuffer<4> = BlockBuffer::new();
        let mut blocks = 0;
        buf.input_with_lazy_flush(b"abcd", |_| blocks += 1);
        assert_eq!(blocks, 0);
        assert_eq!(buf.position(), 4);
    }

    #[test]
    fn concatenation_invariance() {
        let message = b"the quick brown fox jumps over the lazy dog!!!!";
        let mut whole: BlockBuffer<16> = BlockBuffer::new();
        let mut whole_blocks = 0;
        whole.input(message, |_| whole_blocks += 1);

        let mut chunked: BlockBuffer<16> = BlockBuffer::new();
        let mut chunked_blocks = 0;
        for chunk in message.chunks(3) {
            chunked.input(chunk, |_| chunked_blocks += 1);
        }

        assert_eq!(whole_blocks, chunked_blocks);
        assert_eq!(whole.position(), chunked.position());
    }

    #[test]
    fn len_padding_le_places_length_at_tail() {
        let mut buf: BlockBuffer<8> = BlockBuffer::new();
        buf.input(b"ab", |_| panic!("should not flush yet"));
        let mut out = [0u8; 8];
        buf.len_padding_le(16, |b| out = *b);
        assert_eq!(&out[..2], b"ab");
        assert_eq!(out[2], 0x80);
    }
}
