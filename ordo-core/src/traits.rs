use crate::{Error, Query, Result};

/// A keyed block cipher: a permutation on fixed-size blocks (spec §4.2).
///
/// `init` performs the full key schedule; `forward`/`inverse` run the permutation (and its
/// inverse) in place on one block. Sensitive state is expected to zeroize on drop rather than
/// exposing an explicit `final` — Rust's `Drop` makes the teacher's explicit `final` call
/// unnecessary as long as the implementation derives or hand-writes `ZeroizeOnDrop`.
pub trait BlockCipher: Sized {
    /// Extra, algorithm-specific initialization parameters (e.g. AES's round count, Threefish's
    /// tweak). Use `()` for primitives that take none.
    type Params: Default + Clone;

    /// Block size in bytes. Fixed per algorithm (spec §3: "algorithm-specific constants").
    const BLOCK_SIZE: usize;

    /// Validate `key` and run the key schedule.
    ///
    /// # Errors
    /// Returns [`Error::KeyLen`] if `key.len()` is not a valid key length for this primitive, or
    /// [`Error::Arg`] if `params` is invalid (e.g. an out-of-range AES round count).
    fn init(key: &[u8], params: Self::Params) -> Result<Self>;

    /// Apply the forward permutation to `block` in place.
    ///
    /// # Panics
    /// Panics if `block.len() != Self::BLOCK_SIZE`.
    fn forward(&self, block: &mut [u8]);

    /// Apply the inverse permutation to `block` in place.
    ///
    /// # Panics
    /// Panics if `block.len() != Self::BLOCK_SIZE`.
    fn inverse(&self, block: &mut [u8]);

    /// Answer a parameter-discovery [`Query`] for this primitive (spec §3's query contract).
    /// Returns `None` if this primitive does not answer `tag`.
    fn query(tag: Query, suggested: usize) -> Option<usize>;
}

/// A keyed stream cipher (spec §4.3).
pub trait StreamCipher: Sized {
    /// Extra initialization parameters, e.g. RC4's keystream drop count.
    type Params: Default + Clone;

    /// Validate `key` and run the key schedule (plus any configured keystream drop).
    ///
    /// # Errors
    /// Returns [`Error::KeyLen`] if `key.len()` is not valid for this primitive.
    fn init(key: &[u8], params: Self::Params) -> Result<Self>;

    /// XOR the next `buf.len()` keystream bytes into `buf` in place.
    fn apply(&mut self, buf: &mut [u8]);

    /// Answer a parameter-discovery [`Query`] for this primitive.
    fn query(tag: Query, suggested: usize) -> Option<usize>;
}

/// A cryptographic hash function driven through a uniform init/update/finalize lifecycle
/// (spec §4.4).
pub trait Hash: Clone {
    /// Extra initialization parameters, e.g. Skein-256's configured output length.
    type Params: Default + Clone;

    /// Internal block size in bytes (the unit the streaming harness buffers on).
    const BLOCK_SIZE: usize;

    /// Construct a freshly initialized state.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `params` is invalid (e.g. Skein's `out_len == 0`).
    fn init(params: Self::Params) -> Result<Self>;

    /// Absorb `data` into the running hash state.
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash, writing `self.output_len()` bytes to the front of `out`.
    ///
    /// Consumes `self`: per spec §4.4, finalization must not leave the state usable for further
    /// updates, and Rust's ownership makes that a compile-time guarantee rather than a
    /// documentation note.
    ///
    /// # Panics
    /// Panics if `out.len() < self.output_len()`.
    fn finalize(self, out: &mut [u8]);

    /// The digest length this instance will produce.
    fn output_len(&self) -> usize;

    /// Answer a parameter-discovery [`Query`] for this primitive.
    fn query(tag: Query, suggested: usize) -> Option<usize>;
}

/// A block-cipher mode of operation, layered atop any [`BlockCipher`] (spec §4.5).
///
/// A mode state borrows nothing from the cipher's type beyond its trait bound; the high-level
/// `EncBlockContext` (in the `ordo` façade crate) owns both the cipher and the mode state
/// (spec §9: "Ownership: the high-level `EncBlockContext` owns both").
pub trait BlockMode<C: BlockCipher>: Sized {
    /// Extra mode-specific initialization parameters (e.g. whether PKCS#7 padding is enabled).
    type Params: Default + Clone;

    /// Initialize the mode: validate `iv`'s length, store it, and record the cipher direction.
    ///
    /// # Errors
    /// Returns [`Error::Arg`] if `iv.len()` is not valid for this mode (spec §4.5's per-mode IV
    /// length contract, tabulated in spec §6.1).
    fn init(cipher: C, iv: &[u8], encrypt: bool, params: Self::Params) -> Result<Self>;

    /// Feed `input` through the mode, writing ciphertext/plaintext to the front of `output`, and
    /// return the number of bytes written.
    ///
    /// Processes input in arrival order; once a byte of output has been emitted by some `update`
    /// call, no later call changes it (spec §4.5's ordering guarantee). `output` must be sized
    /// for at least `input.len() + Self::MAX_FINAL_OVERHEAD` bytes when padding may be enabled.
    ///
    /// # Errors
    /// This operation does not fail in the modes this toolkit implements (all error conditions
    /// surface at `init` or `finalize`), but returns a `Result` for symmetry and forward
    /// compatibility.
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Flush any buffered input, applying or validating padding as configured, and return the
    /// number of bytes written to `output`.
    ///
    /// # Errors
    /// Returns [`Error::Leftover`] if padding is disabled and bytes remain buffered, or
    /// [`Error::Padding`] if decrypting and the trailing PKCS#7 byte is invalid.
    fn finalize(&mut self, output: &mut [u8]) -> Result<usize>;
}
