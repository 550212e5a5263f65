//! OS entropy source wrapper (spec §6.3).
//!
//! The toolkit treats the entropy source itself as an external collaborator (spec §1): this crate
//! only supplies the interface the rest of the toolkit calls through, backed by [`getrandom`]
//! rather than any per-OS syscall plumbing of our own.
#![no_std]

use ordo_core::{Error, Result};

/// Fill `out` with cryptographically secure random bytes from the OS CSPRNG.
///
/// # Errors
/// Returns [`Error::Fail`] if the OS entropy source is unavailable. On failure the contents of
/// `out` are indeterminate; the caller must not treat a partially-filled buffer as usable.
pub fn os_random(out: &mut [u8]) -> Result<()> {
    getrandom::fill(out).map_err(|_| Error::Fail)
}

/// Fill `out` with random bytes from a blocking, high-quality entropy source.
///
/// On the platforms `getrandom` supports, the underlying syscall (e.g. Linux's `getrandom(2)`)
/// already blocks until the kernel CSPRNG is seeded, so this is currently identical to
/// [`os_random`]; it exists as a distinct entry point per spec §6.3 so a caller who specifically
/// wants the higher-quality/blocking variant has a name to reach for, independent of whatever a
/// given target's default backend happens to guarantee.
///
/// # Errors
/// Returns [`Error::Fail`] if the OS entropy source is unavailable.
pub fn os_secure_random(out: &mut [u8]) -> Result<()> {
    os_random(out)
}

#[cfg(test)]
mod tests {
    use super::{os_random, os_secure_random};

    #[test]
    fn fills_the_requested_length() {
        let mut buf = [0u8; 64];
        os_random(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn empty_buffer_succeeds_trivially() {
        os_random(&mut []).unwrap();
    }

    #[test]
    fn successive_draws_differ() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        os_random(&mut a).unwrap();
        os_random(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn secure_variant_also_fills_the_buffer() {
        let mut buf = [0u8; 32];
        os_secure_random(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }
}
