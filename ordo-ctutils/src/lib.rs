#![no_std]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used))]

//! Constant-time primitives shared by every keyed construction in the toolkit.
//!
//! ## [`Choice`]: constant-time analogue for [`bool`]
//! Values of this type are one of either [`Choice::FALSE`] or [`Choice::TRUE`]. `Choice` is
//! combined with CPU-specific predication intrinsics from the [`cmov`] crate (with a portable
//! "best effort" fallback) so branches never depend on secret data.
//!
//! ## [`CtEq`]: constant-time analogue for [`PartialEq`]
//! Equality testing normally short-circuits on the first mismatching byte; that is exactly what
//! must not happen when comparing MAC tags, padding bytes, or derived keys. [`ctcmp`] is built on
//! top of this trait and is what the rest of the toolkit calls.
//!
//! ## [`CtSelect`]: constant-time predication
//! Used by the X25519 Montgomery ladder to swap ladder state without branching on secret scalar
//! bits.

mod choice;
mod traits;

pub use choice::Choice;
pub use traits::{ct_eq::CtEq, ct_select::CtSelect};

/// Compare two byte buffers in constant time.
///
/// Returns `true` iff `a` and `b` have equal length and are byte-for-byte identical. The
/// comparison never terminates early: every byte of both buffers is inspected regardless of
/// where (or whether) a difference occurs, so timing cannot reveal the position of the first
/// mismatch.
#[must_use]
pub fn ctcmp(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).to_bool()
}

#[cfg(test)]
mod tests {
    use super::ctcmp;

    #[test]
    fn equal_buffers() {
        assert!(ctcmp(b"same-length-key!", b"same-length-key!"));
    }

    #[test]
    fn differing_buffers() {
        assert!(!ctcmp(b"aaaaaaaa", b"aaaaaaab"));
    }

    #[test]
    fn differing_lengths() {
        assert!(!ctcmp(b"short", b"much-longer"));
    }
}
