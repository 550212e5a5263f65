//! Stream ciphers (spec §4.3).
#![no_std]

#[cfg(feature = "rc4")]
pub mod rc4;

#[cfg(feature = "rc4")]
pub use rc4::Rc4;
