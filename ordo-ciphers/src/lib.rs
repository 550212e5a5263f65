//! Block ciphers (spec §4.2).
#![no_std]

#[cfg(feature = "nullcipher")]
pub mod nullcipher;

#[cfg(feature = "aes")]
pub mod aes;

#[cfg(feature = "threefish256")]
pub mod threefish256;

#[cfg(feature = "nullcipher")]
pub use nullcipher::NullCipher;

#[cfg(feature = "aes")]
pub use aes::Aes;

#[cfg(feature = "threefish256")]
pub use threefish256::Threefish256;
