//! Hash functions (spec §4.4).
#![no_std]

#[cfg(feature = "md5")]
pub mod md5;

#[cfg(feature = "sha1")]
pub mod sha1;

#[cfg(feature = "sha256")]
pub mod sha256;

#[cfg(feature = "skein256")]
pub mod skein256;

#[cfg(feature = "md5")]
pub use md5::Md5;

#[cfg(feature = "sha1")]
pub use sha1::Sha1;

#[cfg(feature = "sha256")]
pub use sha256::Sha256;

#[cfg(feature = "skein256")]
pub use skein256::Skein256;
