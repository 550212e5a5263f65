//! Key derivation functions built on [`ordo_mac::Hmac`]: PBKDF2 (spec §4.8) and HKDF (spec §4.9).
#![no_std]

mod hkdf;
mod pbkdf2;

pub use hkdf::hkdf;
pub use pbkdf2::pbkdf2;
