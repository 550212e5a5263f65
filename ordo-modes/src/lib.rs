//! Block-cipher modes of operation (spec §4.5): ECB, CBC, CTR, OFB, CFB, each implementing
//! [`ordo_core::BlockMode`] over any [`ordo_core::BlockCipher`].
#![no_std]

mod common;

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;
