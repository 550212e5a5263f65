//! Primitive identity, parameter discovery, error taxonomy, and the trait contracts every
//! algorithm crate in the Ordo toolkit implements.
//!
//! This crate has no cryptographic code of its own; it is the vocabulary the rest of the
//! workspace shares, the same role `algorithm-registry` and `digest-buffer` played individually
//! in the teacher workspace, generalized from a single OID-keyed lookup to a dispatch-by-id
//! registry spanning every primitive family.
#![no_std]

mod error;
mod primitive;
mod query;
mod traits;

pub use error::Error;
pub use primitive::{PrimitiveId, PrimitiveType};
pub use query::{query_from_range, query_from_sizes, Query};
pub use traits::{BlockCipher, BlockMode, Hash, StreamCipher};

/// Result type returned by every primitive operation in the toolkit.
pub type Result<T> = core::result::Result<T, Error>;
