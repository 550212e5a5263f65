//! [`query`]: runtime parameter discovery keyed by [`PrimitiveId`] (spec §3).
//!
//! Every algorithm crate already answers [`Query`] through its own trait method
//! (`BlockCipher::query`, `StreamCipher::query`, `Hash::query`), picked at compile time by which
//! concrete type the caller names. This is the id-keyed counterpart spec §3 motivates: a caller
//! holding only a [`PrimitiveId`] — not a concrete type — can still ask "what sizes does this one
//! support" without matching on [`PrimitiveId::kind`] itself first.

use ordo_core::{BlockCipher, Hash, PrimitiveId, Query, StreamCipher};

#[cfg(feature = "aes")]
use ordo_ciphers::Aes;
#[cfg(feature = "nullcipher")]
use ordo_ciphers::NullCipher;
#[cfg(feature = "threefish256")]
use ordo_ciphers::Threefish256;
#[cfg(feature = "rc4")]
use ordo_stream::Rc4;

#[cfg(feature = "md5")]
use ordo_hashes::Md5;
#[cfg(feature = "sha1")]
use ordo_hashes::Sha1;
#[cfg(feature = "sha256")]
use ordo_hashes::Sha256;
#[cfg(feature = "skein256")]
use ordo_hashes::Skein256;

/// Answer `tag` for the primitive named by `id`.
///
/// Returns `None` if `id` names a block-cipher mode (modes have no size parameters of their own
/// to query — their block/key/IV sizes all come from the cipher they're layered on) or a
/// primitive whose implementing crate wasn't compiled in.
#[must_use]
pub fn query(id: PrimitiveId, tag: Query, suggested: usize) -> Option<usize> {
    match id {
        #[cfg(feature = "nullcipher")]
        PrimitiveId::NullCipher => NullCipher::query(tag, suggested),
        #[cfg(feature = "aes")]
        PrimitiveId::Aes => Aes::query(tag, suggested),
        #[cfg(feature = "threefish256")]
        PrimitiveId::Threefish256 => Threefish256::query(tag, suggested),
        #[cfg(feature = "rc4")]
        PrimitiveId::Rc4 => Rc4::query(tag, suggested),
        #[cfg(feature = "md5")]
        PrimitiveId::Md5 => Md5::query(tag, suggested),
        #[cfg(feature = "sha1")]
        PrimitiveId::Sha1 => Sha1::query(tag, suggested),
        #[cfg(feature = "sha256")]
        PrimitiveId::Sha256 => Sha256::query(tag, suggested),
        #[cfg(feature = "skein256")]
        PrimitiveId::Skein256 => Skein256::query(tag, suggested),
        _ => None,
    }
}
