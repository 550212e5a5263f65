/// Classification of a [`PrimitiveId`] (spec §3: "each id belongs to exactly one type").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// A cryptographic hash function.
    Hash,
    /// A stream cipher.
    Stream,
    /// A block cipher.
    Block,
    /// A block-cipher mode of operation.
    BlockMode,
}

macro_rules! primitive_id {
    ($( $variant:ident => $name:literal, $ty:expr, $feature:literal ; )*) => {
        /// A single integer-valued enumerator spanning every algorithm in the toolkit.
        ///
        /// Lifecycle: immutable, process-wide. An id never changes type or name once assigned.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum PrimitiveId {
            $(#[doc = concat!("`", $name, "`")] $variant,)*
        }

        impl PrimitiveId {
            /// All ids, irrespective of whether their implementing crate is compiled in.
            pub const ALL: &'static [PrimitiveId] = &[$(PrimitiveId::$variant,)*];

            /// The stable canonical name for this primitive, or `None` for ids this version of
            /// the crate does not recognize (reserved for forward compatibility).
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(PrimitiveId::$variant => Some($name),)*
                }
            }

            /// Look up a primitive id by its canonical name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<PrimitiveId> {
                match name {
                    $($name => Some(PrimitiveId::$variant),)*
                    _ => None,
                }
            }

            /// The [`PrimitiveType`] this id belongs to.
            #[must_use]
            pub fn kind(self) -> PrimitiveType {
                match self {
                    $(PrimitiveId::$variant => $ty,)*
                }
            }

            /// Whether the implementing crate for this id was compiled into this build.
            ///
            /// Backed by a Cargo feature per algorithm family so that an iterator over a
            /// [`PrimitiveType`]'s ids only yields primitives actually available at runtime,
            /// matching spec §4.1's "availability flag per build (feature inclusion)".
            #[must_use]
            pub fn is_available(self) -> bool {
                match self {
                    $(PrimitiveId::$variant => cfg!(feature = $feature),)*
                }
            }
        }
    };
}

primitive_id! {
    NullCipher  => "nullcipher",   PrimitiveType::Block,     "nullcipher";
    Aes         => "aes",          PrimitiveType::Block,     "aes";
    Threefish256=> "threefish256", PrimitiveType::Block,     "threefish256";
    Rc4         => "rc4",          PrimitiveType::Stream,    "rc4";
    Md5         => "md5",          PrimitiveType::Hash,      "md5";
    Sha1        => "sha1",         PrimitiveType::Hash,      "sha1";
    Sha256      => "sha256",       PrimitiveType::Hash,      "sha256";
    Skein256    => "skein256",     PrimitiveType::Hash,      "skein256";
    Ecb         => "ecb",          PrimitiveType::BlockMode, "ecb";
    Cbc         => "cbc",          PrimitiveType::BlockMode, "cbc";
    Ctr         => "ctr",          PrimitiveType::BlockMode, "ctr";
    Cfb         => "cfb",          PrimitiveType::BlockMode, "cfb";
    Ofb         => "ofb",          PrimitiveType::BlockMode, "ofb";
}

impl PrimitiveType {
    /// A stable iterator over every available id of this type (spec §4.1: "the reverse: a
    /// stable iterator over all ids of a given type").
    pub fn ids(self) -> impl Iterator<Item = PrimitiveId> {
        PrimitiveId::ALL
            .iter()
            .copied()
            .filter(move |id| id.kind() == self && id.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimitiveId, PrimitiveType};

    #[test]
    fn name_round_trips() {
        for id in PrimitiveId::ALL.iter().copied() {
            let name = id.name().unwrap();
            assert_eq!(PrimitiveId::from_name(name), Some(id));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(PrimitiveId::from_name("not-a-primitive"), None);
    }

    #[test]
    fn every_id_has_exactly_one_type() {
        assert_eq!(PrimitiveId::Aes.kind(), PrimitiveType::Block);
        assert_eq!(PrimitiveId::Sha256.kind(), PrimitiveType::Hash);
        assert_eq!(PrimitiveId::Rc4.kind(), PrimitiveType::Stream);
        assert_eq!(PrimitiveId::Cbc.kind(), PrimitiveType::BlockMode);
    }

    #[test]
    fn type_iterator_only_yields_matching_kind() {
        for id in PrimitiveType::Hash.ids() {
            assert_eq!(id.kind(), PrimitiveType::Hash);
        }
    }
}
