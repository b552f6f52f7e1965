/// A canonical resource name that does not belong to the axis it was looked
/// up in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
}

impl std::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} {}", self.what, self.name)
    }
}

impl std::error::Error for UnknownName {}

/// A raw tag at or beyond the cardinality of the axis it was decoded for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TagOutOfRange {
    pub what: &'static str,
    pub tag: u8,
}

impl std::fmt::Display for TagOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tag out of range: {}", self.what, self.tag)
    }
}

impl std::error::Error for TagOutOfRange {}

/// Defines one classification axis: a `repr(u8)` enum whose discriminants
/// are the wire-format tags, plus the lookup surface shared by all axes.
macro_rules! tag_enum {
    ($(#[$attr:meta])* $vis:vis enum $ty:ident($what:literal) {
        Neutral = 0 => $ncname:literal,
        $($variant:ident = $tag:literal => $cname:literal,)*
    }) => {
        $(#[$attr])*
        #[derive(
            Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(u8)]
        $vis enum $ty {
            /// The reserved "not yet classified" value.
            #[default]
            Neutral = 0,
            $($variant = $tag,)*
        }

        impl $ty {
            /// All values of the axis, in tag order.
            pub const ALL: &'static [$ty] = &[$ty::Neutral, $($ty::$variant,)*];
            /// Cardinality of the axis; valid tags are exactly `0..COUNT`.
            pub const COUNT: usize = Self::ALL.len();

            /// The small-integer tag this value is encoded as.
            pub const fn tag(self) -> u8 {
                self as u8
            }

            /// The canonical resource name.
            pub const fn name(self) -> &'static str {
                match self {
                    $ty::Neutral => $ncname,
                    $($ty::$variant => $cname,)*
                }
            }

            /// Decodes a raw tag.  Fails for tags at or beyond
            /// [`Self::COUNT`]; tag 0 decodes to the neutral value.
            pub fn from_tag(tag: u8) -> Option<$ty> {
                Self::ALL.get(usize::from(tag)).copied()
            }

            /// Looks up a value by canonical name.
            pub fn from_name(name: &str) -> Option<$ty> {
                Self::ALL.iter().copied().find(|v| v.name() == name)
            }

            /// Looks up a value by canonical name; panics on unknown names.
            #[track_caller]
            pub fn get(name: &str) -> $ty {
                Self::from_name(name).unwrap_or_else(|| panic!("no {} {name}", $what))
            }

            /// `true` for the reserved "not yet classified" value, which
            /// never denotes a concrete resource.
            pub const fn is_neutral(self) -> bool {
                matches!(self, $ty::Neutral)
            }
        }

        // Tags must be dense: declaration order, discriminant, and table
        // index agree, and `from_tag` relies on it.
        const _: () = {
            let mut i = 0;
            while i < $ty::ALL.len() {
                assert!($ty::ALL[i] as u8 as usize == i);
                i += 1;
            }
        };

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::tag::UnknownName;
            fn from_str(s: &str) -> Result<$ty, crate::tag::UnknownName> {
                $ty::from_name(s).ok_or_else(|| crate::tag::UnknownName {
                    what: $what,
                    name: s.to_string(),
                })
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = crate::tag::TagOutOfRange;
            fn try_from(tag: u8) -> Result<$ty, crate::tag::TagOutOfRange> {
                $ty::from_tag(tag).ok_or(crate::tag::TagOutOfRange { what: $what, tag })
            }
        }

        impl From<$ty> for jzon::JsonValue {
            fn from(value: $ty) -> Self {
                value.name().into()
            }
        }
    };
}

pub(crate) use tag_enum;
