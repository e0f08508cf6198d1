//! Field kinds and their byte-level decoding.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zerocopy::byteorder::{
    BigEndian as B, F32, F64, I16, I32, I64, LittleEndian as L, U16, U32, U64,
};

/// A decoded trace value, as the Rust primitive of its field kind.
///
/// 64-bit integers keep their full range; use [`Value::as_f64`] for a
/// plotting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    F32(f32),
    F64(f64),
}

impl Value {
    /// Convert to a floating point value. Lossy for 64-bit integers beyond
    /// 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::U8(x) => x.into(),
            Self::U16(x) => x.into(),
            Self::U32(x) => x.into(),
            Self::U64(x) => x as f64,
            Self::I8(x) => x.into(),
            Self::I16(x) => x.into(),
            Self::I32(x) => x.into(),
            Self::I64(x) => x as f64,
            Self::F32(x) => x.into(),
            Self::F64(x) => x,
        }
    }

    /// Whether this value came from a 64-bit integer field.
    pub fn is_wide_integer(self) -> bool {
        matches!(self, Self::U64(_) | Self::I64(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(x) => x.fmt(f),
            Self::U16(x) => x.fmt(f),
            Self::U32(x) => x.fmt(f),
            Self::U64(x) => x.fmt(f),
            Self::I8(x) => x.fmt(f),
            Self::I16(x) => x.fmt(f),
            Self::I32(x) => x.fmt(f),
            Self::I64(x) => x.fmt(f),
            Self::F32(x) => x.fmt(f),
            Self::F64(x) => x.fmt(f),
        }
    }
}

/// An unrecognized primitive name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown primitive ({0}).")]
pub struct ParsePrimitiveError(pub alloc::string::String);

macro_rules! primitives {
    ($($variant:ident($name:literal, $repr:ty) => $value:ident, $(#[$attr:meta])*)*) => {
        /// The kind of a fixed-width field: width, signedness, byte order, and
        /// integer or floating point interpretation.
        ///
        /// Suffixes `l` and `b` select little- and big-endian byte order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Primitive {
            $(
                $(#[$attr])*
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl Primitive {
            /// Every primitive, in declaration order.
            pub const ALL: [Primitive; 18] = [$(Self::$variant,)*];

            /// Number of bytes occupied by a field of this kind.
            pub const fn width(self) -> usize {
                match self {
                    $(Self::$variant => size_of::<$repr>(),)*
                }
            }

            /// Canonical short name, as used in configuration.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Decode a field of this kind from the head of `r`.
            ///
            /// # Panics
            ///
            /// If `r` is shorter than [`Primitive::width`].
            pub fn decode(self, r: &[u8]) -> Value {
                match self {
                    $(Self::$variant => {
                        let x: $repr = zerocopy::transmute!(window::<{ size_of::<$repr>() }>(r));
                        Value::$value(x.into())
                    })*
                }
            }
        }

        impl FromStr for Primitive {
            type Err = ParsePrimitiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)*
                    _ => Err(ParsePrimitiveError(s.into())),
                }
            }
        }
    };
}

primitives! {
    U8("u8", u8) => U8, /** Unsigned byte. */
    U16L("u16l", U16<L>) => U16,
    U32L("u32l", U32<L>) => U32,
    U64L("u64l", U64<L>) => U64,
    U16B("u16b", U16<B>) => U16,
    U32B("u32b", U32<B>) => U32,
    U64B("u64b", U64<B>) => U64,

    I8("i8", i8) => I8, /** Signed byte. */
    I16L("i16l", I16<L>) => I16,
    I32L("i32l", I32<L>) => I32,
    I64L("i64l", I64<L>) => I64,
    I16B("i16b", I16<B>) => I16,
    I32B("i32b", I32<B>) => I32,
    I64B("i64b", I64<B>) => I64,

    F32L("f32l", F32<L>) => F32, /** IEEE-754 single precision. */
    F64L("f64l", F64<L>) => F64, /** IEEE-754 double precision. */
    F32B("f32b", F32<B>) => F32, /** IEEE-754 single precision. */
    F64B("f64b", F64<B>) => F64, /** IEEE-754 double precision. */
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Copy exactly `N` bytes from the head of a slice.
fn window<const N: usize>(r: &[u8]) -> [u8; N] {
    let mut buf = [0; N];
    buf.copy_from_slice(&r[..N]);
    buf
}
