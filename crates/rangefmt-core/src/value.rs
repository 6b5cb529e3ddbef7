//! Dynamic argument values.
//!
//! A [`Value`] is the runtime-typed form every formatting argument takes at
//! the dynamically-checked entry point. Values are transient: built for one
//! call, borrowed from the caller's data, never persisted.

use crate::adapt::SeqRef;
use crate::handle::HandleFormat;
use crate::spec::SpecKind;

/// A typed formatting argument.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Char(char),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// An address rendered as `0x` + hex digits.
    Pointer(usize),
    Str(&'a str),
    /// A user-defined type with its own parse/format pair.
    Handle(&'a dyn HandleFormat),
    /// An adapted sequence rendered as `[e0, e1, ...]`.
    Seq(SeqRef<'a>),
}

impl<'a> Value<'a> {
    /// Adapt any sequence view as an argument value.
    #[must_use]
    pub fn from_seq(seq: &'a dyn crate::adapt::Sequence) -> Value<'a> {
        Value::Seq(SeqRef::new(seq))
    }
}

impl Value<'_> {
    /// The tokenizer category for scalar values; `None` for sequences and
    /// handles, which own their spec parsing.
    #[must_use]
    pub(crate) fn spec_kind(&self) -> Option<SpecKind> {
        match self {
            Value::Char(_) => Some(SpecKind::Char),
            Value::Bool(_) => Some(SpecKind::Bool),
            Value::Int(_) | Value::Uint(_) => Some(SpecKind::Int),
            Value::Float(_) => Some(SpecKind::Float),
            Value::Pointer(_) => Some(SpecKind::Pointer),
            Value::Str(_) => Some(SpecKind::Str),
            Value::Handle(_) | Value::Seq(_) => None,
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Pointer(p) => f.debug_tuple("Pointer").field(p).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Handle(_) => f.write_str("Handle(..)"),
            Value::Seq(s) => f.debug_tuple("Seq").field(&s.len()).finish(),
        }
    }
}

/// An address argument. `Value` cannot borrow a raw pointer usefully, so
/// callers wrap the address explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ptr(pub usize);

/// Conversion into a [`Value`] borrowing from `self`.
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;

    /// Spec category every value of this type falls in, when the type
    /// maps to a single scalar category. Lets an adapted sequence name
    /// its element category without holding an element, so an element
    /// spec is validated even against an empty sequence.
    fn spec_kind() -> Option<SpecKind>
    where
        Self: Sized,
    {
        None
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value<'_> {
        Value::Char(*self)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Char)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Bool)
    }
}

macro_rules! impl_to_value_int {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value<'_> {
                Value::Int(i64::from(*self))
            }

            fn spec_kind() -> Option<SpecKind> {
                Some(SpecKind::Int)
            }
        })*
    };
}

impl_to_value_int!(i8, i16, i32, i64);

macro_rules! impl_to_value_uint {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value<'_> {
                Value::Uint(u64::from(*self))
            }

            fn spec_kind() -> Option<SpecKind> {
                Some(SpecKind::Int)
            }
        })*
    };
}

impl_to_value_uint!(u8, u16, u32, u64);

impl ToValue for isize {
    fn to_value(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Int)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value<'_> {
        Value::Uint(*self as u64)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Int)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Float)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Float)
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Str)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Str)
    }
}

impl ToValue for Ptr {
    fn to_value(&self) -> Value<'_> {
        Value::Pointer(self.0)
    }

    fn spec_kind() -> Option<SpecKind> {
        Some(SpecKind::Pointer)
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        *self
    }
}

/// Build a `Value` argument array from expressions, borrowing each.
///
/// ```
/// use rangefmt_core::{values, vformat};
///
/// let out = vformat("{} + {}", &values![1, 2]).unwrap();
/// assert_eq!(out, "1 + 2");
/// ```
#[macro_export]
macro_rules! values {
    ($($arg:expr),* $(,)?) => {
        [$($crate::ToValue::to_value(&$arg)),*]
    };
}
