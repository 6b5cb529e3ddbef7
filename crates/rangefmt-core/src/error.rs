//! Formatting diagnostics.
//!
//! Every malformed spec is reported through [`FormatError`] before any
//! output is produced. The wording of the variants that conformance
//! fixtures pin down is load-bearing; do not rephrase them.

use thiserror::Error;

/// An error raised while parsing a format string or evaluating a spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A lone `{` or `}` in literal text (escapes are `{{` and `}}`).
    #[error("The format string contains an invalid escape sequence")]
    InvalidEscape,

    /// A replacement field opened with `{` but never closed.
    #[error("The format string is missing a terminating '}}'")]
    UnterminatedField,

    /// The arg-id was followed by something other than `:` or `}`.
    #[error("The argument index should end with a ':' or a '}}'")]
    ArgIdTerminator,

    /// The fill character may not be `{` or `}`.
    #[error("The fill option contains an invalid value")]
    InvalidFill,

    /// Characters were left over after the spec grammar finished.
    #[error("The format specifier should consume the input or end with a '}}'")]
    UnconsumedInput,

    /// A literal width starting with `0` (distinct from the `0` pad flag).
    #[error("The width option should not have a leading zero")]
    WidthLeadingZero,

    /// A `.` with neither digits nor a `{...}` argument reference.
    #[error("The precision option does not contain a value or an argument index")]
    PrecisionMissingValue,

    /// A sign / alternate form / zero-padding flag on a category-type
    /// combination that does not support it.
    #[error("The format specifier for {category} does not allow the {option} option")]
    OptionNotAllowed {
        /// Category with article, e.g. "a character", "a bool".
        category: &'static str,
        /// "sign", "alternate form", or "zero-padding".
        option: &'static str,
    },

    /// A known type character that is invalid for the argument's category.
    #[error("The type option contains an invalid value for {category} formatting argument")]
    InvalidTypeOption {
        /// Category with article, e.g. "an integer", "a floating-point".
        category: &'static str,
    },

    /// A width/precision or field argument index past the supplied list.
    #[error("The argument index value is too large for the number of arguments supplied")]
    ArgIndexTooLarge,

    /// `n` combined with a range type that renders a single string.
    #[error("The n option and type {rtype} can't be used together")]
    SuppressWithStringType {
        /// "s" or "?s".
        rtype: &'static str,
    },

    /// An element spec after a range type that renders a single string.
    #[error("Type {rtype} and an underlying format specification can't be used together")]
    StringTypeWithElementSpec {
        /// "s" or "?s".
        rtype: &'static str,
    },

    /// Range type `s`/`?s` on a sequence whose elements are not characters.
    #[error("Type {rtype} requires character type as formatting argument")]
    StringTypeRequiresChar {
        /// "s" or "?s".
        rtype: &'static str,
    },

    /// Range type `m` on elements that are not pairs.
    #[error("Type m requires a pair or a tuple with two elements")]
    MapTypeRequiresPair,

    /// A width or precision argument that is not a non-negative integer.
    #[error("Replacement argument isn't a non-negative integer")]
    NotAnInteger,

    /// A width or precision value beyond the supported range.
    #[error("Number is too large")]
    NumberTooLarge,

    /// `{}` and `{0}` style argument references mixed in one format string.
    #[error("Cannot switch between automatic and manual argument indexing")]
    MixedIndexing,

    /// Integer rendered with type `c` but outside the character range.
    #[error("Integral value outside the range of the char type")]
    CharOutOfRange,

    /// A handle formatter's `format` was invoked in the unparsed state.
    #[error("The formatter's parse function has not been called.")]
    HandleNotParsed,
}
