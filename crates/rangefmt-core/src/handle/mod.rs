//! User-defined handle formatters.
//!
//! A handle type supplies its own parse/format pair and the engine
//! delegates the whole element spec to it. The protocol is two-phase:
//! `parse` must run first and produce a [`HandleState`]; `format` in the
//! [`HandleState::Unparsed`] state is a contract violation that fails with
//! [`FormatError::HandleNotParsed`], never a silent default.

use crate::error::FormatError;

/// Parse state of a handle formatter, modeled as an explicit state machine
/// rather than a sentinel field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandleState {
    /// `parse` has not run; `format` must fail.
    #[default]
    Unparsed,
    /// `parse` accepted the spec and selected an output mode.
    Parsed(u8),
}

/// A user-supplied parse/format pair invoked by the engine via dispatch.
pub trait HandleFormat {
    /// Parse the raw spec text (everything the replacement field hands to
    /// this type) and select an output mode.
    ///
    /// Implementations own their full diagnostic surface: an unknown type
    /// character should fail with
    /// [`FormatError::InvalidTypeOption`] naming the type's own category,
    /// and leftover input with [`FormatError::UnconsumedInput`].
    fn parse(&self, spec: &str) -> Result<HandleState, FormatError>;

    /// Render `self` in the mode selected by `parse`.
    ///
    /// Must return [`FormatError::HandleNotParsed`] when `state` is
    /// [`HandleState::Unparsed`].
    fn format(&self, state: &HandleState, out: &mut String) -> Result<(), FormatError>;
}
