//! Shared fixtures for the integration tests: the `Status` handle type
//! and the check/check_err assertion helpers.

// Each test binary includes this module and uses a different subset.
#![allow(dead_code)]

use rangefmt_core::{FormatError, HandleFormat, HandleState, ToValue, Value, vformat};
use std::fmt::Write as _;

/// A user-defined type formatted through the handle protocol. Its parse
/// accepts an empty spec or one of `x`/`X`/`s` and nothing else; format
/// before parse is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Bar,
    Foobar,
    Foo,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Foo => 0xAAAA,
            Status::Bar => 0x5555,
            Status::Foobar => 0xAA55,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Foo => "foo",
            Status::Bar => "bar",
            Status::Foobar => "foobar",
        }
    }
}

impl HandleFormat for Status {
    fn parse(&self, spec: &str) -> Result<HandleState, FormatError> {
        let mut chars = spec.chars();
        let mode = match chars.next() {
            None | Some('x') => 0,
            Some('X') => 1,
            Some('s') => 2,
            Some(_) => {
                return Err(FormatError::InvalidTypeOption {
                    category: "a status",
                });
            }
        };
        if chars.next().is_some() {
            return Err(FormatError::UnconsumedInput);
        }
        Ok(HandleState::Parsed(mode))
    }

    fn format(&self, state: &HandleState, out: &mut String) -> Result<(), FormatError> {
        match state {
            HandleState::Unparsed => Err(FormatError::HandleNotParsed),
            HandleState::Parsed(0) => {
                let _ = write!(out, "{:#x}", self.code());
                Ok(())
            }
            HandleState::Parsed(1) => {
                let _ = write!(out, "0X{:X}", self.code());
                Ok(())
            }
            _ => {
                out.push_str(self.name());
                Ok(())
            }
        }
    }
}

impl ToValue for Status {
    fn to_value(&self) -> Value<'_> {
        Value::Handle(self)
    }
}

/// Format `fmt` against `args` and compare with `expected`.
#[track_caller]
pub fn check(expected: &str, fmt: &str, args: &[Value<'_>]) {
    match vformat(fmt, args) {
        Ok(out) => assert_eq!(out, expected, "format string {fmt:?}"),
        Err(e) => panic!("format string {fmt:?} failed: {e}"),
    }
}

/// Format `fmt` against `args` and require failure with exactly the
/// diagnostic `expected`.
#[track_caller]
pub fn check_err(expected: &str, fmt: &str, args: &[Value<'_>]) {
    match vformat(fmt, args) {
        Ok(out) => panic!("format string {fmt:?} produced {out:?}, expected an error"),
        Err(e) => assert_eq!(e.to_string(), expected, "format string {fmt:?}"),
    }
}
