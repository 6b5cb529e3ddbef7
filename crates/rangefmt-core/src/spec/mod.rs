//! Format-spec tokenizer.
//!
//! Parses the text between `:` and the closing `}` of a replacement field
//! into a structured [`Spec`]. The grammar is order-sensitive:
//!
//! ```text
//! format-spec ::= [[fill] align] [sign] ["#"] ["0"] [width] ["." precision] ["L"] [type]
//! width       ::= nonzero-digit digit* | "{" [index] "}"
//! precision   ::= digit+ | "{" [index] "}"
//! ```
//!
//! Parsing is category-driven: each [`SpecKind`] only attempts the
//! productions its category supports. A production that is attempted and
//! rejected produces a category-specific diagnostic; one that is never
//! attempted leaves its input unconsumed, which then fails the
//! consume-all rule with a different diagnostic. Both behaviors are pinned
//! by conformance fixtures.

use crate::error::FormatError;

/// Alignment within the padded field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// No align given; the renderer picks per category.
    #[default]
    Default,
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
}

/// Sign handling for numeric output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sign {
    /// No sign option given.
    #[default]
    Default,
    /// `+`: always emit a sign.
    Plus,
    /// `-`: negative values only (same as the default).
    Minus,
    /// ` `: a space for non-negative values.
    Space,
}

/// A width or precision option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptValue {
    /// Option absent.
    #[default]
    None,
    /// Literal non-negative integer.
    Literal(usize),
    /// Argument-supplied: `{}` (next positional) or `{N}` (explicit index).
    Arg(Option<usize>),
}

impl OptValue {
    /// Returns `true` if the option was supplied in either form.
    #[must_use]
    pub fn is_some(&self) -> bool {
        !matches!(self, OptValue::None)
    }
}

/// Element categories the tokenizer can parse a spec for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Char,
    Bool,
    Int,
    Float,
    Pointer,
    Str,
}

/// Every type character any category recognizes. A character in this set
/// that is invalid for the current category reports an invalid-type
/// diagnostic; characters outside it are left unconsumed.
const TYPE_ALPHABET: &str = "aAbBcdeEfFgGopPsxX?";

impl SpecKind {
    /// Category name with article, as used in diagnostics.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            SpecKind::Char => "a character",
            SpecKind::Bool => "a bool",
            SpecKind::Int => "an integer",
            SpecKind::Float => "a floating-point",
            SpecKind::Pointer => "a pointer",
            SpecKind::Str => "a string",
        }
    }

    fn valid_types(self) -> &'static str {
        match self {
            SpecKind::Char => "bBcdoxX?",
            SpecKind::Bool => "bBdosxX",
            SpecKind::Int => "bBcdoxX",
            SpecKind::Float => "aAeEfFgG",
            SpecKind::Pointer => "pP",
            SpecKind::Str => "s?",
        }
    }

    fn parses_sign_flags(self) -> bool {
        matches!(
            self,
            SpecKind::Char | SpecKind::Bool | SpecKind::Int | SpecKind::Float
        )
    }

    fn parses_zero_flag(self) -> bool {
        self.parses_sign_flags() || self == SpecKind::Pointer
    }

    fn parses_precision(self) -> bool {
        matches!(self, SpecKind::Float | SpecKind::Str)
    }

    fn parses_locale(self) -> bool {
        matches!(
            self,
            SpecKind::Char | SpecKind::Bool | SpecKind::Int | SpecKind::Float
        )
    }
}

/// A parsed format spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spec {
    /// Fill character, space when not given.
    pub fill: char,
    pub align: Align,
    pub sign: Sign,
    /// `#`
    pub alternate: bool,
    /// `0` (ignored when an explicit align is present).
    pub zero_pad: bool,
    pub width: OptValue,
    pub precision: OptValue,
    /// `L`
    pub locale: bool,
    /// Presentation type character, when one was given.
    pub type_char: Option<char>,
}

impl Spec {
    /// Fresh spec with the space fill and everything else defaulted.
    #[must_use]
    pub fn new() -> Self {
        Spec {
            fill: ' ',
            ..Spec::default()
        }
    }

    /// Returns `true` if the type character selects an integer presentation.
    #[must_use]
    pub fn integer_presentation(&self) -> bool {
        matches!(self.type_char, Some('b' | 'B' | 'd' | 'o' | 'x' | 'X'))
    }
}

/// Character cursor shared by the spec and range-spec parsers.
#[derive(Debug)]
pub(crate) struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub(crate) fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    pub(crate) fn accept(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Remainder of the input, unconsumed.
    pub(crate) fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    /// Fill/align prefix: a fill character is only recognized when the
    /// next character is an align character.
    pub(crate) fn fill_and_align(&mut self) -> Result<(char, Align), FormatError> {
        let align_of = |c| match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        };
        if let (Some(first), Some(second)) = (self.peek(), self.peek_second())
            && let Some(align) = align_of(second)
        {
            if first == '{' || first == '}' {
                return Err(FormatError::InvalidFill);
            }
            self.bump();
            self.bump();
            return Ok((first, align));
        }
        if let Some(first) = self.peek()
            && let Some(align) = align_of(first)
        {
            self.bump();
            return Ok((' ', align));
        }
        Ok((' ', Align::Default))
    }

    /// Decimal digit run, `None` when the cursor is not on a digit.
    fn digits(&mut self) -> Option<usize> {
        let start = self.pos;
        let mut value = 0_usize;
        while let Some(c) = self.peek() {
            let Some(d) = c.to_digit(10) else { break };
            value = value.saturating_mul(10).saturating_add(d as usize);
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }

    /// `{}` or `{N}` argument reference; the cursor sits on the `{`.
    fn arg_ref(&mut self) -> Result<OptValue, FormatError> {
        self.bump(); // '{'
        if self.accept('}') {
            return Ok(OptValue::Arg(None));
        }
        let index = self.digits();
        if !self.accept('}') {
            return Err(FormatError::ArgIdTerminator);
        }
        Ok(OptValue::Arg(index))
    }

    /// Width option: literal (leading zero rejected) or argument reference.
    pub(crate) fn width(&mut self) -> Result<OptValue, FormatError> {
        match self.peek() {
            Some('{') => self.arg_ref(),
            Some('0') => Err(FormatError::WidthLeadingZero),
            Some(c) if c.is_ascii_digit() => {
                Ok(OptValue::Literal(self.digits().unwrap_or_default()))
            }
            _ => Ok(OptValue::None),
        }
    }

    /// Precision option after the `.` was consumed. A bare `.` is an error.
    fn precision(&mut self) -> Result<OptValue, FormatError> {
        match self.peek() {
            Some('{') => self.arg_ref(),
            Some(c) if c.is_ascii_digit() => {
                Ok(OptValue::Literal(self.digits().unwrap_or_default()))
            }
            _ => Err(FormatError::PrecisionMissingValue),
        }
    }
}

/// Parse the full spec text for an argument of category `kind`.
///
/// The entire input must be consumed; leftover characters fail with
/// [`FormatError::UnconsumedInput`].
pub fn parse_spec(input: &str, kind: SpecKind) -> Result<Spec, FormatError> {
    let mut scanner = Scanner::new(input);
    let mut spec = Spec::new();

    (spec.fill, spec.align) = scanner.fill_and_align()?;

    if kind.parses_sign_flags() {
        spec.sign = match scanner.peek() {
            Some('+') => {
                scanner.bump();
                Sign::Plus
            }
            Some('-') => {
                scanner.bump();
                Sign::Minus
            }
            Some(' ') => {
                scanner.bump();
                Sign::Space
            }
            _ => Sign::Default,
        };
        if scanner.accept('#') {
            spec.alternate = true;
        }
    }
    if kind.parses_zero_flag() && scanner.accept('0') {
        spec.zero_pad = true;
    }

    spec.width = scanner.width()?;

    if kind.parses_precision() && scanner.accept('.') {
        spec.precision = scanner.precision()?;
    }

    if kind.parses_locale() && scanner.accept('L') {
        spec.locale = true;
    }

    if let Some(c) = scanner.peek() {
        if kind.valid_types().contains(c) {
            scanner.bump();
            spec.type_char = Some(c);
        } else if TYPE_ALPHABET.contains(c) {
            return Err(FormatError::InvalidTypeOption {
                category: kind.category(),
            });
        }
    }

    if !scanner.at_end() {
        return Err(FormatError::UnconsumedInput);
    }

    validate_flags(&spec, kind)?;
    Ok(spec)
}

/// Char and bool accept sign / alternate form / zero padding only under an
/// integer presentation type.
fn validate_flags(spec: &Spec, kind: SpecKind) -> Result<(), FormatError> {
    if !matches!(kind, SpecKind::Char | SpecKind::Bool) || spec.integer_presentation() {
        return Ok(());
    }
    let category = kind.category();
    if spec.sign != Sign::Default {
        return Err(FormatError::OptionNotAllowed {
            category,
            option: "sign",
        });
    }
    if spec.alternate {
        return Err(FormatError::OptionNotAllowed {
            category,
            option: "alternate form",
        });
    }
    if spec.zero_pad {
        return Err(FormatError::OptionNotAllowed {
            category,
            option: "zero-padding",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_is_all_defaults() {
        let spec = parse_spec("", SpecKind::Int).unwrap();
        assert_eq!(spec, Spec::new());
    }

    #[test]
    fn fill_requires_align() {
        let spec = parse_spec("*<5", SpecKind::Int).unwrap();
        assert_eq!(spec.fill, '*');
        assert_eq!(spec.align, Align::Left);
        assert_eq!(spec.width, OptValue::Literal(5));

        // '*' with no align is not a fill and not anything else either.
        assert_eq!(
            parse_spec("*5", SpecKind::Int),
            Err(FormatError::UnconsumedInput)
        );
    }

    #[test]
    fn align_without_fill() {
        let spec = parse_spec("^4", SpecKind::Char).unwrap();
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.align, Align::Center);
    }

    #[test]
    fn colon_is_a_valid_fill() {
        let spec = parse_spec(":>5", SpecKind::Int).unwrap();
        assert_eq!(spec.fill, ':');
        assert_eq!(spec.align, Align::Right);
    }

    #[test]
    fn brace_fill_is_rejected() {
        assert_eq!(parse_spec("{<", SpecKind::Int), Err(FormatError::InvalidFill));
        assert_eq!(parse_spec("}<", SpecKind::Int), Err(FormatError::InvalidFill));
    }

    #[test]
    fn width_leading_zero_distinct_from_pad_flag() {
        // Int parses the 0 flag, so "05" is zero-pad + width 5.
        let spec = parse_spec("05", SpecKind::Int).unwrap();
        assert!(spec.zero_pad);
        assert_eq!(spec.width, OptValue::Literal(5));

        // Str has no 0 flag, so "05" is a width with a leading zero.
        assert_eq!(
            parse_spec("05", SpecKind::Str),
            Err(FormatError::WidthLeadingZero)
        );
    }

    #[test]
    fn width_argument_forms() {
        assert_eq!(
            parse_spec("{}", SpecKind::Int).unwrap().width,
            OptValue::Arg(None)
        );
        assert_eq!(
            parse_spec("{1}", SpecKind::Int).unwrap().width,
            OptValue::Arg(Some(1))
        );
        assert_eq!(
            parse_spec("{1<", SpecKind::Int),
            Err(FormatError::ArgIdTerminator)
        );
    }

    #[test]
    fn precision_only_parsed_where_supported() {
        let spec = parse_spec(".3f", SpecKind::Float).unwrap();
        assert_eq!(spec.precision, OptValue::Literal(3));
        assert_eq!(spec.type_char, Some('f'));

        assert_eq!(
            parse_spec(".3", SpecKind::Str).unwrap().precision,
            OptValue::Literal(3)
        );
        // Int never attempts precision, leaving the '.' unconsumed.
        assert_eq!(
            parse_spec(".3", SpecKind::Int),
            Err(FormatError::UnconsumedInput)
        );
    }

    #[test]
    fn bare_dot_is_missing_precision() {
        assert_eq!(
            parse_spec(".", SpecKind::Float),
            Err(FormatError::PrecisionMissingValue)
        );
        assert_eq!(
            parse_spec(".{}", SpecKind::Float).unwrap().precision,
            OptValue::Arg(None)
        );
    }

    #[test]
    fn locale_flag_per_category() {
        assert!(parse_spec("L", SpecKind::Int).unwrap().locale);
        assert!(parse_spec("L", SpecKind::Char).unwrap().locale);
        assert_eq!(
            parse_spec("L", SpecKind::Pointer),
            Err(FormatError::UnconsumedInput)
        );
        assert_eq!(
            parse_spec("L", SpecKind::Str),
            Err(FormatError::UnconsumedInput)
        );
    }

    #[test]
    fn char_flags_need_integer_presentation() {
        assert_eq!(
            parse_spec("-", SpecKind::Char),
            Err(FormatError::OptionNotAllowed {
                category: "a character",
                option: "sign",
            })
        );
        assert_eq!(
            parse_spec("#", SpecKind::Char),
            Err(FormatError::OptionNotAllowed {
                category: "a character",
                option: "alternate form",
            })
        );
        assert_eq!(
            parse_spec("05", SpecKind::Char),
            Err(FormatError::OptionNotAllowed {
                category: "a character",
                option: "zero-padding",
            })
        );
        // With an integer presentation all three are fine.
        let spec = parse_spec("+#05x", SpecKind::Char).unwrap();
        assert_eq!(spec.sign, Sign::Plus);
        assert!(spec.alternate);
        assert!(spec.zero_pad);
        assert_eq!(spec.type_char, Some('x'));
    }

    #[test]
    fn bool_flags_need_integer_presentation() {
        assert_eq!(
            parse_spec("+", SpecKind::Bool),
            Err(FormatError::OptionNotAllowed {
                category: "a bool",
                option: "sign",
            })
        );
        assert!(parse_spec("+d", SpecKind::Bool).is_ok());
    }

    #[test]
    fn type_alphabet_split() {
        // 'e' is a real type character, wrong category.
        assert_eq!(
            parse_spec("e", SpecKind::Char),
            Err(FormatError::InvalidTypeOption {
                category: "a character",
            })
        );
        // '-' is not a type character at all; Str never parses sign.
        assert_eq!(
            parse_spec("-", SpecKind::Str),
            Err(FormatError::UnconsumedInput)
        );
    }

    #[test]
    fn valid_type_sets() {
        for c in "bBcdoxX?".chars() {
            assert!(parse_spec(&c.to_string(), SpecKind::Char).is_ok(), "{c}");
        }
        for c in "aAeEfFgG".chars() {
            assert!(parse_spec(&c.to_string(), SpecKind::Float).is_ok(), "{c}");
        }
        for c in "pP".chars() {
            assert!(parse_spec(&c.to_string(), SpecKind::Pointer).is_ok(), "{c}");
        }
        assert_eq!(
            parse_spec("d", SpecKind::Pointer),
            Err(FormatError::InvalidTypeOption {
                category: "a pointer",
            })
        );
        assert_eq!(
            parse_spec("x", SpecKind::Str),
            Err(FormatError::InvalidTypeOption {
                category: "a string",
            })
        );
    }

    #[test]
    fn leftover_after_type_is_rejected() {
        assert_eq!(
            parse_spec("d ", SpecKind::Int),
            Err(FormatError::UnconsumedInput)
        );
    }

    #[test]
    fn pointer_zero_pad_but_no_sign() {
        let spec = parse_spec("06p", SpecKind::Pointer).unwrap();
        assert!(spec.zero_pad);
        assert_eq!(spec.width, OptValue::Literal(6));
        assert_eq!(spec.type_char, Some('p'));
        assert_eq!(
            parse_spec("-", SpecKind::Pointer),
            Err(FormatError::UnconsumedInput)
        );
    }
}
