//! Format-string walker and field dispatch.
//!
//! [`vformat`] scans the format string, expands `{{`/`}}` escapes, parses
//! each replacement field, and hands the field's spec text to the right
//! consumer: the range renderer for sequences, the handle's own `parse`
//! for user types, and the scalar tokenizer/renderer for everything else.

use crate::error::FormatError;
use crate::range;
use crate::render::render_scalar;
use crate::spec::{OptValue, parse_spec};
use crate::value::Value;

/// Tracks which argument the next `{}` takes, and polices the rule that
/// automatic and manual indexing never mix within one format string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArgCursor {
    mode: IndexMode,
    next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexMode {
    Unknown,
    Auto,
    Manual,
}

impl ArgCursor {
    fn new() -> Self {
        ArgCursor {
            mode: IndexMode::Unknown,
            next: 0,
        }
    }

    /// Pick the argument index for a field or an option reference.
    pub(crate) fn select(
        &mut self,
        explicit: Option<usize>,
        count: usize,
    ) -> Result<usize, FormatError> {
        let index = match explicit {
            Some(i) => {
                if self.mode == IndexMode::Auto {
                    return Err(FormatError::MixedIndexing);
                }
                self.mode = IndexMode::Manual;
                i
            }
            None => {
                if self.mode == IndexMode::Manual {
                    return Err(FormatError::MixedIndexing);
                }
                self.mode = IndexMode::Auto;
                let i = self.next;
                self.next += 1;
                i
            }
        };
        if index >= count {
            return Err(FormatError::ArgIndexTooLarge);
        }
        Ok(index)
    }

    /// Resolve a width or precision option to a number, pulling from the
    /// argument list when the option is a `{}`/`{N}` reference. Values
    /// past [`MAX_OPTION`] are rejected, so a resolved option can never
    /// drive the renderers into unbounded allocation.
    pub(crate) fn resolve_opt(
        &mut self,
        opt: OptValue,
        args: &[Value<'_>],
    ) -> Result<Option<usize>, FormatError> {
        match opt {
            OptValue::None => Ok(None),
            OptValue::Literal(v) => bounded(v).map(Some),
            OptValue::Arg(explicit) => {
                let index = self.select(explicit, args.len())?;
                let value = match args[index] {
                    Value::Int(v) if v >= 0 => v.unsigned_abs(),
                    Value::Uint(v) => v,
                    _ => return Err(FormatError::NotAnInteger),
                };
                let value = usize::try_from(value).map_err(|_| FormatError::NumberTooLarge)?;
                bounded(value).map(Some)
            }
        }
    }
}

/// Largest width or precision a spec may resolve to.
const MAX_OPTION: usize = u32::MAX as usize;

fn bounded(value: usize) -> Result<usize, FormatError> {
    if value > MAX_OPTION {
        return Err(FormatError::NumberTooLarge);
    }
    Ok(value)
}

/// Format `fmt` against `args`, reporting malformed fields as errors
/// before any output is observable.
pub fn vformat(fmt: &str, args: &[Value<'_>]) -> Result<String, FormatError> {
    let chars: Vec<char> = fmt.chars().collect();
    let mut out = String::with_capacity(fmt.len());
    let mut cursor = ArgCursor::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '{' if chars.get(i + 1) == Some(&'{') => {
                out.push('{');
                i += 2;
            }
            '}' if chars.get(i + 1) == Some(&'}') => {
                out.push('}');
                i += 2;
            }
            '}' => return Err(FormatError::InvalidEscape),
            '{' => {
                i += 1;
                let (explicit, spec_text, after) = split_field(&chars, i)?;
                i = after;
                let index = cursor.select(explicit, args.len())?;
                format_field(args[index], &spec_text, &mut cursor, args, &mut out)?;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    Ok(out)
}

/// [`vformat`] for format strings the caller guarantees are valid; a
/// malformed spec is a caller bug.
///
/// # Panics
///
/// Panics with the diagnostic text when the format string is malformed
/// or inconsistent with the arguments.
#[must_use]
pub fn format(fmt: &str, args: &[Value<'_>]) -> String {
    match vformat(fmt, args) {
        Ok(s) => s,
        Err(e) => panic!("invalid format string: {e}"),
    }
}

/// Parse the inside of a replacement field starting at `start` (just past
/// the `{`). Returns the explicit arg-id, the raw spec text, and the
/// index just past the closing `}`.
fn split_field(
    chars: &[char],
    start: usize,
) -> Result<(Option<usize>, String, usize), FormatError> {
    let mut i = start;

    let mut explicit = None;
    let digits_start = i;
    let mut id = 0_usize;
    while let Some(c) = chars.get(i)
        && let Some(d) = c.to_digit(10)
    {
        id = id.saturating_mul(10).saturating_add(d as usize);
        i += 1;
    }
    if i > digits_start {
        explicit = Some(id);
    }

    match chars.get(i) {
        Some('}') => Ok((explicit, String::new(), i + 1)),
        Some(':') => {
            i += 1;
            let spec_start = i;
            loop {
                match chars.get(i) {
                    None => return Err(FormatError::UnterminatedField),
                    Some('}') => break,
                    Some('{') => {
                        // Only a `{}`/`{N}` option reference nests; any
                        // other `{` is ordinary spec text for the spec
                        // parser to judge.
                        let mut j = i + 1;
                        while chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
                            j += 1;
                        }
                        if chars.get(j) == Some(&'}') {
                            i = j + 1;
                        } else {
                            i += 1;
                        }
                    }
                    Some(_) => i += 1,
                }
            }
            let spec: String = chars[spec_start..i].iter().collect();
            Ok((explicit, spec, i + 1))
        }
        None => Err(FormatError::UnterminatedField),
        Some(_) => Err(FormatError::ArgIdTerminator),
    }
}

fn format_field(
    value: Value<'_>,
    spec_text: &str,
    cursor: &mut ArgCursor,
    args: &[Value<'_>],
    out: &mut String,
) -> Result<(), FormatError> {
    match value {
        Value::Seq(seq) => {
            out.push_str(&range::render_seq(seq, spec_text, cursor, args)?);
            Ok(())
        }
        Value::Handle(handle) => {
            let state = handle.parse(spec_text)?;
            handle.format(&state, out)
        }
        scalar => {
            // Non-scalars are matched above.
            let Some(kind) = scalar.spec_kind() else {
                return Err(FormatError::UnconsumedInput);
            };
            let spec = parse_spec(spec_text, kind)?;
            let width = cursor.resolve_opt(spec.width, args)?;
            let precision = cursor.resolve_opt(spec.precision, args)?;
            out.push_str(&render_scalar(&scalar, &spec, width, precision, false)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn literal_text_and_escapes() {
        assert_eq!(vformat("plain", &[]).unwrap(), "plain");
        assert_eq!(vformat("{{}}", &[]).unwrap(), "{}");
        assert_eq!(vformat("a{{b}}c", &[]).unwrap(), "a{b}c");
    }

    #[test]
    fn lone_braces_are_invalid() {
        assert_eq!(vformat("}", &[]), Err(FormatError::InvalidEscape));
        assert_eq!(vformat("x } y", &[]), Err(FormatError::InvalidEscape));
        assert_eq!(vformat("{", &[]), Err(FormatError::UnterminatedField));
        assert_eq!(vformat("{:5", &values![1]), Err(FormatError::UnterminatedField));
    }

    #[test]
    fn automatic_and_manual_indexing() {
        assert_eq!(vformat("{} {}", &values![1, 2]).unwrap(), "1 2");
        assert_eq!(vformat("{1} {0}", &values![1, 2]).unwrap(), "2 1");
        assert_eq!(vformat("{0} {0}", &values![7]).unwrap(), "7 7");
        assert_eq!(
            vformat("{} {0}", &values![1, 2]),
            Err(FormatError::MixedIndexing)
        );
        assert_eq!(
            vformat("{0} {}", &values![1, 2]),
            Err(FormatError::MixedIndexing)
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(vformat("{}", &[]), Err(FormatError::ArgIndexTooLarge));
        assert_eq!(vformat("{2}", &values![1, 2]), Err(FormatError::ArgIndexTooLarge));
        assert_eq!(
            vformat("{:{}}", &values![1]),
            Err(FormatError::ArgIndexTooLarge)
        );
    }

    #[test]
    fn arg_id_terminator() {
        assert_eq!(vformat("{0 }", &values![1]), Err(FormatError::ArgIdTerminator));
    }

    #[test]
    fn dynamic_width_and_precision() {
        assert_eq!(vformat("{:{}}", &values![42, 5]).unwrap(), "   42");
        assert_eq!(vformat("{0:{1}}", &values![42, 5]).unwrap(), "   42");
        assert_eq!(
            vformat("{:.{}}", &values!["Hello", 3]).unwrap(),
            "Hel"
        );
        assert_eq!(
            vformat("{:{}}", &values![42, "x"]),
            Err(FormatError::NotAnInteger)
        );
        assert_eq!(
            vformat("{:{}}", &values![42, -1]),
            Err(FormatError::NotAnInteger)
        );
    }

    #[test]
    fn oversized_width_and_precision_are_rejected() {
        // A 20-digit literal saturates the scanner; the resolved value
        // must fail, not feed the renderers.
        assert_eq!(
            vformat("{:.99999999999999999999e}", &values![1.0]),
            Err(FormatError::NumberTooLarge)
        );
        assert_eq!(
            vformat("{:99999999999999999999}", &values![1]),
            Err(FormatError::NumberTooLarge)
        );
        assert_eq!(
            vformat("{:{}}", &values![1, u64::MAX]),
            Err(FormatError::NumberTooLarge)
        );
        assert_eq!(
            vformat("{:.{}}", &values!["x", u64::MAX]),
            Err(FormatError::NumberTooLarge)
        );
    }

    #[test]
    fn brace_as_fill_is_rejected_not_misparsed() {
        // `{` is picked up as a (bad) fill character, not as an
        // unterminated field.
        assert_eq!(vformat("{:{<}", &values![1]), Err(FormatError::InvalidFill));
    }

    #[test]
    #[should_panic(expected = "invalid format string")]
    fn format_panics_on_bad_spec() {
        let _ = format("{:q}", &values![1]);
    }

    #[test]
    fn format_renders_like_vformat() {
        assert_eq!(format("{:#06x}", &values![255]), "0x00ff");
    }
}
