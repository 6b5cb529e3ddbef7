//! Element renderers.
//!
//! Each category turns a value plus a parsed [`Spec`] into text, then the
//! shared padding rules apply fill/align/width. Numeric categories go
//! through [`NumBody`] so zero padding can land between the sign/prefix
//! and the digits.

mod float;
mod int;
mod text;

pub(crate) use text::escape_str;

use crate::error::FormatError;
use crate::locale::{self, NumericLocale};
use crate::spec::{Align, Spec};
use crate::value::Value;

static CLASSIC: NumericLocale = NumericLocale::classic();

/// A numeric rendering split into sign, base prefix, and digits, so zero
/// padding can be inserted in the right place.
pub(crate) struct NumBody {
    pub sign: &'static str,
    pub prefix: &'static str,
    pub digits: String,
    /// Textual bodies (nan/inf, `c` presentation) never zero-pad.
    pub numeric: bool,
}

/// Render a scalar value. `width` and `precision` are already resolved
/// from literals or argument references; `debug` requests the escaped
/// default used for elements of a range without an inner spec.
pub(crate) fn render_scalar(
    value: &Value<'_>,
    spec: &Spec,
    width: Option<usize>,
    precision: Option<usize>,
    debug: bool,
) -> Result<String, FormatError> {
    let active;
    let loc = if spec.locale {
        active = locale::active();
        &active
    } else {
        &CLASSIC
    };

    match *value {
        Value::Char(c) => {
            if spec.integer_presentation() {
                let body = int::int_body(i128::from(u32::from(c)), spec, loc);
                Ok(assemble_number(body, spec, width))
            } else {
                let body = match spec.type_char {
                    Some('?') => text::escape_char(c),
                    None if debug => text::escape_char(c),
                    _ => c.to_string(),
                };
                Ok(apply_padding(&body, spec, width, Align::Left))
            }
        }
        Value::Bool(b) => {
            if spec.integer_presentation() {
                let body = int::int_body(i128::from(b), spec, loc);
                Ok(assemble_number(body, spec, width))
            } else {
                let body = if b { "true" } else { "false" };
                Ok(apply_padding(body, spec, width, Align::Left))
            }
        }
        Value::Int(v) => render_integer(i128::from(v), spec, width, loc),
        Value::Uint(v) => render_integer(i128::from(v), spec, width, loc),
        Value::Float(v) => {
            let body = float::float_body(v, spec, precision, loc);
            Ok(assemble_number(body, spec, width))
        }
        Value::Pointer(addr) => {
            let body = int::pointer_body(addr, spec);
            Ok(assemble_number(body, spec, width))
        }
        Value::Str(s) => {
            let truncated: String = match precision {
                Some(p) => s.chars().take(p).collect(),
                None => s.to_string(),
            };
            let body = match spec.type_char {
                Some('?') => escape_str(&truncated),
                None if debug => escape_str(&truncated),
                _ => truncated,
            };
            Ok(apply_padding(&body, spec, width, Align::Left))
        }
        // Sequences and handles are dispatched before reaching here.
        Value::Handle(_) | Value::Seq(_) => unreachable!("non-scalar in scalar renderer"),
    }
}

fn render_integer(
    value: i128,
    spec: &Spec,
    width: Option<usize>,
    loc: &NumericLocale,
) -> Result<String, FormatError> {
    if spec.type_char == Some('c') {
        let code =
            u32::try_from(value).ok().and_then(char::from_u32).ok_or(FormatError::CharOutOfRange)?;
        return Ok(apply_padding(&code.to_string(), spec, width, Align::Left));
    }
    let body = int::int_body(value, spec, loc);
    Ok(assemble_number(body, spec, width))
}

/// Join a numeric body, inserting zero padding between the prefix and the
/// digits when the `0` flag is in effect, otherwise falling back to the
/// ordinary fill/align rules (numbers align right by default).
pub(crate) fn assemble_number(body: NumBody, spec: &Spec, width: Option<usize>) -> String {
    let content =
        body.sign.chars().count() + body.prefix.chars().count() + body.digits.chars().count();
    let zero_pad = spec.zero_pad && spec.align == Align::Default && body.numeric;
    if let Some(w) = width
        && zero_pad
        && w > content
    {
        let mut out = String::with_capacity(w);
        out.push_str(body.sign);
        out.push_str(body.prefix);
        for _ in 0..w - content {
            out.push('0');
        }
        out.push_str(&body.digits);
        return out;
    }
    let joined = format!("{}{}{}", body.sign, body.prefix, body.digits);
    apply_padding(&joined, spec, width, Align::Right)
}

/// Pad `body` to `width` with the spec's fill and alignment. Widths count
/// code points. Centering puts the extra fill character on the right.
pub(crate) fn apply_padding(
    body: &str,
    spec: &Spec,
    width: Option<usize>,
    default_align: Align,
) -> String {
    pad_to(body, spec.fill, spec.align, default_align, width)
}

pub(crate) fn pad_to(
    body: &str,
    fill: char,
    align: Align,
    default_align: Align,
    width: Option<usize>,
) -> String {
    let count = body.chars().count();
    let Some(w) = width else {
        return body.to_string();
    };
    if w <= count {
        return body.to_string();
    }
    let pad = w - count;
    let align = if align == Align::Default { default_align } else { align };
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
        Align::Default => (0, pad),
    };
    let mut out = String::with_capacity(body.len() + pad);
    for _ in 0..left {
        out.push(fill);
    }
    out.push_str(body);
    for _ in 0..right {
        out.push(fill);
    }
    out
}
