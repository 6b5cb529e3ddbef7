//! Whole-sequence rendering.
//!
//! A sequence field's spec splits in two at the second `:`. The outer
//! part governs the bracketed whole (fill/align/width, the `n` flag, and
//! the `m`/`s`/`?s` range types); everything after the `:` is handed
//! unmodified to the element category's own tokenizer, or to the
//! handle's `parse` for user-defined element types.

use crate::adapt::SeqRef;
use crate::engine::ArgCursor;
use crate::error::FormatError;
use crate::handle::HandleState;
use crate::render::{escape_str, pad_to, render_scalar};
use crate::spec::{Align, OptValue, Scanner, Spec, parse_spec};
use crate::value::Value;

/// How the sequence as a whole is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeType {
    /// `[e0, e1, ...]`
    Default,
    /// `m`: key-value presentation; always rejected since no pair
    /// element category exists.
    Map,
    /// `s`: a char sequence as one plain string.
    Str,
    /// `?s`: a char sequence as one quoted, escaped string.
    DebugStr,
}

impl RangeType {
    fn name(self) -> &'static str {
        match self {
            RangeType::Str => "s",
            RangeType::DebugStr => "?s",
            RangeType::Default | RangeType::Map => "",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RangeSpec {
    pub fill: char,
    pub align: Align,
    pub width: OptValue,
    /// `n`: drop the brackets, keep the separators.
    pub suppress: bool,
    pub rtype: RangeType,
    /// Raw element spec after the `:`; `Some("")` and `None` differ:
    /// an empty element spec selects plain element rendering, while no
    /// element spec at all renders char and string elements escaped.
    pub inner: Option<String>,
}

pub(crate) fn parse_range_spec(input: &str) -> Result<RangeSpec, FormatError> {
    let mut scanner = Scanner::new(input);

    // A leading `:` always hands the rest to the element spec; it is
    // never an outer fill character.
    if scanner.accept(':') {
        return Ok(RangeSpec {
            fill: ' ',
            align: Align::Default,
            width: OptValue::None,
            suppress: false,
            rtype: RangeType::Default,
            inner: Some(scanner.rest()),
        });
    }

    let (fill, align) = scanner.fill_and_align()?;
    let width = scanner.width()?;
    let suppress = scanner.accept('n');

    let rtype = if scanner.accept('m') {
        RangeType::Map
    } else if scanner.accept('s') {
        RangeType::Str
    } else if scanner.peek() == Some('?') && scanner.peek_second() == Some('s') {
        scanner.bump();
        scanner.bump();
        RangeType::DebugStr
    } else {
        RangeType::Default
    };

    let inner = if scanner.accept(':') {
        Some(scanner.rest())
    } else {
        if !scanner.at_end() {
            return Err(FormatError::UnconsumedInput);
        }
        None
    };

    if matches!(rtype, RangeType::Str | RangeType::DebugStr) {
        let rtype = rtype.name();
        if suppress {
            return Err(FormatError::SuppressWithStringType { rtype });
        }
        if inner.is_some() {
            return Err(FormatError::StringTypeWithElementSpec { rtype });
        }
    }

    Ok(RangeSpec {
        fill,
        align,
        width,
        suppress,
        rtype,
        inner,
    })
}

/// Element rendering strategy, fixed by the first element so the spec is
/// tokenized (and its argument references resolved) exactly once.
enum Plan {
    Scalar {
        spec: Spec,
        width: Option<usize>,
        precision: Option<usize>,
    },
    Handle(HandleState),
    Nested,
    Empty,
}

pub(crate) fn render_seq(
    seq: SeqRef<'_>,
    spec_text: &str,
    cursor: &mut ArgCursor,
    args: &[Value<'_>],
) -> Result<String, FormatError> {
    let rspec = parse_range_spec(spec_text)?;

    // Option references resolve eagerly, in auto-index order, before any
    // element is rendered; an out-of-range index fails even when the
    // value would go unused.
    let width = cursor.resolve_opt(rspec.width, args)?;

    if rspec.rtype == RangeType::Map {
        return Err(FormatError::MapTypeRequiresPair);
    }

    // No element spec at all puts char and string elements in their
    // escaped form; an element spec, even an empty one, switches to
    // plain rendering.
    let debug = rspec.inner.is_none();
    let inner_text = rspec.inner.as_deref().unwrap_or("");

    if matches!(rspec.rtype, RangeType::Str | RangeType::DebugStr) {
        let mut joined = String::with_capacity(seq.len());
        for i in 0..seq.len() {
            match seq.get(i) {
                Value::Char(c) => joined.push(c),
                _ => {
                    return Err(FormatError::StringTypeRequiresChar {
                        rtype: rspec.rtype.name(),
                    });
                }
            }
        }
        let body = if rspec.rtype == RangeType::DebugStr {
            escape_str(&joined)
        } else {
            joined
        };
        return Ok(pad_to(&body, rspec.fill, rspec.align, Align::Left, width));
    }

    let plan = if seq.is_empty() {
        // Nothing renders, but the element spec is still tokenized and
        // its option references still resolve; validation never depends
        // on the data.
        if let Some(kind) = seq.elem_kind() {
            let spec = parse_spec(inner_text, kind)?;
            cursor.resolve_opt(spec.width, args)?;
            cursor.resolve_opt(spec.precision, args)?;
        }
        Plan::Empty
    } else {
        match seq.get(0) {
            Value::Handle(handle) => Plan::Handle(handle.parse(inner_text)?),
            Value::Seq(_) => Plan::Nested,
            first => {
                // Scalars all have a spec category.
                let Some(kind) = first.spec_kind() else {
                    return Err(FormatError::UnconsumedInput);
                };
                let spec = parse_spec(inner_text, kind)?;
                let width = cursor.resolve_opt(spec.width, args)?;
                let precision = cursor.resolve_opt(spec.precision, args)?;
                Plan::Scalar {
                    spec,
                    width,
                    precision,
                }
            }
        }
    };

    let mut body = String::new();
    if !rspec.suppress {
        body.push('[');
    }
    for i in 0..seq.len() {
        if i > 0 {
            body.push_str(", ");
        }
        let elem = seq.get(i);
        match (&plan, elem) {
            (Plan::Handle(state), Value::Handle(handle)) => handle.format(state, &mut body)?,
            (_, Value::Handle(handle)) => {
                let state = handle.parse(inner_text)?;
                handle.format(&state, &mut body)?;
            }
            (_, Value::Seq(nested)) => {
                body.push_str(&render_seq(nested, inner_text, cursor, args)?);
            }
            (
                Plan::Scalar {
                    spec,
                    width,
                    precision,
                },
                elem,
            ) => {
                body.push_str(&render_scalar(&elem, spec, *width, *precision, debug)?);
            }
            (_, elem) => {
                // A scalar after a non-scalar first element; tokenize on
                // its own category.
                let Some(kind) = elem.spec_kind() else {
                    return Err(FormatError::UnconsumedInput);
                };
                let spec = parse_spec(inner_text, kind)?;
                body.push_str(&render_scalar(&elem, &spec, None, None, debug)?);
            }
        }
    }
    if !rspec.suppress {
        body.push(']');
    }
    Ok(pad_to(&body, rspec.fill, rspec.align, Align::Left, width))
}
