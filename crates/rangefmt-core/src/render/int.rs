//! Integer and pointer bodies.

use super::NumBody;
use crate::locale::NumericLocale;
use crate::spec::{Sign, Spec};

/// Build the sign/prefix/digits body for an integer value. The `c`
/// presentation is handled by the caller; everything that reaches here is
/// a digit presentation.
pub(super) fn int_body(value: i128, spec: &Spec, loc: &NumericLocale) -> NumBody {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();

    let (digits, prefix) = match spec.type_char {
        Some('b') => (format!("{magnitude:b}"), "0b"),
        Some('B') => (format!("{magnitude:b}"), "0B"),
        Some('o') => {
            // The octal prefix is a bare "0", omitted for the value zero.
            let p = if magnitude != 0 { "0" } else { "" };
            (format!("{magnitude:o}"), p)
        }
        Some('x') => (format!("{magnitude:x}"), "0x"),
        Some('X') => (format!("{magnitude:X}"), "0X"),
        _ => (format!("{magnitude}"), ""),
    };
    let prefix = if spec.alternate { prefix } else { "" };

    let digits = if spec.locale && matches!(spec.type_char, None | Some('d')) {
        loc.group_digits(&digits)
    } else {
        digits
    };

    NumBody {
        sign: sign_str(negative, spec.sign),
        prefix,
        digits,
        numeric: true,
    }
}

/// Pointers render as a hexadecimal address with a mandatory base prefix.
pub(super) fn pointer_body(addr: usize, spec: &Spec) -> NumBody {
    let (digits, prefix) = if spec.type_char == Some('P') {
        (format!("{addr:X}"), "0X")
    } else {
        (format!("{addr:x}"), "0x")
    };
    NumBody {
        sign: "",
        prefix,
        digits,
        numeric: true,
    }
}

pub(super) fn sign_str(negative: bool, sign: Sign) -> &'static str {
    if negative {
        "-"
    } else {
        match sign {
            Sign::Plus => "+",
            Sign::Space => " ",
            Sign::Default | Sign::Minus => "",
        }
    }
}
