//! Floating-point bodies.
//!
//! The default presentation is the shortest round-trip form; adding a
//! precision switches to general notation with trailing zeros stripped.
//! `f`/`e`/`g` follow the usual printf families with a default precision
//! of six, and `a` is the hexfloat form built from the bit pattern.

use super::NumBody;
use super::int::sign_str;
use crate::locale::NumericLocale;
use crate::spec::Spec;

pub(super) fn float_body(
    value: f64,
    spec: &Spec,
    precision: Option<usize>,
    loc: &NumericLocale,
) -> NumBody {
    let t = spec.type_char;
    let upper = matches!(t, Some('A' | 'E' | 'F' | 'G'));
    let sign = sign_str(value.is_sign_negative(), spec.sign);

    if value.is_nan() {
        return NumBody::text_signed(sign, if upper { "NAN" } else { "nan" });
    }
    if value.is_infinite() {
        return NumBody::text_signed(sign, if upper { "INF" } else { "inf" });
    }

    let abs = value.abs();
    let hexfloat = matches!(t, Some('a' | 'A'));
    let mut digits = match t {
        Some('f' | 'F') => fixed(abs, precision.unwrap_or(6)),
        Some('e' | 'E') => scientific(abs, precision.unwrap_or(6), upper),
        Some('g' | 'G') => general(abs, precision.unwrap_or(6), upper, spec.alternate),
        Some('a' | 'A') => hexfloat_digits(abs, precision, upper),
        _ => match precision {
            Some(p) => general(abs, p, false, false),
            None => format!("{abs}"),
        },
    };
    if spec.alternate {
        let marker = if hexfloat {
            if upper { 'P' } else { 'p' }
        } else if upper {
            'E'
        } else {
            'e'
        };
        ensure_point(&mut digits, marker);
    }
    if spec.locale && !hexfloat {
        digits = localize(&digits, loc);
    }

    NumBody {
        sign,
        prefix: "",
        digits,
        numeric: true,
    }
}

impl NumBody {
    fn text_signed(sign: &'static str, body: &str) -> Self {
        NumBody {
            sign,
            prefix: "",
            digits: body.to_string(),
            numeric: false,
        }
    }
}

fn fixed(v: f64, p: usize) -> String {
    format!("{v:.p$}")
}

/// Scientific notation with `p` fraction digits. Built by rounding the
/// decimal digit string rather than dividing by a power of ten, which
/// would perturb values that sit exactly on a rounding boundary.
fn scientific(v: f64, p: usize, upper: bool) -> String {
    let (digits, mut exp) = decimal_parts(v);
    let (rounded, carried) = round_digits(&digits, p + 1);
    if carried {
        exp += 1;
    }
    let mut s = String::with_capacity(rounded.len() + 6);
    s.push_str(&rounded[..1]);
    if p > 0 {
        s.push('.');
        s.push_str(&rounded[1..]);
    }
    let e = if upper { 'E' } else { 'e' };
    format!("{s}{e}{exp:+03}")
}

/// Significant digits and decimal exponent from the shortest round-trip
/// form, e.g. `995.0` becomes `("995", 2)`.
fn decimal_parts(v: f64) -> (String, i32) {
    let s = format!("{v:e}");
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Round a significant-digit string down to `keep` digits, ties to even.
/// Returns the digits plus whether the value carried into the next power
/// of ten.
fn round_digits(digits: &str, keep: usize) -> (String, bool) {
    let bytes = digits.as_bytes();
    if bytes.len() <= keep {
        let mut s = digits.to_string();
        while s.len() < keep {
            s.push('0');
        }
        return (s, false);
    }
    let mut kept = bytes[..keep].to_vec();
    let next = bytes[keep] - b'0';
    let tail_nonzero = bytes[keep + 1..].iter().any(|b| *b != b'0');
    let last_odd = (kept[keep - 1] - b'0') % 2 == 1;
    if next > 5 || (next == 5 && (tail_nonzero || last_odd)) {
        let mut i = keep;
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                kept.truncate(keep);
                return (String::from_utf8_lossy(&kept).into_owned(), true);
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }
    (String::from_utf8_lossy(&kept).into_owned(), false)
}

/// Decimal exponent the value lands on after rounding to `sig`
/// significant digits.
fn rounded_exponent(v: f64, sig: usize) -> i32 {
    let (digits, exp) = decimal_parts(v);
    let (_, carried) = round_digits(&digits, sig);
    if carried { exp + 1 } else { exp }
}

/// printf `g`: fixed when the exponent fits in the precision, scientific
/// otherwise, with trailing fraction zeros stripped unless the alternate
/// form asked for them.
fn general(v: f64, p: usize, upper: bool, keep_zeros: bool) -> String {
    let p = p.max(1);
    let exp = if v == 0.0 { 0 } else { rounded_exponent(v, p) };
    let mut s = if exp >= -4 && i64::from(exp) < p as i64 {
        let frac = (p as i64 - 1 - i64::from(exp)).max(0) as usize;
        fixed(v, frac)
    } else {
        scientific(v, p - 1, upper)
    };
    if !keep_zeros {
        strip_zeros(&mut s);
    }
    s
}

fn strip_zeros(s: &mut String) {
    let end = s.find(['e', 'E']).unwrap_or(s.len());
    if !s[..end].contains('.') {
        return;
    }
    let mut cut = end;
    while s[..cut].ends_with('0') {
        cut -= 1;
    }
    if s[..cut].ends_with('.') {
        cut -= 1;
    }
    s.replace_range(cut..end, "");
}

/// Insert the trailing decimal point the `#` flag requires, just before
/// the exponent when one is present.
fn ensure_point(s: &mut String, marker: char) {
    if s.contains('.') {
        return;
    }
    match s.find(marker) {
        Some(i) => s.insert(i, '.'),
        None => s.push('.'),
    }
}

/// Hexfloat from the IEEE 754 bit pattern: an implicit leading 1 (0 for
/// zero and subnormals), the 52 fraction bits as hex digits, and a binary
/// exponent. Without a precision, trailing zero digits are dropped.
fn hexfloat_digits(v: f64, precision: Option<usize>, upper: bool) -> String {
    let bits = v.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & 0x000f_ffff_ffff_ffff;
    let (lead, exp) = if exp_bits == 0 {
        if frac == 0 { (0, 0) } else { (0, -1022) }
    } else {
        (1, exp_bits - 1023)
    };
    let mut frac_hex = format!("{frac:013x}");
    match precision {
        Some(p) => {
            frac_hex.truncate(p);
            while frac_hex.len() < p {
                frac_hex.push('0');
            }
        }
        None => {
            while frac_hex.ends_with('0') {
                frac_hex.pop();
            }
        }
    }
    let mut s = lead.to_string();
    if !frac_hex.is_empty() {
        s.push('.');
        s.push_str(&frac_hex);
    }
    s.push('p');
    s.push_str(&format!("{exp:+}"));
    if upper { s.to_uppercase() } else { s }
}

/// Swap in the locale decimal point and group the integral digits.
fn localize(digits: &str, loc: &NumericLocale) -> String {
    let end = digits.find(['e', 'E']).unwrap_or(digits.len());
    let (num, suffix) = digits.split_at(end);
    let (int_part, frac) = match num.find('.') {
        Some(i) => (&num[..i], Some(&num[i + 1..])),
        None => (num, None),
    };
    let mut out = loc.group_digits(int_part);
    if let Some(f) = frac {
        out.push(loc.decimal_point);
        out.push_str(f);
    }
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SpecKind, parse_spec};

    fn body(value: f64, spec_text: &str) -> String {
        let spec = parse_spec(spec_text, SpecKind::Float).unwrap();
        let precision = match spec.precision {
            crate::spec::OptValue::Literal(p) => Some(p),
            _ => None,
        };
        let b = float_body(value, &spec, precision, &NumericLocale::classic());
        format!("{}{}", b.sign, b.digits)
    }

    #[test]
    fn default_is_shortest() {
        assert_eq!(body(-42.5, ""), "-42.5");
        assert_eq!(body(0.0, ""), "0");
        assert_eq!(body(1.25, ""), "1.25");
    }

    #[test]
    fn alternate_forces_a_point() {
        assert_eq!(body(-42.5, "#"), "-42.5");
        assert_eq!(body(0.0, "#"), "0.");
        assert_eq!(body(42.5, "#"), "42.5");
    }

    #[test]
    fn default_with_precision_strips() {
        assert_eq!(body(-42.5, ".2"), "-42");
        assert_eq!(body(0.0, ".2"), "0");
        assert_eq!(body(1.25, ".2"), "1.2");
        assert_eq!(body(42.5, ".2"), "42");
    }

    #[test]
    fn fixed_family() {
        assert_eq!(body(-42.5, ".3f"), "-42.500");
        assert_eq!(body(0.0, ".3f"), "0.000");
        assert_eq!(body(42.5, "f"), "42.500000");
        assert_eq!(body(42.5, ".0f"), "42");
        assert_eq!(body(42.5, "#.0f"), "42.");
    }

    #[test]
    fn scientific_family() {
        assert_eq!(body(42.5, ".2e"), "4.25e+01");
        assert_eq!(body(42.5, ".2E"), "4.25E+01");
        assert_eq!(body(0.0, ".1e"), "0.0e+00");
        assert_eq!(body(995.0, ".1e"), "1.0e+03");
        assert_eq!(body(985.0, ".1e"), "9.8e+02");
        assert_eq!(body(0.001, ".1e"), "1.0e-03");
    }

    #[test]
    fn general_family() {
        assert_eq!(body(42.5, "g"), "42.5");
        assert_eq!(body(0.0001, "g"), "0.0001");
        assert_eq!(body(0.00001, "g"), "1e-05");
        assert_eq!(body(1234567.0, ".3g"), "1.23e+06");
        assert_eq!(body(100.0, "#g"), "100.000");
    }

    #[test]
    fn hexfloat() {
        assert_eq!(body(1.25, "a"), "1.4p+0");
        assert_eq!(body(1.25, "A"), "1.4P+0");
        assert_eq!(body(0.0, "a"), "0p+0");
        assert_eq!(body(2.0, "a"), "1p+1");
        assert_eq!(body(0.5, "a"), "1p-1");
    }

    #[test]
    fn specials() {
        assert_eq!(body(f64::NAN, ""), "nan");
        assert_eq!(body(f64::INFINITY, "E"), "INF");
        assert_eq!(body(f64::NEG_INFINITY, ""), "-inf");
        assert_eq!(body(-0.0, ""), "-0");
    }

    #[test]
    fn localized_decimal_point() {
        let fr = NumericLocale::grouped(',', ' ');
        let spec = parse_spec("L", SpecKind::Float).unwrap();
        let b = float_body(-42.5, &spec, None, &fr);
        assert_eq!(format!("{}{}", b.sign, b.digits), "-42,5");
        let b = float_body(1234.5, &spec, None, &fr);
        assert_eq!(b.digits, "1 234,5");
    }
}
