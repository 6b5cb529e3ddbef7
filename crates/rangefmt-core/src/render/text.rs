//! Escaped character and string presentations.
//!
//! The `?` type (and the default for elements of a range with no inner
//! spec) quotes the value and escapes the characters that would be
//! ambiguous inside the quotes, plus anything non-printable.

use std::fmt::Write as _;

/// `'c'` form of a single character.
pub(crate) fn escape_char(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    escape_into(&mut out, c, '\'');
    out.push('\'');
    out
}

/// `"..."` form of a string.
pub(crate) fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        escape_into(&mut out, c, '"');
    }
    out.push('"');
    out
}

fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_characters_pass_through() {
        assert_eq!(escape_char('H'), "'H'");
        assert_eq!(escape_str("Hello"), "\"Hello\"");
    }

    #[test]
    fn named_escapes() {
        assert_eq!(escape_char('\t'), "'\\t'");
        assert_eq!(escape_char('\n'), "'\\n'");
        assert_eq!(escape_char('\\'), "'\\\\'");
        assert_eq!(escape_char('\''), "'\\''");
        assert_eq!(escape_str("a\"b"), "\"a\\\"b\"");
        // The other quote is not special.
        assert_eq!(escape_char('"'), "'\"'");
        assert_eq!(escape_str("it's"), "\"it's\"");
    }

    #[test]
    fn control_characters_use_codepoint_form() {
        assert_eq!(escape_char('\u{0}'), "'\\u{0}'");
        assert_eq!(escape_char('\u{7f}'), "'\\u{7f}'");
        assert_eq!(escape_str("a\u{1}b"), "\"a\\u{1}b\"");
    }
}
