//! Numeric locale support for the `L` spec flag.
//!
//! Only the conventions the renderer consumes are modeled: the decimal
//! point, the thousands separator, and the grouping specification. The
//! process-wide active locale may be swapped between formatting calls,
//! never during one; [`set_active`] returns the previous locale so callers
//! (tests in particular) can restore it.

use parking_lot::RwLock;

/// Numeric formatting conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLocale {
    /// Decimal-point character.
    pub decimal_point: char,
    /// Thousands separator; `None` disables grouping entirely.
    pub thousands_sep: Option<char>,
    /// Group sizes from the least significant digit outward; the last
    /// entry repeats. Empty means no grouping.
    pub grouping: Vec<u8>,
}

impl NumericLocale {
    /// The minimal "C" locale: `.` decimal point, no grouping.
    #[must_use]
    pub const fn classic() -> Self {
        NumericLocale {
            decimal_point: '.',
            thousands_sep: None,
            grouping: Vec::new(),
        }
    }

    /// A locale with a separator applied in groups of three.
    #[must_use]
    pub fn grouped(decimal_point: char, thousands_sep: char) -> Self {
        NumericLocale {
            decimal_point,
            thousands_sep: Some(thousands_sep),
            grouping: vec![3],
        }
    }

    /// Insert the thousands separator into a run of integer digits.
    ///
    /// `digits` must contain digits only (no sign or prefix).
    #[must_use]
    pub fn group_digits(&self, digits: &str) -> String {
        let Some(sep) = self.thousands_sep else {
            return digits.to_string();
        };
        if self.grouping.is_empty() {
            return digits.to_string();
        }

        let chars: Vec<char> = digits.chars().collect();
        let mut groups: Vec<usize> = Vec::new();
        let mut remaining = chars.len();
        let mut sizes = self.grouping.iter().copied();
        let mut size = sizes.next().unwrap_or(0) as usize;
        while remaining > size && size > 0 {
            groups.push(size);
            remaining -= size;
            if let Some(next) = sizes.next() {
                size = next as usize;
            }
        }
        groups.push(remaining);

        let mut out = String::with_capacity(chars.len() + groups.len());
        let mut pos = chars.len();
        for (i, group) in groups.iter().rev().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.extend(&chars[pos - group..pos]);
            pos -= group;
        }
        out
    }
}

impl Default for NumericLocale {
    fn default() -> Self {
        NumericLocale::classic()
    }
}

static ACTIVE: RwLock<NumericLocale> = RwLock::new(NumericLocale::classic());

/// Snapshot of the process-wide active locale.
#[must_use]
pub fn active() -> NumericLocale {
    ACTIVE.read().clone()
}

/// Replace the active locale, returning the previous one.
pub fn set_active(locale: NumericLocale) -> NumericLocale {
    std::mem::replace(&mut *ACTIVE.write(), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_does_not_group() {
        let c = NumericLocale::classic();
        assert_eq!(c.group_digits("1234567"), "1234567");
    }

    #[test]
    fn grouped_by_threes() {
        let l = NumericLocale::grouped(',', '.');
        assert_eq!(l.group_digits("1"), "1");
        assert_eq!(l.group_digits("1234"), "1.234");
        assert_eq!(l.group_digits("1234567"), "1.234.567");
    }

    #[test]
    fn mixed_group_sizes_repeat_last() {
        let l = NumericLocale {
            decimal_point: '.',
            thousands_sep: Some(','),
            grouping: vec![3, 2],
        };
        // Indian-style grouping: 12,34,56,789.
        assert_eq!(l.group_digits("123456789"), "12,34,56,789");
    }

    #[test]
    fn swap_returns_previous() {
        let previous = set_active(NumericLocale::grouped(',', ' '));
        assert_eq!(active().decimal_point, ',');
        set_active(previous);
        assert_eq!(active(), NumericLocale::classic());
    }
}
