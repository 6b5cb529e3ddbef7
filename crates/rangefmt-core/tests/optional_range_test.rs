//! Integration test: an optional value adapted as a zero-or-one-element
//! range.
//!
//! Run: cargo test -p rangefmt-core --test optional_range_test

mod common;

use common::{check, check_err};
use rangefmt_core::{Sequence, Value, values};

#[test]
fn empty_optional_is_an_empty_range() {
    let none: Option<i32> = None;
    assert_eq!(Sequence::len(&none), 0);
    check("[]", "{}", &values![none]);
    check("", "{:n}", &values![none]);
    check("[]   ", "{:5}", &values![none]);
}

#[test]
fn empty_optional_still_validates_the_element_spec() {
    let none: Option<i32> = None;
    check_err(
        "The type option contains an invalid value for an integer formatting argument",
        "{::e}",
        &values![none],
    );
    check_err(
        "The argument index value is too large for the number of arguments supplied",
        "{::{}}",
        &values![none],
    );
}

#[test]
#[should_panic(expected = "empty option")]
fn out_of_bounds_access_on_an_empty_option_panics() {
    let none: Option<i32> = None;
    let _ = Sequence::get(&none, 0);
}

#[test]
fn populated_optional_yields_exactly_its_value() {
    let some = Some(42);
    assert_eq!(Sequence::len(&some), 1);
    check("[42]", "{}", &values![some]);
    check("42", "{:n}", &values![some]);
    check("[+42]", "{::+}", &values![some]);
    check("[0x2a]", "{::#x}", &values![some]);
}

#[test]
fn optional_char_uses_the_escape_rules() {
    let some = Some('H');
    check("['H']", "{}", &values![some]);
    check("[H]", "{::}", &values![some]);
    check("H", "{:n:}", &values![some]);
}

#[test]
fn optional_string_type_rules_apply() {
    let some = Some('H');
    check("H", "{:s}", &values![some]);
    check("\"H\"", "{:?s}", &values![some]);
    check_err(
        "Type s requires character type as formatting argument",
        "{:s}",
        &values![Some(1)],
    );
    check_err(
        "The n option and type s can't be used together",
        "{:ns}",
        &values![some],
    );
}

#[test]
fn nested_optionals_format_recursively() {
    let inner = Some(42);
    let outer = vec![inner, None, inner];
    check("[[42], [], [42]]", "{}", &values![outer]);
    check("[[0x2a], [], [0x2a]]", "{:::#x}", &values![outer]);
}

#[test]
fn vectors_format_as_ranges_too() {
    let v = vec![1, 2, 3];
    check("[1, 2, 3]", "{}", &values![v]);
    check("[01, 02, 03]", "{::02}", &values![v]);
    check(
        "1, 2, 3",
        "{:n}",
        &values![v],
    );
}
