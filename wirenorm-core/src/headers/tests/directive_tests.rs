use crate::headers::{Directive, parse_directive_value_as_seconds, parse_directives};
use pretty_assertions::assert_eq;

fn directives(input: &str) -> Vec<(String, Option<String>)> {
    parse_directives(input)
        .into_iter()
        .map(|Directive { name, value }| (name, value))
        .collect()
}

fn expected(pairs: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
    pairs
        .iter()
        .map(|(n, v)| (n.to_string(), v.map(str::to_string)))
        .collect()
}

//-----------------------------------------------------------------------------
// parse_directives
//-----------------------------------------------------------------------------
#[test]
fn ignore_effectively_empty_input() {
    assert!(directives("").is_empty());
    assert!(directives(" \t ").is_empty());
    assert!(directives(" ,,=, =,= ,").is_empty());
}

#[test]
fn parse_name_only() {
    for input in ["no-cache", " no-cache ", "no-cache ,"] {
        assert_eq!(directives(input), expected(&[("no-cache", None)]), "{input:?}");
    }
}

#[test]
fn parse_name_and_value() {
    for input in [
        "max-age=86400",
        " max-age = 86400 ",
        " max-age = 86400 ,",
        "max-age=\"86400\"",
        " max-age = \"86400\" ",
        " max-age = \"86400\" ,",
    ] {
        assert_eq!(
            directives(input),
            expected(&[("max-age", Some("86400"))]),
            "{input:?}"
        );
    }
}

#[test]
fn parse_multiple_directives_in_order() {
    assert_eq!(
        directives("a,b=c,d,e=\"f\",g"),
        expected(&[
            ("a", None),
            ("b", Some("c")),
            ("d", None),
            ("e", Some("f")),
            ("g", None),
        ])
    );
}

#[test]
fn lowercase_names_but_not_values() {
    assert_eq!(
        directives("No-Store, Private=\"X-Token\""),
        expected(&[("no-store", None), ("private", Some("X-Token"))])
    );
}

#[test]
fn report_empty_value_as_absent() {
    assert_eq!(
        directives("max-age=, s-maxage=\"\""),
        expected(&[("max-age", None), ("s-maxage", None)])
    );
}

//-----------------------------------------------------------------------------
// parse_directive_value_as_seconds
//-----------------------------------------------------------------------------
#[test]
fn parse_seconds() {
    assert_eq!(parse_directive_value_as_seconds(Some("86400")), Some(86400));
    assert_eq!(parse_directive_value_as_seconds(Some("0")), Some(0));
}

#[test]
fn reject_invalid_seconds() {
    assert_eq!(parse_directive_value_as_seconds(None), None);
    assert_eq!(parse_directive_value_as_seconds(Some("-1")), None);
    assert_eq!(parse_directive_value_as_seconds(Some("1.5")), None);
    assert_eq!(parse_directive_value_as_seconds(Some("forever")), None);
}
