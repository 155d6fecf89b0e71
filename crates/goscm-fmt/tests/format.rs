//! Layout snapshots and formatter properties.

use goscm_fmt::{format_source, read, FormatConfig, ReadError};
use insta::assert_snapshot;
use proptest::prelude::*;

fn width(max_width: usize) -> FormatConfig {
    FormatConfig {
        max_width,
        ..FormatConfig::default()
    }
}

fn fmt(source: &str, config: &FormatConfig) -> String {
    format_source(source, config).unwrap()
}

const ADD: &str = "(package main (define-func (Add #(a int) #(b int) int) (return (+ a b))))";

#[test]
fn short_program_stays_on_one_line() {
    assert_eq!(fmt(ADD, &FormatConfig::default()), format!("{ADD}\n"));
}

#[test]
fn narrow_width_breaks_outer_forms_first() {
    assert_snapshot!(fmt(ADD, &width(40)).trim_end(), @r"
    (package main
      (define-func
        (Add #(a int) #(b int) int)
        (return (+ a b))))
    ");
}

#[test]
fn indent_size_is_configurable() {
    let config = FormatConfig {
        indent_size: 4,
        max_width: 40,
    };
    assert_snapshot!(fmt(ADD, &config).trim_end(), @r"
    (package main
        (define-func
            (Add #(a int) #(b int) int)
            (return (+ a b))))
    ");
}

#[test]
fn switch_clauses_break_independently() {
    let source = "(cond! ((< x 0) (neg)) ((or (== x 0) (== y 0)) (zero)) (else (pos)))";
    assert_snapshot!(fmt(source, &width(30)).trim_end(), @r"
    (cond!
      ((< x 0) (neg))
      ((or (== x 0) (== y 0))
        (zero))
      (else (pos)))
    ");
}

#[test]
fn atom_runs_never_break() {
    let source = "(define-type Alpha int Beta string Gamma float64)";
    assert_eq!(fmt(source, &width(10)), format!("{source}\n"));
}

#[test]
fn raw_strings_are_copied_verbatim() {
    let source = "(define-const (= usage `a\n  b`))";
    assert_eq!(
        fmt(source, &FormatConfig::default()),
        "(define-const\n  (= usage `a\n  b`))\n"
    );
}

#[test]
fn whitespace_in_input_is_irrelevant() {
    let messy = "(package   main\n\n\t(define-var #(x int)))";
    assert_eq!(
        fmt(messy, &FormatConfig::default()),
        "(package main (define-var #(x int)))\n"
    );
}

#[test]
fn read_errors_surface() {
    assert!(matches!(
        format_source("(package main", &FormatConfig::default()),
        Err(ReadError::Unclosed { what: "list", .. })
    ));
    assert!(matches!(
        format_source("(f <unhandled:FuncLit>)", &FormatConfig::default()),
        Err(ReadError::Placeholder { .. })
    ));
}

fn datum_text() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z][a-z0-9.-]{0,6}",
        "\"[a-z ]{0,8}\"",
        Just("#t".to_string()),
        "#:[A-Z][a-z]{0,4}",
        "#\\\\[a-z()]",
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..6)
                .prop_map(|items| format!("({})", items.join(" "))),
            prop::collection::vec(inner, 0..4).prop_map(|items| format!("#({})", items.join(" "))),
        ]
    })
}

proptest! {
    #[test]
    fn formatting_only_changes_whitespace(source in datum_text(), max_width in 8usize..100) {
        let config = width(max_width);
        let formatted = format_source(&source, &config).unwrap();
        prop_assert_eq!(read(&formatted).unwrap().to_string(), source);
    }

    #[test]
    fn formatting_is_idempotent(source in datum_text(), max_width in 8usize..100) {
        let config = width(max_width);
        let once = format_source(&source, &config).unwrap();
        let twice = format_source(&once, &config).unwrap();
        prop_assert_eq!(once, twice);
    }
}
