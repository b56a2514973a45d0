//! Tests for the textual expression interface

use karnaugh_logic::{parse_expression, KarnaughError, TruthTable};
use std::collections::BTreeSet;

#[test]
fn test_parse_single_negated_variable() {
    let (indices, bits) = parse_expression("/B", 2).unwrap();
    assert_eq!(indices, BTreeSet::from([0, 1]));
    assert_eq!(bits, 2);
}

#[test]
fn test_parse_infers_width_from_letters() {
    let (indices, bits) = parse_expression("D", 0).unwrap();
    assert_eq!(bits, 4);
    assert_eq!(indices.len(), 8);
    assert!(indices.iter().all(|&i| i & 0b1000 != 0));
}

#[test]
fn test_parse_whitespace_is_ignored() {
    let (spaced, _) = parse_expression("  /A /B  +  A B ", 2).unwrap();
    let (dense, _) = parse_expression("/A/B+AB", 2).unwrap();
    assert_eq!(spaced, dense);
}

#[test]
fn test_parse_rejects_foreign_characters() {
    for input in ["A*B", "A|B", "A1", "a-b", "A&nbsp;"] {
        match parse_expression(input, 0) {
            Err(KarnaughError::MalformedExpression { .. }) => {}
            other => panic!("{:?} accepted for input {:?}", other, input),
        }
    }
}

#[test]
fn test_parse_rejects_broken_structure() {
    assert!(parse_expression("", 0).is_err());
    assert!(parse_expression("+", 0).is_err());
    assert!(parse_expression("A + + B", 0).is_err());
    assert!(parse_expression("A/", 0).is_err());
}

#[test]
fn test_unsatisfiable_monomial_contributes_nothing() {
    let (indices, _) = parse_expression("B/B", 2).unwrap();
    assert!(indices.is_empty());
}

#[test]
fn test_table_from_expression() {
    let table = TruthTable::from_expression("/B", 2).unwrap();
    assert_eq!(table.ones(), &BTreeSet::from([0, 1]));
    assert_eq!(table.bits(), 2);
    assert_eq!(table.minimize().to_string(), "/B");
}

#[test]
fn test_render_parse_round_trip() {
    // Without don't-cares the minimized function covers the ON-set exactly,
    // so rendering and reparsing must reproduce it
    let tables = [
        TruthTable::with_bits([0, 1], [], 2),
        TruthTable::with_bits([0, 3], [], 2),
        TruthTable::with_bits([1, 2, 4, 7], [], 3),
        TruthTable::with_bits([3, 5, 6, 7], [], 3),
        TruthTable::with_bits([0, 2, 5, 7, 8, 10, 13, 15], [], 4),
    ];
    for table in &tables {
        let rendered = table.minimize().to_string();
        let (indices, bits) = parse_expression(&rendered, table.bits()).unwrap();
        assert_eq!(&indices, table.ones(), "round trip of {}", rendered);
        assert_eq!(bits, table.bits());
    }
}

#[test]
fn test_parsed_set_minimizes_back_to_same_text() {
    let rendered = "/A/B + AB";
    let table = TruthTable::from_expression(rendered, 2).unwrap();
    assert_eq!(table.minimize().to_string(), rendered);
}
