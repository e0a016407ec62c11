//! Tests for board coordinates
//!
//! These tests verify:
//! - Column index <-> letter mapping around the skipped `I`
//! - Vertex parsing (case-insensitivity, 1-indexed rows)
//! - The permissive cases (empty string, -1 column)

use gtpwire::protocol::{column_to_letter, letter_to_column, parse_vertex, Vertex};
use gtpwire::GtpError;

// =============================================================================
// Column Letter Tests
// =============================================================================

#[test]
fn test_column_to_letter_bounds() {
    assert_eq!(column_to_letter(0), "A");
    assert_eq!(column_to_letter(7), "H");
    assert_eq!(column_to_letter(8), "J");
    assert_eq!(column_to_letter(18), "T");
}

#[test]
fn test_column_to_letter_out_of_range() {
    assert_eq!(column_to_letter(-1), "");
    assert_eq!(column_to_letter(19), "");
    assert_eq!(column_to_letter(20), "");
    assert_eq!(column_to_letter(i32::MIN), "");
}

#[test]
fn test_column_to_letter_every_column() {
    for c in 0..=7 {
        let expected = char::from(b'A' + c as u8).to_string();
        assert_eq!(column_to_letter(c), expected);
    }
    for c in 8..=18 {
        let expected = char::from(b'A' + c as u8 + 1).to_string();
        assert_eq!(column_to_letter(c), expected);
    }
}

#[test]
fn test_letter_to_column() {
    assert_eq!(letter_to_column('A'), 0);
    assert_eq!(letter_to_column('H'), 7);
    assert_eq!(letter_to_column('J'), 8);
    assert_eq!(letter_to_column('T'), 18);
}

#[test]
fn test_letter_to_column_invalid() {
    assert_eq!(letter_to_column('I'), -1);
    assert_eq!(letter_to_column(' '), -1);
    assert_eq!(letter_to_column('a'), -1);
    assert_eq!(letter_to_column('U'), -1);
    assert_eq!(letter_to_column('Z'), -1);
}

#[test]
fn test_letter_column_inverse() {
    for c in 0..=18 {
        let letter = column_to_letter(c);
        let ch = letter.chars().next().unwrap();
        assert_eq!(letter_to_column(ch), c, "column {} via {}", c, letter);
    }
}

// =============================================================================
// Vertex Parsing Tests
// =============================================================================

#[test]
fn test_parse_vertex_corners() {
    assert_eq!(parse_vertex("A1").unwrap(), Vertex::new(0, 0));
    assert_eq!(parse_vertex("A19").unwrap(), Vertex::new(18, 0));
    assert_eq!(parse_vertex("S1").unwrap(), Vertex { row: 0, column: 17 });
    assert_eq!(parse_vertex("T19").unwrap(), Vertex { row: 18, column: 18 });
}

#[test]
fn test_parse_vertex_lowercase() {
    assert_eq!(parse_vertex("a1").unwrap(), Vertex::new(0, 0));
    assert_eq!(parse_vertex("a19").unwrap(), Vertex::new(18, 0));
    assert_eq!(parse_vertex("j7").unwrap(), Vertex::new(6, 8));
    assert_eq!(parse_vertex("t19").unwrap(), Vertex::new(18, 18));
}

#[test]
fn test_parse_vertex_double_digit_row() {
    assert_eq!(parse_vertex("J11").unwrap(), Vertex::new(10, 8));
    assert_eq!(parse_vertex("Q16").unwrap(), Vertex::new(15, 15));
}

#[test]
fn test_parse_vertex_unknown_letter_is_not_an_error() {
    assert_eq!(parse_vertex("I5").unwrap(), Vertex::new(4, -1));
    assert_eq!(parse_vertex("Z5").unwrap(), Vertex::new(4, -1));
}

#[test]
fn test_parse_vertex_does_not_bound_rows() {
    assert_eq!(parse_vertex("A0").unwrap(), Vertex::new(-1, 0));
    assert_eq!(parse_vertex("A99").unwrap(), Vertex::new(98, 0));
}

#[test]
fn test_parse_vertex_too_short() {
    for input in ["", "A"] {
        let err = parse_vertex(input).unwrap_err();
        assert!(matches!(err, GtpError::InvalidVertex { .. }), "{:?}", input);
        assert!(err.is_parse_error());
    }
}

#[test]
fn test_parse_vertex_bad_row() {
    for input in ["AB", "A1x", "A 1", "PASS"] {
        let err = parse_vertex(input).unwrap_err();
        assert!(matches!(err, GtpError::InvalidVertex { .. }), "{:?}", input);
    }
}

#[test]
fn test_parse_vertex_row_underflow() {
    let err = parse_vertex("A-2147483648").unwrap_err();
    assert!(matches!(err, GtpError::InvalidVertex { ref reason, .. } if reason == "row out of range"));
    assert!(err.is_parse_error());

    // one above the minimum still fits
    assert_eq!(parse_vertex("A-2147483647").unwrap(), Vertex::new(i32::MIN, 0));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_vertex_display() {
    assert_eq!(Vertex::new(0, 0).to_string(), "A1");
    assert_eq!(Vertex::new(10, 8).to_string(), "J11");
    assert_eq!(Vertex::new(18, 18).to_string(), "T19");
}

#[test]
fn test_vertex_display_extreme_rows() {
    assert_eq!(Vertex::new(i32::MAX, 0).to_string(), "A2147483648");
    assert_eq!(Vertex::new(i32::MIN, 0).to_string(), "A-2147483647");
}

#[test]
fn test_vertex_display_round_trip() {
    for column in 0..=18 {
        for row in [0, 8, 18] {
            let vertex = Vertex::new(row, column);
            assert_eq!(parse_vertex(&vertex.to_string()).unwrap(), vertex);
        }
    }
}
