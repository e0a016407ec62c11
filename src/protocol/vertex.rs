//! Board coordinates
//!
//! GTP writes a vertex as a column letter followed by a 1-indexed row,
//! e.g. `D4` or `Q16`. The letter `I` is never used, so columns run
//! `A..=H` then `J..=T`. Internally rows and columns are 0-indexed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GtpError, Result};

/// Highest representable column index (`T`)
pub const MAX_COLUMN: i32 = 18;

/// The letter GTP leaves out of the column alphabet
pub const SKIPPED_LETTER: char = 'I';

/// A board position, 0-indexed
///
/// No bounds are enforced on `row`. `column` is `-1` when the vertex was
/// parsed from an unknown column letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub row: i32,
    pub column: i32,
}

impl Vertex {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letter(self.column), i64::from(self.row) + 1)
    }
}

/// Map a column index to its letter.
///
/// `0 -> "A"`, `7 -> "H"`, `8 -> "J"`, `18 -> "T"`. Anything outside
/// `0..=18` renders as the empty string.
pub fn column_to_letter(column: i32) -> String {
    if !(0..=MAX_COLUMN).contains(&column) {
        return String::new();
    }
    let offset = if column < 8 { column } else { column + 1 };
    // offset is within 0..=19, so the addition stays inside 'A'..='T'
    char::from(b'A' + offset as u8).to_string()
}

/// Map an upper-case column letter back to its index.
///
/// Returns `-1` for `I` and for anything outside `A..=T`, including
/// lower-case letters.
pub fn letter_to_column(letter: char) -> i32 {
    match letter {
        SKIPPED_LETTER => -1,
        'A'..='H' => letter as i32 - 'A' as i32,
        'J'..='T' => letter as i32 - 'A' as i32 - 1,
        _ => -1,
    }
}

/// Parse a vertex such as `A1`, `j11` or `T19`.
///
/// The column letter is case-insensitive. An unknown letter does not fail:
/// it yields `column == -1`. Input shorter than two characters, or a row
/// that is not an integer, is an error.
pub fn parse_vertex(input: &str) -> Result<Vertex> {
    let mut chars = input.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), Some(_)) => letter,
        _ => {
            return Err(GtpError::InvalidVertex {
                input: input.to_string(),
                reason: "vertex input has fewer than 2 characters".to_string(),
            })
        }
    };

    let row_text = &input[letter.len_utf8()..];
    let row: i32 = row_text.parse().map_err(|_| GtpError::InvalidVertex {
        input: input.to_string(),
        reason: format!("row {:?} is not an integer", row_text),
    })?;

    let row = row.checked_sub(1).ok_or_else(|| GtpError::InvalidVertex {
        input: input.to_string(),
        reason: "row out of range".to_string(),
    })?;

    Ok(Vertex {
        row,
        column: letter_to_column(letter.to_ascii_uppercase()),
    })
}
