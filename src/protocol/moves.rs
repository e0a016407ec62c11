//! Colors and moves

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Vertex;

/// Wire token for a pass
pub const PASS: &str = "PASS";

/// Wire token for a resignation
pub const RESIGN: &str = "RESIGN";

/// Stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// No color, or a token we did not recognize
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// Canonical wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Empty => "EMPTY",
            Color::Black => "BLACK",
            Color::White => "WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a color token.
///
/// Accepts `b`, `w`, `black` and `white` in any case, ignoring surrounding
/// whitespace. Everything else is [`Color::Empty`]; this never fails.
pub fn parse_color(input: &str) -> Color {
    match input.trim().to_ascii_uppercase().as_str() {
        "B" | "BLACK" => Color::Black,
        "W" | "WHITE" => Color::White,
        _ => Color::Empty,
    }
}

/// A move by one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Place { vertex: Vertex, color: Color },
    Pass { color: Color },
    Resign { color: Color },
}

impl Move {
    pub fn color(&self) -> Color {
        match self {
            Move::Place { color, .. } | Move::Pass { color } | Move::Resign { color } => *color,
        }
    }

    /// The placed vertex, if this move places a stone
    pub fn vertex(&self) -> Option<Vertex> {
        match self {
            Move::Place { vertex, .. } => Some(*vertex),
            _ => None,
        }
    }
}

/// `BLACK D4`, `WHITE PASS`, `BLACK RESIGN`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { vertex, color } => write!(f, "{} {}", color, vertex),
            Move::Pass { color } => write!(f, "{} {}", color, PASS),
            Move::Resign { color } => write!(f, "{} {}", color, RESIGN),
        }
    }
}
