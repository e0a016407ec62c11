//! Response envelope
//!
//! Splits one framed record into id, status and body tokens:
//!
//! ```text
//! =id response      ?id error_message
//! =id               ? error_message
//! = response
//! =
//! ```

use crate::error::{GtpError, Result};

/// Success marker
pub const EQ: char = '=';

/// Failure marker
pub const ERR: char = '?';

/// Generic id/status/tokens view of one response record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Envelope {
    pub id: u32,
    pub elements: Vec<String>,
    /// Set when the peer answered with `?`
    pub error: Option<String>,
}

/// Control characters other than HT and LF
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\x00'..='\x08' | '\x0b'..='\x1f' | '\x7f')
}

/// Parse the id out of a leading `=`, `=N`, `?` or `?N` token
fn parse_command_id(token: &str) -> Result<u32> {
    let mut chars = token.chars();
    match chars.next() {
        None => Err(GtpError::EmptyId),
        Some(_) if chars.as_str().is_empty() => Ok(0),
        Some(_) => chars.as_str().parse().map_err(|_| GtpError::InvalidId {
            token: token.to_string(),
        }),
    }
}

/// Parse one framed record for `command`, requiring `min_elements` body
/// tokens unless the body is empty.
pub(crate) fn parse_envelope(
    record: &str,
    command: &'static str,
    min_elements: usize,
) -> Result<Envelope> {
    let clean: String = record
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect();

    // Body tokens are split on single spaces only.
    let tokens: Vec<&str> = clean.split(' ').collect();
    let id = parse_command_id(tokens[0])?;

    if tokens.len() < 2 {
        return Ok(Envelope {
            id,
            ..Envelope::default()
        });
    }

    let body = &tokens[1..];
    if body.len() < min_elements {
        return Err(GtpError::MissingElements {
            command,
            required: min_elements,
        });
    }

    match tokens[0].chars().next() {
        Some(EQ) => Ok(Envelope {
            id,
            elements: body.iter().map(|t| t.to_string()).collect(),
            error: None,
        }),
        Some(ERR) => Ok(Envelope {
            id,
            elements: Vec::new(),
            error: Some(body.join(" ")),
        }),
        Some(marker) => Err(GtpError::UnknownStatus { marker }),
        None => Err(GtpError::EmptyId),
    }
}
