//! Error types for gtpwire
//!
//! Provides a unified error type for encoding, framing and decoding.
//!
//! A peer rejecting a command (`? message`) is NOT an error here: it is
//! carried as a [`ProtocolFailure`](crate::protocol::ProtocolFailure) on the
//! typed response. Errors only describe text we could not make sense of, or
//! a transport that went away.

use thiserror::Error;

/// Result type alias using GtpError
pub type Result<T> = std::result::Result<T, GtpError>;

/// Unified error type for gtpwire operations
#[derive(Debug, Error)]
pub enum GtpError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed before a response arrived")]
    ConnectionClosed,

    #[error("Response record too large: {size} bytes (max {max})")]
    RecordTooLarge { size: usize, max: usize },

    #[error("Response record is not valid UTF-8")]
    InvalidUtf8,

    // -------------------------------------------------------------------------
    // Envelope Errors
    // -------------------------------------------------------------------------
    #[error("cannot parse command id from empty string")]
    EmptyId,

    #[error("cannot parse command id from {token:?}")]
    InvalidId { token: String },

    #[error("unknown command success status {marker}")]
    UnknownStatus { marker: char },

    #[error("{command} response requires {required} response elements")]
    MissingElements {
        command: &'static str,
        required: usize,
    },

    #[error("{command} response has no element at index {index}")]
    MissingElement { command: &'static str, index: usize },

    // -------------------------------------------------------------------------
    // Payload Errors
    // -------------------------------------------------------------------------
    #[error("{command} response: invalid integer {token:?}")]
    InvalidInteger { command: &'static str, token: String },

    #[error("{command} response: invalid boolean {token:?}")]
    InvalidBoolean { command: &'static str, token: String },

    #[error("invalid vertex {input:?}: {reason}")]
    InvalidVertex { input: String, reason: String },

    // -------------------------------------------------------------------------
    // Command Line Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command line: {0}")]
    InvalidCommand(String),
}

impl GtpError {
    /// True for every error raised while turning response text into values.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GtpError::EmptyId
                | GtpError::InvalidId { .. }
                | GtpError::UnknownStatus { .. }
                | GtpError::MissingElements { .. }
                | GtpError::MissingElement { .. }
                | GtpError::InvalidInteger { .. }
                | GtpError::InvalidBoolean { .. }
                | GtpError::InvalidVertex { .. }
        )
    }
}
