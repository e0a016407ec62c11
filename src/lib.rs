//! # gtpwire
//!
//! The encode/decode half of the Go Text Protocol (GTP):
//! - Command encoding to single wire lines
//! - Incremental framing of the response stream on `\n\n`
//! - Envelope parsing (`=id` / `?id`, control characters, tabs)
//! - Typed decoding per command kind, including board coordinates
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Session                              │
//! │            (one reader, one writer, one engine)              │
//! └───────────────┬─────────────────────────────▲───────────────┘
//!                 │ Command                     │ Response
//!                 ▼                             │
//!          ┌─────────────┐               ┌──────┴──────┐
//!          │   Encoder   │               │  Decoders   │
//!          └──────┬──────┘               └──────▲──────┘
//!                 │ line                        │ Envelope
//!                 ▼                             │
//!          ┌─────────────┐  bytes  ┌────────────┴──┐
//!          │    Peer     │────────▶│ Framer (\n\n) │
//!          └─────────────┘         └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GtpError, Result};
pub use config::Config;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of gtpwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
