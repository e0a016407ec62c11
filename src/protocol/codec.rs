//! Command encoding
//!
//! ## Wire Format
//!
//! ```text
//! [<id> ]<name>[ <arg>...]\n
//! ```
//!
//! The id is left out entirely when it is `0`.
//!
//! ### Arguments by Command
//! - boardsize:     `<size>`
//! - komi:          `<komi>` with six fractional digits
//! - play:          `<COLOR> <vertex>|PASS|RESIGN`
//! - genmove:       `<COLOR>`
//! - known_command: `<command name>`
//! - everything else: none

use std::io::Write;

use crate::error::Result;
use super::Command;

/// Line terminator for commands
pub const LF: char = '\n';

/// Encode a command as a single wire line, including the trailing `\n`.
///
/// Encoding never fails and never validates the payload: a NaN komi is
/// written as `NaN`, an infinite one as `+Inf`, an off-board vertex as whatever it renders to.
pub fn encode_command(command: &Command) -> String {
    let name = command.kind().name();

    let args = match command {
        Command::KnownCommand { command, .. } => Some(command.clone()),
        Command::BoardSize { size, .. } => Some(size.to_string()),
        Command::Komi { komi, .. } => Some(format_komi(*komi)),
        Command::Play { mv, .. } => Some(mv.to_string()),
        Command::GenMove { color, .. } => Some(color.to_string()),
        Command::ProtocolVersion { .. }
        | Command::Name { .. }
        | Command::Version { .. }
        | Command::ListCommands { .. }
        | Command::Quit { .. }
        | Command::ClearBoard { .. }
        | Command::Undo { .. } => None,
    };

    let mut line = String::with_capacity(name.len() + 16);
    if command.id() != 0 {
        line.push_str(&command.id().to_string());
        line.push(' ');
    }
    line.push_str(name);
    if let Some(args) = args {
        line.push(' ');
        line.push_str(&args);
    }
    line.push(LF);

    line
}

/// Fixed six fractional digits; infinities as `+Inf` / `-Inf`
fn format_komi(komi: f32) -> String {
    if komi.is_infinite() {
        return if komi > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    format!("{:.6}", komi)
}

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let line = encode_command(command);
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
