//! Command definitions
//!
//! Represents commands sent to an engine.

use serde::{Deserialize, Serialize};

use crate::error::{GtpError, Result};
use super::moves::{parse_color, PASS, RESIGN};
use super::{parse_vertex, Color, Move};

/// Command kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    ProtocolVersion,
    Name,
    Version,
    KnownCommand,
    ListCommands,
    Quit,
    BoardSize,
    ClearBoard,
    Komi,
    Play,
    GenMove,
    Undo,
}

impl CommandKind {
    /// Every supported kind
    pub const ALL: [CommandKind; 12] = [
        CommandKind::ProtocolVersion,
        CommandKind::Name,
        CommandKind::Version,
        CommandKind::KnownCommand,
        CommandKind::ListCommands,
        CommandKind::Quit,
        CommandKind::BoardSize,
        CommandKind::ClearBoard,
        CommandKind::Komi,
        CommandKind::Play,
        CommandKind::GenMove,
        CommandKind::Undo,
    ];

    /// Wire name of the command
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::ProtocolVersion => "protocol_version",
            CommandKind::Name => "name",
            CommandKind::Version => "version",
            CommandKind::KnownCommand => "known_command",
            CommandKind::ListCommands => "list_commands",
            CommandKind::Quit => "quit",
            CommandKind::BoardSize => "boardsize",
            CommandKind::ClearBoard => "clear_board",
            CommandKind::Komi => "komi",
            CommandKind::Play => "play",
            CommandKind::GenMove => "genmove",
            CommandKind::Undo => "undo",
        }
    }

    /// Look a kind up by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Minimum number of body tokens a non-empty response must carry
    pub fn min_elements(&self) -> usize {
        match self {
            CommandKind::ProtocolVersion
            | CommandKind::Name
            | CommandKind::Version
            | CommandKind::KnownCommand
            | CommandKind::GenMove => 1,
            CommandKind::ListCommands
            | CommandKind::Quit
            | CommandKind::BoardSize
            | CommandKind::ClearBoard
            | CommandKind::Komi
            | CommandKind::Play
            | CommandKind::Undo => 0,
        }
    }
}

/// A command to send
///
/// `id == 0` means "omit the id" on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    ProtocolVersion { id: u32 },
    Name { id: u32 },
    Version { id: u32 },
    /// Ask whether the engine knows `command`
    KnownCommand { id: u32, command: String },
    ListCommands { id: u32 },
    Quit { id: u32 },
    BoardSize { id: u32, size: u32 },
    ClearBoard { id: u32 },
    Komi { id: u32, komi: f32 },
    Play { id: u32, mv: Move },
    GenMove { id: u32, color: Color },
    Undo { id: u32 },
}

impl Command {
    /// Get the command kind
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::ProtocolVersion { .. } => CommandKind::ProtocolVersion,
            Command::Name { .. } => CommandKind::Name,
            Command::Version { .. } => CommandKind::Version,
            Command::KnownCommand { .. } => CommandKind::KnownCommand,
            Command::ListCommands { .. } => CommandKind::ListCommands,
            Command::Quit { .. } => CommandKind::Quit,
            Command::BoardSize { .. } => CommandKind::BoardSize,
            Command::ClearBoard { .. } => CommandKind::ClearBoard,
            Command::Komi { .. } => CommandKind::Komi,
            Command::Play { .. } => CommandKind::Play,
            Command::GenMove { .. } => CommandKind::GenMove,
            Command::Undo { .. } => CommandKind::Undo,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Command::ProtocolVersion { id }
            | Command::Name { id }
            | Command::Version { id }
            | Command::KnownCommand { id, .. }
            | Command::ListCommands { id }
            | Command::Quit { id }
            | Command::BoardSize { id, .. }
            | Command::ClearBoard { id }
            | Command::Komi { id, .. }
            | Command::Play { id, .. }
            | Command::GenMove { id, .. }
            | Command::Undo { id } => *id,
        }
    }

    /// Replace the id, keeping the payload
    pub fn with_id(mut self, new_id: u32) -> Self {
        match &mut self {
            Command::ProtocolVersion { id }
            | Command::Name { id }
            | Command::Version { id }
            | Command::KnownCommand { id, .. }
            | Command::ListCommands { id }
            | Command::Quit { id }
            | Command::BoardSize { id, .. }
            | Command::ClearBoard { id }
            | Command::Komi { id, .. }
            | Command::Play { id, .. }
            | Command::GenMove { id, .. }
            | Command::Undo { id } => *id = new_id,
        }
        self
    }

    /// Parse a human-typed command line such as `genmove b` or `7 play w D4`.
    ///
    /// Only the kinds in [`CommandKind::ALL`] are understood.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace().peekable();

        let id = match words.peek().map(|word| word.parse::<u32>()) {
            Some(Ok(id)) => {
                words.next();
                id
            }
            _ => 0,
        };

        let name = words
            .next()
            .ok_or_else(|| GtpError::InvalidCommand("empty command line".to_string()))?;
        let kind = CommandKind::from_name(name)
            .ok_or_else(|| GtpError::InvalidCommand(format!("unknown command {:?}", name)))?;
        let args: Vec<&str> = words.collect();

        let arg = |index: usize| {
            args.get(index).copied().ok_or_else(|| {
                GtpError::InvalidCommand(format!("{} expects argument {}", kind.name(), index + 1))
            })
        };

        let command = match kind {
            CommandKind::ProtocolVersion => Command::ProtocolVersion { id },
            CommandKind::Name => Command::Name { id },
            CommandKind::Version => Command::Version { id },
            CommandKind::KnownCommand => Command::KnownCommand {
                id,
                command: arg(0)?.to_string(),
            },
            CommandKind::ListCommands => Command::ListCommands { id },
            CommandKind::Quit => Command::Quit { id },
            CommandKind::BoardSize => Command::BoardSize {
                id,
                size: arg(0)?.parse().map_err(|_| {
                    GtpError::InvalidCommand(format!("invalid board size {:?}", args[0]))
                })?,
            },
            CommandKind::ClearBoard => Command::ClearBoard { id },
            CommandKind::Komi => Command::Komi {
                id,
                komi: arg(0)?.parse().map_err(|_| {
                    GtpError::InvalidCommand(format!("invalid komi {:?}", args[0]))
                })?,
            },
            CommandKind::Play => Command::Play {
                id,
                mv: parse_move(parse_color(arg(0)?), arg(1)?)?,
            },
            CommandKind::GenMove => Command::GenMove {
                id,
                color: parse_color(arg(0)?),
            },
            CommandKind::Undo => Command::Undo { id },
        };

        Ok(command)
    }
}

/// Build a move from a color and a vertex / `PASS` / `RESIGN` token
fn parse_move(color: Color, token: &str) -> Result<Move> {
    let upper = token.to_ascii_uppercase();
    if upper == PASS {
        return Ok(Move::Pass { color });
    }
    if upper == RESIGN {
        return Ok(Move::Resign { color });
    }
    let vertex = parse_vertex(&upper)?;
    Ok(Move::Place { vertex, color })
}
