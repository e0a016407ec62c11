//! Response definitions
//!
//! Typed responses, one per command kind, and the decoders that build
//! them from a framed record.
//!
//! Decoders return `Err` only for text they cannot parse. A peer that
//! answers `? message` produces a normal response; kinds that can be
//! rejected carry the message as a [`ProtocolFailure`].

use serde::{Deserialize, Serialize};

use crate::error::{GtpError, Result};
use super::envelope::{parse_envelope, Envelope};
use super::moves::{PASS, RESIGN};
use super::{parse_vertex, Color, CommandKind, Move};

/// Body token holding the value of `protocol_version` and
/// `known_command` responses. The token before it is skipped.
pub const SCALAR_ELEMENT: usize = 1;

/// Rejection message sent by the peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolVersionResponse {
    pub id: u32,
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResponse {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub id: u32,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCommandResponse {
    pub id: u32,
    pub known: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCommandsResponse {
    pub id: u32,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuitResponse {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSizeResponse {
    pub id: u32,
    pub error: Option<ProtocolFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearBoardResponse {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KomiResponse {
    pub id: u32,
    pub error: Option<ProtocolFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResponse {
    pub id: u32,
    pub error: Option<ProtocolFailure>,
}

/// The engine's move. The color is not echoed, so it is always
/// [`Color::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenMoveResponse {
    pub id: u32,
    pub mv: Move,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoResponse {
    pub id: u32,
    pub error: Option<ProtocolFailure>,
}

/// A decoded response of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    ProtocolVersion(ProtocolVersionResponse),
    Name(NameResponse),
    Version(VersionResponse),
    KnownCommand(KnownCommandResponse),
    ListCommands(ListCommandsResponse),
    Quit(QuitResponse),
    BoardSize(BoardSizeResponse),
    ClearBoard(ClearBoardResponse),
    Komi(KomiResponse),
    Play(PlayResponse),
    GenMove(GenMoveResponse),
    Undo(UndoResponse),
}

impl Response {
    pub fn kind(&self) -> CommandKind {
        match self {
            Response::ProtocolVersion(_) => CommandKind::ProtocolVersion,
            Response::Name(_) => CommandKind::Name,
            Response::Version(_) => CommandKind::Version,
            Response::KnownCommand(_) => CommandKind::KnownCommand,
            Response::ListCommands(_) => CommandKind::ListCommands,
            Response::Quit(_) => CommandKind::Quit,
            Response::BoardSize(_) => CommandKind::BoardSize,
            Response::ClearBoard(_) => CommandKind::ClearBoard,
            Response::Komi(_) => CommandKind::Komi,
            Response::Play(_) => CommandKind::Play,
            Response::GenMove(_) => CommandKind::GenMove,
            Response::Undo(_) => CommandKind::Undo,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Response::ProtocolVersion(r) => r.id,
            Response::Name(r) => r.id,
            Response::Version(r) => r.id,
            Response::KnownCommand(r) => r.id,
            Response::ListCommands(r) => r.id,
            Response::Quit(r) => r.id,
            Response::BoardSize(r) => r.id,
            Response::ClearBoard(r) => r.id,
            Response::Komi(r) => r.id,
            Response::Play(r) => r.id,
            Response::GenMove(r) => r.id,
            Response::Undo(r) => r.id,
        }
    }

    /// The peer's rejection, for kinds that carry one
    pub fn failure(&self) -> Option<&ProtocolFailure> {
        match self {
            Response::BoardSize(r) => r.error.as_ref(),
            Response::Komi(r) => r.error.as_ref(),
            Response::Play(r) => r.error.as_ref(),
            Response::Undo(r) => r.error.as_ref(),
            _ => None,
        }
    }
}

/// Decode a framed record as the response to a command of `kind`
pub fn decode_response(kind: CommandKind, record: &str) -> Result<Response> {
    let response = match kind {
        CommandKind::ProtocolVersion => {
            Response::ProtocolVersion(parse_protocol_version_response(record)?)
        }
        CommandKind::Name => Response::Name(parse_name_response(record)?),
        CommandKind::Version => Response::Version(parse_version_response(record)?),
        CommandKind::KnownCommand => {
            Response::KnownCommand(parse_known_command_response(record)?)
        }
        CommandKind::ListCommands => {
            Response::ListCommands(parse_list_commands_response(record)?)
        }
        CommandKind::Quit => Response::Quit(parse_quit_response(record)?),
        CommandKind::BoardSize => Response::BoardSize(parse_board_size_response(record)?),
        CommandKind::ClearBoard => Response::ClearBoard(parse_clear_board_response(record)?),
        CommandKind::Komi => Response::Komi(parse_komi_response(record)?),
        CommandKind::Play => Response::Play(parse_play_response(record)?),
        CommandKind::GenMove => Response::GenMove(parse_gen_move_response(record)?),
        CommandKind::Undo => Response::Undo(parse_undo_response(record)?),
    };

    Ok(response)
}

// =============================================================================
// Per-kind decoders
// =============================================================================

fn envelope(record: &str, kind: CommandKind) -> Result<Envelope> {
    parse_envelope(record, kind.name(), kind.min_elements())
}

fn element<'a>(env: &'a Envelope, kind: CommandKind, index: usize) -> Result<&'a str> {
    env.elements
        .get(index)
        .map(String::as_str)
        .ok_or(GtpError::MissingElement {
            command: kind.name(),
            index,
        })
}

fn failure(env: Envelope) -> Option<ProtocolFailure> {
    env.error.map(|message| ProtocolFailure { message })
}

/// `= N` / `=ID N`
pub fn parse_protocol_version_response(record: &str) -> Result<ProtocolVersionResponse> {
    let kind = CommandKind::ProtocolVersion;
    let env = envelope(record, kind)?;
    let token = element(&env, kind, SCALAR_ELEMENT)?;
    let version = token.parse().map_err(|_| GtpError::InvalidInteger {
        command: kind.name(),
        token: token.to_string(),
    })?;

    Ok(ProtocolVersionResponse { id: env.id, version })
}

/// `= string*` / `=ID string*`
pub fn parse_name_response(record: &str) -> Result<NameResponse> {
    let env = envelope(record, CommandKind::Name)?;
    Ok(NameResponse {
        id: env.id,
        name: env.elements.join(" "),
    })
}

/// `= string*` / `=ID string*`
pub fn parse_version_response(record: &str) -> Result<VersionResponse> {
    let env = envelope(record, CommandKind::Version)?;
    Ok(VersionResponse {
        id: env.id,
        version: env.elements.join(" "),
    })
}

pub fn parse_known_command_response(record: &str) -> Result<KnownCommandResponse> {
    let kind = CommandKind::KnownCommand;
    let env = envelope(record, kind)?;
    let token = element(&env, kind, SCALAR_ELEMENT)?;
    let known = token.parse().map_err(|_| GtpError::InvalidBoolean {
        command: kind.name(),
        token: token.to_string(),
    })?;

    Ok(KnownCommandResponse { id: env.id, known })
}

pub fn parse_list_commands_response(record: &str) -> Result<ListCommandsResponse> {
    let env = envelope(record, CommandKind::ListCommands)?;
    Ok(ListCommandsResponse {
        id: env.id,
        commands: env.elements,
    })
}

pub fn parse_quit_response(record: &str) -> Result<QuitResponse> {
    let env = envelope(record, CommandKind::Quit)?;
    Ok(QuitResponse { id: env.id })
}

pub fn parse_board_size_response(record: &str) -> Result<BoardSizeResponse> {
    let env = envelope(record, CommandKind::BoardSize)?;
    Ok(BoardSizeResponse {
        id: env.id,
        error: failure(env),
    })
}

pub fn parse_clear_board_response(record: &str) -> Result<ClearBoardResponse> {
    let env = envelope(record, CommandKind::ClearBoard)?;
    Ok(ClearBoardResponse { id: env.id })
}

pub fn parse_komi_response(record: &str) -> Result<KomiResponse> {
    let env = envelope(record, CommandKind::Komi)?;
    Ok(KomiResponse {
        id: env.id,
        error: failure(env),
    })
}

pub fn parse_play_response(record: &str) -> Result<PlayResponse> {
    let env = envelope(record, CommandKind::Play)?;
    Ok(PlayResponse {
        id: env.id,
        error: failure(env),
    })
}

/// `= D4` / `=ID pass` / `= resign`
pub fn parse_gen_move_response(record: &str) -> Result<GenMoveResponse> {
    let kind = CommandKind::GenMove;
    let env = envelope(record, kind)?;
    let token = element(&env, kind, 0)?.to_ascii_uppercase();

    let color = Color::Empty;
    let mv = match token.as_str() {
        PASS => Move::Pass { color },
        RESIGN => Move::Resign { color },
        _ => Move::Place {
            vertex: parse_vertex(&token)?,
            color,
        },
    };

    Ok(GenMoveResponse { id: env.id, mv })
}

pub fn parse_undo_response(record: &str) -> Result<UndoResponse> {
    let env = envelope(record, CommandKind::Undo)?;
    Ok(UndoResponse {
        id: env.id,
        error: failure(env),
    })
}
