//! Protocol Module
//!
//! Encoding and decoding for the Go Text Protocol (GTP).
//!
//! ## Protocol Format
//!
//! ### Command Format
//! ```text
//! [<id> ]<name>[ <arg>...]\n
//! ```
//!
//! ### Response Format
//! ```text
//! =[<id>][ <body tokens>]\n\n      success
//! ?[<id>][ <error message>]\n\n    failure
//! ```
//!
//! ### Coordinates
//! Column letter `A..=T` without `I`, followed by a 1-indexed row: `A1`, `J11`.
//!
//! ## Pipeline
//! ```text
//! Command ──encode──▶ line ──▶ peer ──▶ bytes ──frame──▶ record ──envelope──▶ tokens ──decode──▶ Response
//! ```

mod vertex;
mod moves;
mod command;
mod codec;
mod framer;
mod envelope;
mod response;

pub use vertex::{column_to_letter, letter_to_column, parse_vertex, Vertex, MAX_COLUMN, SKIPPED_LETTER};
pub use moves::{parse_color, Color, Move, PASS, RESIGN};
pub use command::{Command, CommandKind};
pub use codec::{encode_command, write_command, LF};
pub use framer::{split_on_double_lf, FrameReader, Split};
pub use envelope::{EQ, ERR};
pub use response::{
    decode_response, parse_board_size_response, parse_clear_board_response,
    parse_gen_move_response, parse_known_command_response, parse_komi_response,
    parse_list_commands_response, parse_name_response, parse_play_response,
    parse_protocol_version_response, parse_quit_response, parse_undo_response,
    parse_version_response, BoardSizeResponse, ClearBoardResponse, GenMoveResponse,
    KnownCommandResponse, KomiResponse, ListCommandsResponse, NameResponse, PlayResponse,
    ProtocolFailure, ProtocolVersionResponse, QuitResponse, Response, UndoResponse,
    VersionResponse, SCALAR_ELEMENT,
};
