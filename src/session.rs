//! Session
//!
//! Drives one engine over a reader/writer pair: write a command, read
//! exactly one response record, decode it for the command's kind.
//!
//! The session is single-threaded and owns its frame buffer. Timeouts and
//! cancellation belong to the transport handed in.

use std::io::{BufWriter, Read, Write};

use crate::config::Config;
use crate::error::{GtpError, Result};
use crate::protocol::{
    decode_response, write_command, BoardSizeResponse, ClearBoardResponse, Color, Command,
    FrameReader, GenMoveResponse, KnownCommandResponse, KomiResponse, ListCommandsResponse,
    Move, NameResponse, PlayResponse, ProtocolVersionResponse, QuitResponse, Response,
    UndoResponse, VersionResponse,
};

/// A request/response session with one engine
pub struct Session<R, W: Write> {
    /// Response stream (framed on `\n\n`)
    reader: FrameReader<R>,

    /// Command stream (buffered, flushed per command)
    writer: BufWriter<W>,

    config: Config,

    /// Next id handed out when `auto_ids` is on
    next_id: u32,
}

/// Unwrap the expected variant or report which one came back
macro_rules! expect_response {
    ($response:expr, $variant:ident) => {
        match $response {
            Response::$variant(inner) => Ok(inner),
            other => Err(GtpError::InvalidCommand(format!(
                "expected {} response, decoded {:?}",
                stringify!($variant),
                other.kind()
            ))),
        }
    };
}

impl<R: Read, W: Write> Session<R, W> {
    /// Create a session with default settings
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, Config::default())
    }

    pub fn with_config(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader: FrameReader::with_config(reader, &config),
            writer: BufWriter::new(writer),
            next_id: config.first_id,
            config,
        }
    }

    /// Send a command and decode its response.
    ///
    /// A peer rejection is returned as a normal response; see
    /// [`Response::failure`].
    pub fn send(&mut self, command: Command) -> Result<Response> {
        let command = self.stamp(command);
        let kind = command.kind();

        tracing::debug!(id = command.id(), command = kind.name(), "Sending command");
        write_command(&mut self.writer, &command)?;

        let record = match self.reader.next_record()? {
            Some(record) => record,
            None => {
                tracing::debug!(command = kind.name(), "Engine closed the stream");
                return Err(GtpError::ConnectionClosed);
            }
        };
        tracing::trace!(command = kind.name(), record = %record, "Received response");

        let response = decode_response(kind, &record).map_err(|e| {
            tracing::warn!(command = kind.name(), error = %e, "Failed to decode response");
            e
        })?;

        if command.id() != 0 && response.id() != command.id() {
            tracing::warn!(
                sent = command.id(),
                received = response.id(),
                "Response id does not match command id"
            );
        }
        if let Some(failure) = response.failure() {
            tracing::debug!(command = kind.name(), message = %failure.message, "Engine rejected command");
        }

        Ok(response)
    }

    /// Assign the next id if auto numbering is on and none was given
    fn stamp(&mut self, command: Command) -> Command {
        if !self.config.auto_ids || command.id() != 0 {
            return command;
        }
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).unwrap_or(1);
        command.with_id(id)
    }

    // =========================================================================
    // Per-command helpers
    // =========================================================================

    pub fn protocol_version(&mut self) -> Result<ProtocolVersionResponse> {
        expect_response!(self.send(Command::ProtocolVersion { id: 0 })?, ProtocolVersion)
    }

    pub fn name(&mut self) -> Result<NameResponse> {
        expect_response!(self.send(Command::Name { id: 0 })?, Name)
    }

    pub fn version(&mut self) -> Result<VersionResponse> {
        expect_response!(self.send(Command::Version { id: 0 })?, Version)
    }

    pub fn known_command(&mut self, command: &str) -> Result<KnownCommandResponse> {
        let command = Command::KnownCommand {
            id: 0,
            command: command.to_string(),
        };
        expect_response!(self.send(command)?, KnownCommand)
    }

    pub fn list_commands(&mut self) -> Result<ListCommandsResponse> {
        expect_response!(self.send(Command::ListCommands { id: 0 })?, ListCommands)
    }

    pub fn quit(&mut self) -> Result<QuitResponse> {
        expect_response!(self.send(Command::Quit { id: 0 })?, Quit)
    }

    pub fn boardsize(&mut self, size: u32) -> Result<BoardSizeResponse> {
        expect_response!(self.send(Command::BoardSize { id: 0, size })?, BoardSize)
    }

    pub fn clear_board(&mut self) -> Result<ClearBoardResponse> {
        expect_response!(self.send(Command::ClearBoard { id: 0 })?, ClearBoard)
    }

    pub fn komi(&mut self, komi: f32) -> Result<KomiResponse> {
        expect_response!(self.send(Command::Komi { id: 0, komi })?, Komi)
    }

    pub fn play(&mut self, mv: Move) -> Result<PlayResponse> {
        expect_response!(self.send(Command::Play { id: 0, mv })?, Play)
    }

    pub fn genmove(&mut self, color: Color) -> Result<GenMoveResponse> {
        expect_response!(self.send(Command::GenMove { id: 0, color })?, GenMove)
    }

    pub fn undo(&mut self) -> Result<UndoResponse> {
        expect_response!(self.send(Command::Undo { id: 0 })?, Undo)
    }

    /// Get the underlying writer back, flushing buffered commands
    pub fn into_writer(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| GtpError::Io(e.into_error()))
    }
}
