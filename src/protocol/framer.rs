//! Response framing
//!
//! Every GTP response ends with an empty line, so records on the stream are
//! separated by `\n\n`. Single `\n` inside a record are kept.
//!
//! ```text
//! =1 protocol_version\nname\n\n=2 D4\n\n
//! └────────── record ─────────┘└ rec ┘
//! ```
//!
//! [`split_on_double_lf`] is the pure decision function; [`FrameReader`]
//! is the driver that owns the buffer and pulls bytes from a reader.

use std::io::Read;

use bytes::{Buf, BytesMut};

use crate::config::Config;
use crate::error::{GtpError, Result};

/// Outcome of one framing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split<'a> {
    /// Buffer is empty and the source is exhausted
    EndOfStream,

    /// No complete record yet; read more before deciding
    NeedMore,

    /// Consume `advance` bytes and hand `token` to the envelope parser
    Token { advance: usize, token: &'a [u8] },
}

/// Find the first record in `data`.
///
/// A terminated record is returned without its `\n\n`. At end of stream
/// whatever is left is returned as a final, unterminated record.
pub fn split_on_double_lf(data: &[u8], at_eof: bool) -> Split<'_> {
    if at_eof && data.is_empty() {
        return Split::EndOfStream;
    }

    if let Some(first) = data.windows(2).position(|pair| pair == b"\n\n") {
        return Split::Token {
            advance: first + 2,
            token: &data[..first],
        };
    }

    if at_eof {
        return Split::Token {
            advance: data.len(),
            token: data,
        };
    }

    Split::NeedMore
}

/// Reads response records from a byte stream
///
/// Owns the only buffer in the codec. One reader per stream.
pub struct FrameReader<R> {
    reader: R,
    buffer: BytesMut,
    chunk_size: usize,
    max_record_size: usize,
    at_eof: bool,
}

impl<R: Read> FrameReader<R> {
    /// Create a reader with default settings
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &Config::default())
    }

    pub fn with_config(reader: R, config: &Config) -> Self {
        Self {
            reader,
            buffer: BytesMut::with_capacity(config.read_chunk_size),
            chunk_size: config.read_chunk_size.max(1),
            max_record_size: config.max_record_size,
            at_eof: false,
        }
    }

    /// Read the next raw record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted and the buffer drained.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            let buffered = match split_on_double_lf(&self.buffer, self.at_eof) {
                Split::EndOfStream => {
                    tracing::trace!("End of response stream");
                    return Ok(None);
                }
                Split::Token { advance, token } => {
                    let frame = token.to_vec();
                    tracing::trace!(advance, frame_len = frame.len(), "Framed response record");
                    self.buffer.advance(advance);
                    return Ok(Some(frame));
                }
                Split::NeedMore => self.buffer.len(),
            };

            if buffered > self.max_record_size {
                tracing::warn!(
                    buffered,
                    max = self.max_record_size,
                    "Response record exceeds limit"
                );
                return Err(GtpError::RecordTooLarge {
                    size: buffered,
                    max: self.max_record_size,
                });
            }

            self.fill()?;
        }
    }

    /// Read the next record as text
    pub fn next_record(&mut self) -> Result<Option<String>> {
        match self.next_frame()? {
            Some(frame) => String::from_utf8(frame)
                .map(Some)
                .map_err(|_| GtpError::InvalidUtf8),
            None => Ok(None),
        }
    }

    /// Bytes received but not yet framed
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Pull one chunk from the reader into the buffer
    fn fill(&mut self) -> Result<()> {
        let start = self.buffer.len();
        self.buffer.resize(start + self.chunk_size, 0);

        let read = loop {
            match self.reader.read(&mut self.buffer[start..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.truncate(start);
                    return Err(e.into());
                }
            }
        };

        self.buffer.truncate(start + read);
        if read == 0 {
            self.at_eof = true;
        }
        tracing::trace!(read, buffered = self.buffer.len(), "Filled frame buffer");
        Ok(())
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
