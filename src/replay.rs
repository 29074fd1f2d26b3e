//! Position stream replay
use std::io::{BufRead, ErrorKind};
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "log")]
use log::{debug, error, warn};

use crate::{reader::BufferedReader, Error, GeoPosition};

/// Outcome of [TraceReader::next]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A new record was parsed, it is now the current position
    Updated(GeoPosition),
    /// Nothing new: malformed record, end of stream or closed reader.
    /// The current position (if any) is preserved.
    Unchanged,
}

impl ParseOutcome {
    /// True if a new record was parsed
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// [TraceReader] replays one position stream, one record at a time.
/// It never fails once opened: malformed records are skipped and the
/// previous position is kept (stale but valid).
#[derive(Debug)]
pub struct TraceReader<R: BufRead = BufferedReader> {
    cursor: Option<R>,
    current: Option<GeoPosition>,
    exhausted: bool,
    line: String,
}

impl TraceReader<BufferedReader> {
    /// Opens the position stream located at `path`,
    /// with seamless .gz decompression (requires the "flate2" feature).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufferedReader::new(path)?;
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps any [BufRead] position stream
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Some(reader),
            current: None,
            exhausted: false,
            line: String::with_capacity(64),
        }
    }

    /// Consumes exactly one line of the stream.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseOutcome {
        let cursor = match self.cursor.as_mut() {
            Some(cursor) => cursor,
            None => return ParseOutcome::Unchanged,
        };

        if self.exhausted {
            return ParseOutcome::Unchanged;
        }

        self.line.clear();

        match cursor.read_line(&mut self.line) {
            Ok(0) => {
                #[cfg(feature = "log")]
                debug!("end of stream");
                self.exhausted = true;
                ParseOutcome::Unchanged
            },
            Ok(_) => match GeoPosition::from_str(&self.line) {
                Ok(position) => {
                    self.current = Some(position);
                    ParseOutcome::Updated(position)
                },
                Err(e) => {
                    #[cfg(feature = "log")]
                    warn!("skipping record: {}", e);
                    #[cfg(not(feature = "log"))]
                    let _ = e;
                    ParseOutcome::Unchanged
                },
            },
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                // non UTF-8 content: the line is consumed anyway
                #[cfg(feature = "log")]
                warn!("skipping record: {}", e);
                ParseOutcome::Unchanged
            },
            Err(e) => {
                #[cfg(feature = "log")]
                error!("stream read error: {}", e);
                #[cfg(not(feature = "log"))]
                let _ = e;
                self.exhausted = true;
                ParseOutcome::Unchanged
            },
        }
    }

    /// Last successfully parsed position, if any
    pub fn current(&self) -> Option<GeoPosition> {
        self.current
    }

    /// True once the end of stream (or a read failure) was reached
    pub fn is_exhausted(&self) -> bool {
        self.exhausted || self.cursor.is_none()
    }

    /// True once [TraceReader::close] was called
    pub fn is_closed(&self) -> bool {
        self.cursor.is_none()
    }

    /// Advances the stream until the current position is dated `target`
    /// or later. Stops early at end of stream. Returns the number of
    /// consumed lines, malformed ones included.
    pub fn skip_to(&mut self, target: i64) -> usize {
        let mut consumed = 0;
        while !self.is_exhausted() {
            match self.current {
                Some(position) if position.timestamp >= target => break,
                _ => {
                    let _ = self.next();
                    consumed += 1;
                },
            }
        }

        #[cfg(feature = "log")]
        debug!("skipped {} records to reach {}", consumed, target);

        consumed
    }

    /// Releases the underlying stream. Calling this more than once is harmless.
    pub fn close(&mut self) {
        self.cursor = None;
    }
}
