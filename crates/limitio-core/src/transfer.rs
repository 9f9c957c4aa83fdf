//! Outcome of a single bounded transfer.
//!
//! `std::io` can report either a byte count or an error from one call, never
//! both. [`Transfer`] carries the two together so the call that hits the
//! limit can report its bytes and the terminal condition at once.

use std::io;

use crate::error::ThresholdExceeded;

/// Terminal condition raised by a transfer.
#[derive(Debug)]
pub enum End {
    /// Standard end of stream (reader only).
    Eof,
    /// [`ThresholdExceeded`] or an error from the wrapped stream.
    Error(io::Error),
}

impl End {
    /// Terminal signal of an exhausted reader.
    pub(crate) fn overflow(as_eof: bool) -> Self {
        if as_eof {
            End::Eof
        } else {
            End::Error(ThresholdExceeded.into())
        }
    }
}

/// Bytes reported by one call, plus the terminal condition of that same call.
#[derive(Debug)]
pub struct Transfer {
    /// Bytes reported to the caller.
    pub n: usize,
    /// `None` while the stream can keep going.
    pub end: Option<End>,
}

impl Transfer {
    pub(crate) fn ok(n: usize) -> Self {
        Self { n, end: None }
    }

    pub(crate) fn ended(n: usize, end: End) -> Self {
        Self { n, end: Some(end) }
    }

    pub(crate) fn failed(err: io::Error) -> Self {
        Self::ended(0, End::Error(err))
    }

    /// The carried error, if any.
    pub fn error(&self) -> Option<&io::Error> {
        match &self.end {
            Some(End::Error(e)) => Some(e),
            _ => None,
        }
    }

    /// True when the call ended with a standard end of stream.
    pub fn is_eof(&self) -> bool {
        matches!(self.end, Some(End::Eof))
    }

    /// True when the call carried [`ThresholdExceeded`].
    pub fn is_threshold_exceeded(&self) -> bool {
        self.error().is_some_and(crate::error::is_threshold_exceeded)
    }

    /// Collapse into the `std::io` shape: bytes win, the terminal condition is
    /// left for the next call to report.
    pub(crate) fn into_io(self) -> io::Result<usize> {
        match self.end {
            Some(End::Error(e)) if self.n == 0 => Err(e),
            _ => Ok(self.n),
        }
    }
}
