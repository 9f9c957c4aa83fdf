//! Bounded writer.

use std::io::{self, Write};

use crate::error::ThresholdExceeded;
use crate::transfer::{End, Transfer};
use crate::truncate::at_most_first_n_bytes;

/// Forwards at most `limit` bytes to the wrapped writer.
///
/// Bytes past the limit are never forwarded. What the caller sees on overflow
/// depends on the mode:
/// - strict: [`ThresholdExceeded`](crate::ThresholdExceeded), with the count
///   of bytes actually forwarded;
/// - permissive: success with the full requested length, the overflow being
///   silently dropped.
///
/// The wrapper never closes the inner writer. Wrap a `&mut W` to keep
/// ownership, or take it back with [`LimitWriter::into_inner`].
#[derive(Debug)]
pub struct LimitWriter<W> {
    inner: W,
    limit: usize,
    written: usize,
    permissive: bool,
}

impl<W: Write> LimitWriter<W> {
    /// Wrap `inner`, allowing at most `limit` bytes through.
    pub fn new(inner: W, limit: usize, permissive: bool) -> Self {
        Self {
            inner,
            limit,
            written: 0,
            permissive,
        }
    }

    /// Forward the part of `buf` that fits in the remaining budget.
    ///
    /// Unlike [`Write::write`], the call that truncates reports both the
    /// count and the threshold condition.
    pub fn write_bounded(&mut self, buf: &[u8]) -> Transfer {
        let remaining = self.remaining();
        let to_write = at_most_first_n_bytes(buf, remaining);

        let n = if to_write.is_empty() {
            0
        } else {
            match self.inner.write(to_write) {
                Ok(n) => n,
                Err(e) => return Transfer::failed(e),
            }
        };
        self.written += n;

        // Short write from the inner writer: nothing dropped yet.
        if n < to_write.len() || buf.len() <= remaining {
            return Transfer::ok(n);
        }

        if remaining > 0 {
            tracing::debug!(
                limit = self.limit,
                dropped = buf.len() - n,
                permissive = self.permissive,
                "write threshold reached"
            );
        } else {
            tracing::trace!(limit = self.limit, len = buf.len(), "write past threshold");
        }

        if self.permissive {
            Transfer::ok(buf.len())
        } else {
            Transfer::ended(n, End::Error(ThresholdExceeded.into()))
        }
    }

    /// Configured limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes forwarded to the inner writer so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Budget left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.written)
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LimitWriter<W> {
    /// Strict overflow is returned as an error only by a call that forwards
    /// nothing, so `write_all` reports it once the budget is spent.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bounded(buf).into_io()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
