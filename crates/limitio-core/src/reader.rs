//! Bounded reader.

use std::io::{self, Read};

use crate::transfer::{End, Transfer};

/// Yields at most `limit` bytes from the wrapped reader.
///
/// Once the limit is reached the inner reader is never consulted again. Every
/// later call returns zero bytes with the same terminal signal: end of stream
/// when `permissive` is set, [`ThresholdExceeded`](crate::ThresholdExceeded)
/// otherwise.
#[derive(Debug)]
pub struct LimitReader<R> {
    inner: R,
    limit: usize,
    read: usize,
    permissive: bool,
}

impl<R: Read> LimitReader<R> {
    /// Wrap `inner`, allowing at most `limit` bytes through. With `permissive`
    /// set, overflow reads as end of stream.
    pub fn new(inner: R, limit: usize, permissive: bool) -> Self {
        Self {
            inner,
            limit,
            read: 0,
            permissive,
        }
    }

    /// Read into `buf`, clamped to the remaining budget.
    ///
    /// The call whose bytes bring the count to the limit carries the terminal
    /// signal itself. A short inner read that stops below the limit defers it
    /// to the next call.
    pub fn read_bounded(&mut self, buf: &mut [u8]) -> Transfer {
        let remaining = self.remaining();
        if remaining == 0 {
            tracing::trace!(limit = self.limit, "read past threshold");
            return Transfer::ended(0, End::overflow(self.permissive));
        }

        let clamp = buf.len().min(remaining);
        let n = match self.inner.read(&mut buf[..clamp]) {
            Ok(n) => n,
            Err(e) => return Transfer::failed(e),
        };
        self.read += n;

        if n == 0 && clamp > 0 {
            return Transfer::ended(0, End::Eof);
        }
        if n == remaining {
            tracing::debug!(
                limit = self.limit,
                permissive = self.permissive,
                "read threshold reached"
            );
            return Transfer::ended(n, End::overflow(self.permissive));
        }
        Transfer::ok(n)
    }

    /// Configured limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes read from the inner reader so far.
    pub fn bytes_read(&self) -> usize {
        self.read
    }

    /// Budget left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.read)
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for LimitReader<R> {
    /// Bytes are delivered first; the terminal signal follows on the next
    /// call (`Ok(0)` when permissive, an error otherwise).
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_bounded(buf).into_io()
    }
}
