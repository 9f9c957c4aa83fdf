//! Copy input to output through a bounded reader and a bounded writer.

use std::io::{self, Read, Write};

use limitio_core::error::Result;
use limitio_core::{LimitReader, LimitWriter};

use crate::config::{LimitSection, PipeConfig};

/// Totals for one `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeStats {
    /// Bytes taken from the input.
    pub bytes_read: usize,
    /// Bytes forwarded to the output.
    pub bytes_written: usize,
}

fn limit_of(section: Option<LimitSection>) -> (usize, bool) {
    section.map_or((usize::MAX, false), |s| (s.limit_bytes, s.permissive))
}

/// Copy `input` to `output` until the input ends, honoring both limits.
///
/// A strict limit on either side stops the copy with
/// [`LimitioError::ThresholdExceeded`](limitio_core::LimitioError) after the
/// bytes within the limit have been forwarded. Neither stream is closed.
pub fn run<R: Read, W: Write>(input: R, output: W, cfg: &PipeConfig) -> Result<PipeStats> {
    let (read_limit, read_permissive) = limit_of(cfg.read);
    let (write_limit, write_permissive) = limit_of(cfg.write);

    let mut reader = LimitReader::new(input, read_limit, read_permissive);
    let mut writer = LimitWriter::new(output, write_limit, write_permissive);
    let mut buf = vec![0u8; cfg.buffer_bytes];

    let res = copy(&mut reader, &mut writer, &mut buf);
    let stats = PipeStats {
        bytes_read: reader.bytes_read(),
        bytes_written: writer.written(),
    };
    tracing::debug!(read = stats.bytes_read, written = stats.bytes_written, "pipe finished");

    res?;
    Ok(stats)
}

fn copy<R: Read, W: Write>(
    reader: &mut LimitReader<R>,
    writer: &mut LimitWriter<W>,
    buf: &mut [u8],
) -> io::Result<()> {
    loop {
        let n = match reader.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
    }
    writer.flush()
}
