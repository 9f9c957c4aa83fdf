//! limitio-pipe
//!
//! Copies stdin to stdout through a bounded reader and a bounded writer.
//! Usage: `limitio-pipe [config.yaml]` (defaults to `limitio.yaml`).
//! Logs go to stderr; filter with `RUST_LOG`.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use limitio_pipe::config;

const DEFAULT_CONFIG: &str = "limitio.yaml";

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.into());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), "config load failed: {e}");
            return ExitCode::from(e.code().exit_code());
        }
    };

    tracing::info!(
        %path,
        read_limit = ?cfg.read.map(|s| s.limit_bytes),
        write_limit = ?cfg.write.map(|s| s.limit_bytes),
        "limitio-pipe starting"
    );

    match limitio_pipe::run(io::stdin().lock(), io::stdout().lock(), &cfg) {
        Ok(stats) => {
            tracing::info!(read = stats.bytes_read, written = stats.bytes_written, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "pipe failed: {e}");
            ExitCode::from(e.code().exit_code())
        }
    }
}
