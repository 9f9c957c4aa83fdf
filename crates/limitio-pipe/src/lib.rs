//! limitio pipe library entry.
//!
//! Strict YAML config plus the copy loop used by the `limitio-pipe` binary.
//! Exposed as a library so integration tests can drive it with in-memory
//! streams.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod pipe;

pub use pipe::{run, PipeStats};
