//! limitio core: size-bounded decorators over byte streams.
//!
//! - [`truncate`]: cap a byte sequence to at most N bytes.
//! - [`writer::LimitWriter`]: forwards at most N bytes to a wrapped `Write`.
//! - [`reader::LimitReader`]: yields at most N bytes from a wrapped `Read`.
//!
//! Both wrappers take a `permissive` flag. Strict wrappers report overflow as
//! [`ThresholdExceeded`]; permissive ones report it as the normal completion
//! signal of the operation (a successful write, or end of stream).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Slicing is always
//! clamped to the buffer length first.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod reader;
pub mod transfer;
pub mod truncate;
pub mod writer;

pub use error::{is_threshold_exceeded, ErrorCode, LimitioError, Result, ThresholdExceeded};
pub use reader::LimitReader;
pub use transfer::{End, Transfer};
pub use truncate::{at_most_first_n_bytes, AtMostFirstN};
pub use writer::LimitWriter;
