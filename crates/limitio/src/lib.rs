//! Top-level facade crate for limitio.
//!
//! Re-exports the stream wrappers and the pipe tool so users can depend on a single crate.

pub use limitio_core::*;

pub mod pipe {
    pub use limitio_pipe::*;
}
