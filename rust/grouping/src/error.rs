use thiserror::Error;

/// Result type for grouping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during planar grouping
///
/// Only buffer-level invariant violations are fatal; malformed geometry
/// inside well-formed buffers degrades triangle-by-triangle instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Position buffer length {0} is not a multiple of 3")]
    InvalidPositionBuffer(usize),

    #[error("Index buffer length {0} is not a multiple of 3")]
    InvalidIndexBuffer(usize),
}
