use thiserror::Error;

/// Result type for mesh operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh ingestion
#[derive(Error, Debug)]
pub enum Error {
    #[error("Position buffer length {0} is not a multiple of 3")]
    InvalidPositionBuffer(usize),

    #[error("Index buffer length {0} is not a multiple of 3")]
    InvalidIndexBuffer(usize),

    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("Malformed STL: {0}")]
    MalformedStl(String),
}
