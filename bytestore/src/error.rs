//! Error types for store and codec operations

use thiserror::Error;

/// Error type for store and codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("buffer underflow: requested {requested} bytes, {available} available")]
    BufferUnderflow { requested: usize, available: usize },
    #[error("size mismatch: record declares {declared} bytes, {available} available")]
    SizeMismatch { declared: usize, available: usize },
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid char: {0:#x}")]
    InvalidChar(u32),
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
