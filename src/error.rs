// src/error.rs

//! Crate-wide error type

use std::io;
use thiserror::Error;

/// Errors raised by the build tool library
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Input that cannot be turned into output at all (not a skipped row)
    #[error("Malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Missing required key '{0}'")]
    MissingKey(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
