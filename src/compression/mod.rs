// src/compression/mod.rs
//! zlib compression for whole files
//!
//! Data is always fully buffered: the input file is read into memory, run
//! through the zlib (RFC 1950) encoder or decoder, and written out in one go.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use thiserror::Error;
use tracing::debug;

/// Compression-related errors
#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Failed to compress data: {0}")]
    Compression(io::Error),

    #[error("Failed to decompress zlib data: {0}")]
    Decompression(io::Error),

    #[error("Failed to access {path}: {source}")]
    File { path: String, source: io::Error },
}

/// Argument problems reported by [`ZlibCommand::from_args`]
///
/// The display text is the exact message printed for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZlibUsage {
    #[error("Invalid arguments")]
    InvalidArguments,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// One whole-file zlib operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZlibCommand {
    Compress { input: PathBuf, output: PathBuf },
    Decompress { input: PathBuf, output: PathBuf },
}

impl ZlibCommand {
    /// Parse `compress|decompress <in> <out>`
    ///
    /// The argument count is checked before the command name.
    pub fn from_args(args: &[String]) -> Result<Self, ZlibUsage> {
        let [command, input, output] = args else {
            return Err(ZlibUsage::InvalidArguments);
        };
        let (input, output) = (PathBuf::from(input), PathBuf::from(output));
        match command.as_str() {
            "compress" => Ok(Self::Compress { input, output }),
            "decompress" => Ok(Self::Decompress { input, output }),
            other => Err(ZlibUsage::UnknownCommand(other.to_string())),
        }
    }

    pub fn input(&self) -> &Path {
        match self {
            Self::Compress { input, .. } | Self::Decompress { input, .. } => input,
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            Self::Compress { output, .. } | Self::Decompress { output, .. } => output,
        }
    }

    /// Read the input, transform it and write the output
    pub fn run(&self) -> Result<(), CompressionError> {
        match self {
            Self::Compress { input, output } => compress_file(input, output),
            Self::Decompress { input, output } => decompress_file(input, output),
        }
    }
}

/// Compress a byte slice with zlib at the default level
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(CompressionError::Compression)?;
    encoder.finish().map_err(CompressionError::Compression)
}

/// Decompress a complete zlib stream
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(CompressionError::Decompression)?;
    Ok(output)
}

/// Compress `input` into `output`
pub fn compress_file(input: &Path, output: &Path) -> Result<(), CompressionError> {
    transform_file(input, output, compress)
}

/// Decompress `input` into `output`
pub fn decompress_file(input: &Path, output: &Path) -> Result<(), CompressionError> {
    transform_file(input, output, decompress)
}

fn transform_file(
    input: &Path,
    output: &Path,
    transform: fn(&[u8]) -> Result<Vec<u8>, CompressionError>,
) -> Result<(), CompressionError> {
    let data = fs::read(input).map_err(|e| CompressionError::File {
        path: input.display().to_string(),
        source: e,
    })?;
    let result = transform(&data)?;
    debug!(
        "{} -> {}: {} bytes in, {} bytes out",
        input.display(),
        output.display(),
        data.len(),
        result.len()
    );
    fs::write(output, result).map_err(|e| CompressionError::File {
        path: output.display().to_string(),
        source: e,
    })
}
