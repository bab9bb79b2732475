// src/archive/mod.rs

//! Sub-tree extraction from ZIP archives
//!
//! Copies the entries living under one top-level directory of an archive into
//! a fresh archive. Entries are copied raw, so compressed data, names and
//! metadata come across byte for byte without being re-encoded.

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::{ZipArchive, ZipWriter};

/// Top-level directory kept by default
pub const DEFAULT_PREFIX: &str = "data";

/// Outcome of an extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub kept: usize,
    pub dropped: usize,
}

/// Whether an entry name belongs to the `prefix` sub-tree
///
/// The first path segment must equal `prefix`, something must follow it, and
/// no segment may be `..`.
pub fn is_under_prefix(name: &str, prefix: &str) -> bool {
    let mut segments = name.split('/');
    if segments.next() != Some(prefix) {
        return false;
    }

    let mut rest = segments.peekable();
    if rest.peek().is_none() {
        return false;
    }
    rest.all(|segment| segment != "..")
}

/// Copy every entry of `reader` under `prefix` into `writer`
pub fn extract_subtree<R, W>(reader: R, writer: W, prefix: &str) -> Result<ExtractSummary>
where
    R: Read + Seek,
    W: Write + Seek,
{
    let mut archive = ZipArchive::new(reader)?;
    copy_subtree(&mut archive, writer, prefix)
}

/// Copy the `prefix` entries of an already parsed archive into `writer`
pub fn copy_subtree<R, W>(archive: &mut ZipArchive<R>, writer: W, prefix: &str) -> Result<ExtractSummary>
where
    R: Read + Seek,
    W: Write + Seek,
{
    let mut output = ZipWriter::new(writer);
    let mut summary = ExtractSummary::default();

    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        if is_under_prefix(entry.name(), prefix) {
            debug!("Keeping {}", entry.name());
            output.raw_copy_file(entry)?;
            summary.kept += 1;
        } else {
            debug!("Dropping {}", entry.name());
            summary.dropped += 1;
        }
    }

    output.finish()?;
    Ok(summary)
}

/// File-based wrapper around [`copy_subtree`]
///
/// The input archive is parsed before the output is created, so a missing or
/// unreadable input never leaves an empty output archive behind.
pub fn extract_subtree_file(input: &Path, output: &Path, prefix: &str) -> Result<ExtractSummary> {
    let mut archive = ZipArchive::new(BufReader::new(File::open(input)?))?;
    let writer = BufWriter::new(File::create(output)?);
    let summary = copy_subtree(&mut archive, writer, prefix)?;

    info!(
        "Extracted {} of {} entries under '{}/' into {}",
        summary.kept,
        summary.kept + summary.dropped,
        prefix,
        output.display()
    );
    Ok(summary)
}
