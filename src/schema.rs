// src/schema.rs

//! Protocol schema rewriting
//!
//! "Litifying" a `.proto` file appends the directive that restricts its
//! generated code to the lite runtime.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Directive appended to every litified schema
pub const LITE_RUNTIME_OPTION: &str = "option optimize_for = LITE_RUNTIME;";

/// Copy `reader` line by line to `writer`, then append a blank line and the
/// lite-runtime directive
pub fn litify<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    for line in reader.lines() {
        writeln!(writer, "{}", line?)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", LITE_RUNTIME_OPTION)?;
    writer.flush()?;
    Ok(())
}

pub fn litify_file(input: &Path, output: &Path) -> Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    litify(reader, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        litify(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_appends_directive() {
        assert_eq!(
            run("syntax = \"proto2\";\nmessage A {}\n"),
            "syntax = \"proto2\";\nmessage A {}\n\noption optimize_for = LITE_RUNTIME;\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), "\noption optimize_for = LITE_RUNTIME;\n");
    }

    #[test]
    fn test_missing_final_newline() {
        assert_eq!(
            run("package p;"),
            "package p;\n\noption optimize_for = LITE_RUNTIME;\n"
        );
    }
}
