// src/codegen/mod.rs

//! C++ static table generators
//!
//! Each generator parses one line-oriented data file into rows and hands them
//! to [`write_table`], which renders the shared layout:
//!
//! ```text
//! // Generated by ime-build-tools <tool>. DO NOT EDIT.
//!
//! struct Type { ... };
//!
//! const size_t kNameSize = N;
//!
//! const Type kName[] = {
//!   {...},
//!   <sentinel>,
//! };
//! ```
//!
//! The sentinel record always closes the array, even when there are no rows,
//! so consumers can walk the table without the size constant.

pub mod code_page;
pub mod east_asian_width;
pub mod sentences;
pub mod svm;
pub mod unicode_blocks;
pub mod unicode_data;

use std::io::{self, Write};

/// A record that renders as one C++ aggregate initializer
pub trait TableRow {
    /// Initializer text without the trailing comma, e.g. `{0x41, "A"}`
    fn initializer(&self) -> String;

    /// Optional trailing `//` comment
    fn comment(&self) -> Option<&str> {
        None
    }
}

/// Shape of a generated table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec<'a> {
    /// Subcommand name recorded in the generated header
    pub generator: &'a str,
    /// Element type of the array, e.g. `UnicodeBlock`
    pub element_type: &'a str,
    /// Struct definition for `element_type`, omitted for builtin types
    pub struct_decl: Option<&'a str>,
    /// Array name without the `k` prefix
    pub name: &'a str,
    /// Terminating record
    pub sentinel: &'a str,
}

/// Header line stamped at the top of every generated file
pub fn write_header<W: Write>(out: &mut W, generator: &str) -> io::Result<()> {
    writeln!(out, "// Generated by ime-build-tools {}. DO NOT EDIT.", generator)?;
    writeln!(out)
}

/// Render `rows` as a sentinel-terminated C++ array
pub fn write_table<W: Write, R: TableRow>(out: &mut W, spec: &TableSpec<'_>, rows: &[R]) -> io::Result<()> {
    write_header(out, spec.generator)?;
    write_table_body(out, spec, rows)
}

/// [`write_table`] without the header, for generators that emit extra
/// constants first
pub fn write_table_body<W: Write, R: TableRow>(
    out: &mut W,
    spec: &TableSpec<'_>,
    rows: &[R],
) -> io::Result<()> {
    if let Some(decl) = spec.struct_decl {
        writeln!(out, "{}", decl.trim_end())?;
        writeln!(out)?;
    }

    writeln!(out, "const size_t k{}Size = {};", spec.name, rows.len())?;
    writeln!(out)?;
    writeln!(out, "const {} k{}[] = {{", spec.element_type, spec.name)?;
    for row in rows {
        match row.comment() {
            Some(comment) => writeln!(out, "  {},  // {}", row.initializer(), comment)?,
            None => writeln!(out, "  {},", row.initializer())?,
        }
    }
    writeln!(out, "  {},", spec.sentinel)?;
    writeln!(out, "}};")?;
    Ok(())
}

/// Quote `s` as a pure-ASCII C++ string literal
///
/// Bytes outside printable ASCII become three-digit octal escapes; octal
/// escapes stop after three digits, so a following digit cannot be swallowed.
pub fn cpp_string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for &byte in s.as_bytes() {
        match byte {
            b'"' => literal.push_str("\\\""),
            b'\\' => literal.push_str("\\\\"),
            b'\n' => literal.push_str("\\n"),
            b'\t' => literal.push_str("\\t"),
            b'\r' => literal.push_str("\\r"),
            // "??" can start a trigraph
            b'?' => literal.push_str("\\?"),
            0x20..=0x7e => literal.push(byte as char),
            _ => literal.push_str(&format!("\\{:03o}", byte)),
        }
    }
    literal.push('"');
    literal
}

/// Strip a trailing `#` comment and surrounding whitespace
///
/// Returns `None` for lines that are empty once the comment is gone.
pub fn strip_comment(line: &str) -> Option<&str> {
    let line = line[..line.find('#').unwrap_or(line.len())].trim();
    if line.is_empty() { None } else { Some(line) }
}
