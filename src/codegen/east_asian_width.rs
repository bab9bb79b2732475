// src/codegen/east_asian_width.rs

//! East Asian Width range table from `EastAsianWidth.txt`
//!
//! Rows use a fixed-width layout, `XXXX;P` or `XXXX..YYYY;P`, with exactly four
//! hex digits per code point. Supplementary-plane rows do not fit that layout
//! and are skipped, so the table covers the BMP only.

use super::{TableRow, TableSpec, cpp_string_literal, strip_comment, write_table};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Property values defined by UAX #11
pub const WIDTH_PROPERTIES: &[&str] = &["A", "F", "H", "N", "Na", "W"];

const SPEC: TableSpec<'static> = TableSpec {
    generator: "gen-east-asian-width",
    element_type: "EastAsianWidthRange",
    struct_decl: Some(
        "struct EastAsianWidthRange {\n  char16_t first;\n  char16_t last;\n  const char *property;\n};",
    ),
    name: "EastAsianWidthRanges",
    sentinel: "{0, 0, nullptr}",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthRange {
    pub first: u16,
    pub last: u16,
    pub property: String,
}

impl TableRow for WidthRange {
    fn initializer(&self) -> String {
        format!(
            "{{0x{:04X}, 0x{:04X}, {}}}",
            self.first,
            self.last,
            cpp_string_literal(&self.property)
        )
    }
}

fn parse_hex4(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}

pub fn parse_line(line: &str) -> Option<WidthRange> {
    let line = strip_comment(line)?;
    let (range, property) = line.split_once(';')?;
    let property = property.trim();
    if !WIDTH_PROPERTIES.contains(&property) {
        return None;
    }

    let range = range.trim();
    let (first, last) = match range.split_once("..") {
        Some((first, last)) => (parse_hex4(first)?, parse_hex4(last)?),
        None => {
            let single = parse_hex4(range)?;
            (single, single)
        }
    };
    if first > last {
        return None;
    }
    Some(WidthRange {
        first,
        last,
        property: property.to_string(),
    })
}

pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<WidthRange>> {
    let mut ranges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(range) => ranges.push(range),
            None => debug!("Skipping width line: {}", line),
        }
    }
    Ok(ranges)
}

pub fn generate<R: BufRead, W: Write>(reader: R, out: &mut W) -> io::Result<usize> {
    let ranges = parse(reader)?;
    write_table(out, &SPEC, &ranges)?;
    Ok(ranges.len())
}
