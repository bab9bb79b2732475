// src/codegen/code_page.rs

//! Code page mapping table from Unicode consortium mapping files
//!
//! Each data row is whitespace-separated: `0x8140 0x3000 #IDEOGRAPHIC SPACE`.
//! Rows whose code has no Unicode mapping carry only one field and are
//! skipped along with comments. Rows keep their input order.

use super::{TableRow, TableSpec, write_table};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Default array name (`kCodePage`)
pub const DEFAULT_TABLE_NAME: &str = "CodePage";

const MAX_CODE_POINT: u32 = 0x10FFFF;

const STRUCT_DECL: &str = "struct CodePageMapping {\n  uint16_t code;\n  char32_t ucs;\n};";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePageMapping {
    pub code: u16,
    pub ucs: u32,
    pub comment: Option<String>,
}

impl TableRow for CodePageMapping {
    fn initializer(&self) -> String {
        format!("{{0x{:04X}, 0x{:04X}}}", self.code, self.ucs)
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

fn parse_prefixed_hex(field: &str) -> Option<u32> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))?;
    u32::from_str_radix(digits, 16).ok()
}

pub fn parse_line(line: &str) -> Option<CodePageMapping> {
    let (data, comment) = match line.split_once('#') {
        Some((data, comment)) => (data, Some(comment)),
        None => (line, None),
    };

    let mut fields = data.split_whitespace();
    let code = parse_prefixed_hex(fields.next()?)?;
    let ucs = parse_prefixed_hex(fields.next()?)?;
    let code = u16::try_from(code).ok()?;
    if ucs > MAX_CODE_POINT {
        return None;
    }

    // A trailing backslash would splice the next generated line into the comment
    let comment = comment
        .map(|c| c.trim().trim_end_matches('\\').trim_end())
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Some(CodePageMapping { code, ucs, comment })
}

pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<CodePageMapping>> {
    let mut mappings = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(mapping) => mappings.push(mapping),
            None => debug!("Skipping mapping line: {}", line),
        }
    }
    Ok(mappings)
}

/// Render already-parsed mappings under the array name `k<table_name>`
pub fn write<W: Write>(out: &mut W, table_name: &str, mappings: &[CodePageMapping]) -> io::Result<()> {
    let spec = TableSpec {
        generator: "gen-code-page",
        element_type: "CodePageMapping",
        struct_decl: Some(STRUCT_DECL),
        name: table_name,
        sentinel: "{0, 0}",
    };
    write_table(out, &spec, mappings)
}
