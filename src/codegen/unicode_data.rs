// src/codegen/unicode_data.rs

//! Character name table from `UnicodeData.txt`
//!
//! Fields are `;`-delimited: `3042;HIRAGANA LETTER A;Lo;0;L;;;;;N;;;;;`.
//! Only the code point and name are used. The table is sorted by code point.

use super::{TableRow, TableSpec, cpp_string_literal, write_table};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MAX_CODE_POINT: u32 = 0x10FFFF;

const SPEC: TableSpec<'static> = TableSpec {
    generator: "gen-unicode-data",
    element_type: "UnicodeCharacter",
    struct_decl: Some("struct UnicodeCharacter {\n  char32_t code_point;\n  const char *name;\n};"),
    name: "UnicodeData",
    sentinel: "{0, nullptr}",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeCharacter {
    pub code_point: u32,
    pub name: String,
}

impl TableRow for UnicodeCharacter {
    fn initializer(&self) -> String {
        format!("{{0x{:04X}, {}}}", self.code_point, cpp_string_literal(&self.name))
    }
}

/// Parse one record
///
/// Rejects short rows, bad hex, code points past U+10FFFF and `<...>`
/// pseudo-names such as `<control>` or `<CJK Ideograph, First>`.
pub fn parse_line(line: &str) -> Option<UnicodeCharacter> {
    let mut fields = line.split(';');
    let code = fields.next()?.trim();
    let name = fields.next()?.trim();

    let code_point = u32::from_str_radix(code, 16).ok()?;
    if code_point > MAX_CODE_POINT || name.is_empty() || name.starts_with('<') {
        return None;
    }
    Some(UnicodeCharacter {
        code_point,
        name: name.to_string(),
    })
}

/// Parse all records, ordered by code point; a repeated code point keeps the
/// last name seen
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<UnicodeCharacter>> {
    let mut by_code = BTreeMap::new();
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(ch) => {
                by_code.insert(ch.code_point, ch);
            }
            None => debug!("Skipping data line: {}", line),
        }
    }
    Ok(by_code.into_values().collect())
}

pub fn generate<R: BufRead, W: Write>(reader: R, out: &mut W) -> io::Result<usize> {
    let characters = parse(reader)?;
    write_table(out, &SPEC, &characters)?;
    Ok(characters.len())
}
