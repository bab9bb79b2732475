// src/codegen/unicode_blocks.rs

//! Unicode block table from `Blocks.txt`
//!
//! Input lines look like `0000..007F; Basic Latin`. Rows keep their input order.

use super::{TableRow, TableSpec, cpp_string_literal, write_table};
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;
use tracing::debug;

const MAX_CODE_POINT: u32 = 0x10FFFF;

static BLOCK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{4,6})\.\.([0-9A-Fa-f]{4,6});\s*(.+?)\s*$").unwrap()
});

const SPEC: TableSpec<'static> = TableSpec {
    generator: "gen-unicode-blocks",
    element_type: "UnicodeBlock",
    struct_decl: Some(
        "struct UnicodeBlock {\n  char32_t first;\n  char32_t last;\n  const char *name;\n};",
    ),
    name: "UnicodeBlocks",
    sentinel: "{0, 0, nullptr}",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub first: u32,
    pub last: u32,
    pub name: String,
}

impl TableRow for UnicodeBlock {
    fn initializer(&self) -> String {
        format!(
            "{{0x{:04X}, 0x{:04X}, {}}}",
            self.first,
            self.last,
            cpp_string_literal(&self.name)
        )
    }
}

/// Parse one line; `None` for comments, blanks and rejected rows
pub fn parse_line(line: &str) -> Option<UnicodeBlock> {
    let caps = BLOCK_LINE.captures(line.trim())?;
    let first = u32::from_str_radix(&caps[1], 16).ok()?;
    let last = u32::from_str_radix(&caps[2], 16).ok()?;
    if first > last || last > MAX_CODE_POINT {
        return None;
    }
    Some(UnicodeBlock {
        first,
        last,
        name: caps[3].to_string(),
    })
}

pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<UnicodeBlock>> {
    let mut blocks = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(block) => blocks.push(block),
            None => debug!("Skipping block line: {}", line),
        }
    }
    Ok(blocks)
}

pub fn generate<R: BufRead, W: Write>(reader: R, out: &mut W) -> io::Result<usize> {
    let blocks = parse(reader)?;
    write_table(out, &SPEC, &blocks)?;
    Ok(blocks.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("3040..309F; Hiragana"),
            Some(UnicodeBlock {
                first: 0x3040,
                last: 0x309F,
                name: "Hiragana".to_string()
            })
        );
        assert_eq!(parse_line("10000..1007F; Linear B Syllabary").unwrap().first, 0x10000);
    }

    #[test]
    fn test_rejected_lines() {
        assert_eq!(parse_line("# Blocks-15.0.0.txt"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("309F..3040; Backwards"), None);
        assert_eq!(parse_line("10FFFF..110000; Too Far"), None);
        assert_eq!(parse_line("3040; Not a range"), None);
    }

    #[test]
    fn test_generate_keeps_order() {
        let input = "# header\n3040..309F; Hiragana\n\n0000..007F; Basic Latin\n";
        let mut out = Vec::new();
        assert_eq!(generate(input.as_bytes(), &mut out).unwrap(), 2);

        let text = String::from_utf8(out).unwrap();
        let hiragana = text.find("{0x3040, 0x309F, \"Hiragana\"}").unwrap();
        let latin = text.find("{0x0000, 0x007F, \"Basic Latin\"}").unwrap();
        assert!(hiragana < latin);
        assert!(text.contains("const size_t kUnicodeBlocksSize = 2;"));
        assert!(text.ends_with("  {0, 0, nullptr},\n};\n"));
    }
}
