// src/codegen/sentences.rs

//! Test sentence corpus as a C++ string array

use super::{TableRow, TableSpec, cpp_string_literal, write_table};
use std::io::{self, BufRead, Write};

const SPEC: TableSpec<'static> = TableSpec {
    generator: "gen-test-sentences",
    element_type: "char *const",
    struct_decl: None,
    name: "TestSentences",
    sentinel: "nullptr",
};

struct Sentence<'a>(&'a str);

impl TableRow for Sentence<'_> {
    fn initializer(&self) -> String {
        cpp_string_literal(self.0)
    }
}

/// Collect sentences in input order, skipping blank and `#` comment lines
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }
        sentences.push(trimmed.to_string());
    }
    Ok(sentences)
}

pub fn write<W: Write>(out: &mut W, sentences: &[String]) -> io::Result<()> {
    let rows: Vec<Sentence<'_>> = sentences.iter().map(|s| Sentence(s.as_str())).collect();
    write_table(out, &SPEC, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let input = "# corpus\nきょうはいいてんき\n\n  \nhe said \"hi\"\r\n";
        assert_eq!(
            parse(input.as_bytes()).unwrap(),
            vec!["きょうはいいてんき".to_string(), "he said \"hi\"".to_string()]
        );
    }

    #[test]
    fn test_write() {
        let mut out = Vec::new();
        write(&mut out, &["a\\b".to_string()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("const size_t kTestSentencesSize = 1;"));
        assert!(text.ends_with("const char *const kTestSentences[] = {\n  \"a\\\\b\",\n  nullptr,\n};\n"));
    }
}
