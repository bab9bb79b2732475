// tests/archive.rs

//! Archive sub-tree extraction tests: entry filtering and byte preservation.

mod common;

use common::{create_zip, read_zip, write_file};
use ime_build_tools::archive::{DEFAULT_PREFIX, extract_subtree_file};
use ime_build_tools::{Error, ExtractSummary};

#[test]
fn test_keeps_only_prefix_entries() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.zip");
    let output = dir.path().join("out.zip");

    let big = vec![b'x'; 64 * 1024];
    create_zip(
        &input,
        &[
            ("data/dictionary.txt", b"dictionary contents"),
            ("README", b"top level"),
            ("data/sub/big.bin", &big),
            ("database/other.txt", b"similar prefix"),
            ("data/../escape.txt", b"traversal"),
            ("tools/data/x.txt", b"nested prefix"),
            ("data/connection.bin", &[0u8, 1, 2, 255]),
        ],
    );

    let summary = extract_subtree_file(&input, &output, DEFAULT_PREFIX).unwrap();
    assert_eq!(summary, ExtractSummary { kept: 3, dropped: 4 });

    let entries = read_zip(&output);
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["data/dictionary.txt", "data/sub/big.bin", "data/connection.bin"]
    );
    assert_eq!(entries[0].1, b"dictionary contents");
    assert_eq!(entries[1].1, big);
    assert_eq!(entries[2].1, vec![0u8, 1, 2, 255]);
}

#[test]
fn test_no_matches_writes_empty_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.zip");
    let output = dir.path().join("out.zip");
    create_zip(&input, &[("other/a.txt", b"a"), ("b.txt", b"b")]);

    let summary = extract_subtree_file(&input, &output, DEFAULT_PREFIX).unwrap();
    assert_eq!(summary, ExtractSummary { kept: 0, dropped: 2 });
    assert!(output.exists());
    assert!(read_zip(&output).is_empty());
}

#[test]
fn test_custom_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.zip");
    let output = dir.path().join("out.zip");
    create_zip(&input, &[("data/a", b"a"), ("res/b", b"b")]);

    extract_subtree_file(&input, &output, "res").unwrap();
    assert_eq!(read_zip(&output), vec![("res/b".to_string(), b"b".to_vec())]);
}

#[test]
fn test_missing_input_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.zip");

    let err = extract_subtree_file(&dir.path().join("missing.zip"), &output, DEFAULT_PREFIX)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!output.exists());
}

#[test]
fn test_not_an_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(&dir, "in.zip", b"plain text, not a zip");
    let output = dir.path().join("out.zip");

    let err = extract_subtree_file(&input, &output, DEFAULT_PREFIX).unwrap_err();
    assert!(matches!(err, Error::Zip(_)));
    assert!(!output.exists());
}
