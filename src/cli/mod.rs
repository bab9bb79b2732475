// src/cli/mod.rs
//! CLI definitions for ime-build-tools
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Table generators (C++ source):
//! - `gen-unicode-blocks`, `gen-unicode-data`, `gen-east-asian-width`,
//!   `gen-code-page`, `gen-svm-classifier` - print to stdout
//! - `gen-test-sentences` - writes `--output`
//!
//! File tools:
//! - `extract-subtree` - filter a ZIP archive down to one directory
//! - `zlib-util` - compress/decompress one file
//! - `litify` - append the lite-runtime option to a schema
//! - `mozc-version` - assemble the version string
//! - `render-template` - expand `${name}` placeholders in a file
//! - `run-in-dir` - run a program from another directory

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ime_build_tools::archive::DEFAULT_PREFIX;
use ime_build_tools::codegen::code_page::DEFAULT_TABLE_NAME;
use ime_build_tools::exec::DEFAULT_INTERPRETER;

#[derive(Parser)]
#[command(name = "ime-build-tools")]
#[command(author = "IME Build Tools Contributors")]
#[command(version)]
#[command(about = "Build-time helpers for the input method engine", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // =========================================================================
    // Table generators
    // =========================================================================
    /// Generate the Unicode block table from Blocks.txt
    GenUnicodeBlocks {
        /// Path to Blocks.txt
        path: PathBuf,
    },

    /// Generate the character name table from UnicodeData.txt
    GenUnicodeData {
        /// Path to UnicodeData.txt
        path: PathBuf,
    },

    /// Generate the East Asian Width range table from EastAsianWidth.txt
    GenEastAsianWidth {
        /// Path to EastAsianWidth.txt
        path: PathBuf,
    },

    /// Generate a code page mapping table (e.g. from CP932.TXT)
    GenCodePage {
        /// Path to the mapping file
        path: PathBuf,

        /// Array name, emitted as k<NAME>
        #[arg(long, default_value = DEFAULT_TABLE_NAME)]
        name: String,
    },

    /// Generate SVM classifier weights from a LIBLINEAR model file
    GenSvmClassifier {
        /// Path to the model file
        path: PathBuf,
    },

    /// Generate the test sentence array
    GenTestSentences {
        /// Sentence corpus, one sentence per line
        #[arg(long)]
        input: PathBuf,

        /// Generated C++ file
        #[arg(long)]
        output: PathBuf,
    },

    // =========================================================================
    // File tools
    // =========================================================================
    /// Copy the entries under one top-level directory into a new ZIP archive
    ExtractSubtree {
        /// Source archive
        #[arg(long)]
        input: PathBuf,

        /// Archive to create
        #[arg(long)]
        output: PathBuf,

        /// Top-level directory to keep
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
    },

    /// Compress or decompress a file with zlib: compress|decompress <in> <out>
    ZlibUtil {
        /// Command, input file and output file (checked by the command itself)
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Copy a protocol schema and append the lite-runtime option
    Litify {
        /// Source schema
        #[arg(long = "in_file_path")]
        in_file_path: PathBuf,

        /// Schema to write
        #[arg(long = "out_file_path")]
        out_file_path: PathBuf,
    },

    /// Write ENGINE_VERSION.DATA_VERSION.TAG from the version template
    MozcVersion {
        /// Build tag appended as the last component
        #[arg(long)]
        tag: String,

        /// Version template of KEY = VALUE lines
        #[arg(long = "mozc_version_template")]
        mozc_version_template: PathBuf,

        /// File receiving the version string
        #[arg(long)]
        output: PathBuf,
    },

    /// Expand ${name} placeholders in a file
    RenderTemplate {
        /// Template file
        #[arg(long)]
        input: PathBuf,

        /// Expanded file
        #[arg(long)]
        output: PathBuf,

        /// Variable definition NAME=VALUE (repeatable)
        #[arg(short = 'D', long = "define")]
        defines: Vec<String>,

        /// Version template whose keys become variables
        #[arg(long = "mozc_version_template")]
        mozc_version_template: Option<PathBuf>,
    },

    /// Change into a directory and launch a program without waiting for it
    RunInDir {
        /// Interpreter prepended for .py programs
        #[arg(long, default_value = DEFAULT_INTERPRETER)]
        interpreter: String,

        /// Directory to run in
        dir: PathBuf,

        /// Program followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zlib_util_takes_any_arg_count() {
        let cli = Cli::try_parse_from(["ime-build-tools", "zlib-util", "compress"]).unwrap();
        match cli.command {
            Commands::ZlibUtil { args } => assert_eq!(args, vec!["compress"]),
            _ => panic!("expected zlib-util"),
        }
    }

    #[test]
    fn test_zlib_util_verbose_after_args() {
        let cli =
            Cli::try_parse_from(["ime-build-tools", "zlib-util", "compress", "a", "b", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::ZlibUtil { args } => assert_eq!(args, vec!["compress", "a", "b"]),
            _ => panic!("expected zlib-util"),
        }
    }

    #[test]
    fn test_run_in_dir_keeps_program_flags() {
        let cli = Cli::try_parse_from(["ime-build-tools", "run-in-dir", "out", "ls", "-v"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::RunInDir { dir, command, .. } => {
                assert_eq!(dir, PathBuf::from("out"));
                assert_eq!(command, vec!["ls", "-v"]);
            }
            _ => panic!("expected run-in-dir"),
        }
    }

    #[test]
    fn test_render_template_repeated_defines() {
        let cli = Cli::try_parse_from([
            "ime-build-tools",
            "render-template",
            "--input",
            "in",
            "--output",
            "out",
            "-D",
            "A=1",
            "--define",
            "B=2",
        ])
        .unwrap();
        match cli.command {
            Commands::RenderTemplate { defines, mozc_version_template, .. } => {
                assert_eq!(defines, vec!["A=1", "B=2"]);
                assert!(mozc_version_template.is_none());
            }
            _ => panic!("expected render-template"),
        }
    }
}
