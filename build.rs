// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Positional data file argument shared by the stdout generators
fn data_file_arg() -> Arg {
    Arg::new("path").required(true).help("Path to the data file")
}

// Mirrors the derive definitions in src/cli/mod.rs, which are the source of
// truth. Change both together.
fn build_cli() -> Command {
    Command::new("ime-build-tools")
        .version(env!("CARGO_PKG_VERSION"))
        .author("IME Build Tools Contributors")
        .about("Build-time helpers for the input method engine")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr (RUST_LOG overrides)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("gen-unicode-blocks")
                .about("Generate the Unicode block table from Blocks.txt")
                .arg(data_file_arg()),
        )
        .subcommand(
            Command::new("gen-unicode-data")
                .about("Generate the character name table from UnicodeData.txt")
                .arg(data_file_arg()),
        )
        .subcommand(
            Command::new("gen-east-asian-width")
                .about("Generate the East Asian Width range table from EastAsianWidth.txt")
                .arg(data_file_arg()),
        )
        .subcommand(
            Command::new("gen-code-page")
                .about("Generate a code page mapping table (e.g. from CP932.TXT)")
                .arg(data_file_arg())
                .arg(
                    Arg::new("name")
                        .long("name")
                        .default_value("CodePage")
                        .help("Array name, emitted as k<NAME>"),
                ),
        )
        .subcommand(
            Command::new("gen-svm-classifier")
                .about("Generate SVM classifier weights from a LIBLINEAR model file")
                .arg(data_file_arg()),
        )
        .subcommand(
            Command::new("gen-test-sentences")
                .about("Generate the test sentence array")
                .arg(Arg::new("input").long("input").required(true).help("Sentence corpus"))
                .arg(Arg::new("output").long("output").required(true).help("Generated C++ file")),
        )
        .subcommand(
            Command::new("extract-subtree")
                .about("Copy the entries under one top-level directory into a new ZIP archive")
                .arg(Arg::new("input").long("input").required(true).help("Source archive"))
                .arg(Arg::new("output").long("output").required(true).help("Archive to create"))
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .default_value("data")
                        .help("Top-level directory to keep"),
                ),
        )
        .subcommand(
            Command::new("zlib-util")
                .about("Compress or decompress a file with zlib: compress|decompress <in> <out>")
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .value_name("ARGS")
                        .help("Command, input file and output file (checked by the command itself)"),
                ),
        )
        .subcommand(
            Command::new("litify")
                .about("Copy a protocol schema and append the lite-runtime option")
                .arg(Arg::new("in_file_path").long("in_file_path").required(true).help("Source schema"))
                .arg(Arg::new("out_file_path").long("out_file_path").required(true).help("Schema to write")),
        )
        .subcommand(
            Command::new("mozc-version")
                .about("Write ENGINE_VERSION.DATA_VERSION.TAG from the version template")
                .arg(Arg::new("tag").long("tag").required(true).help("Build tag"))
                .arg(
                    Arg::new("mozc_version_template")
                        .long("mozc_version_template")
                        .required(true)
                        .help("Version template of KEY = VALUE lines"),
                )
                .arg(Arg::new("output").long("output").required(true).help("Version file")),
        )
        .subcommand(
            Command::new("render-template")
                .about("Expand ${name} placeholders in a file")
                .arg(Arg::new("input").long("input").required(true).help("Template file"))
                .arg(Arg::new("output").long("output").required(true).help("Expanded file"))
                .arg(
                    Arg::new("define")
                        .short('D')
                        .long("define")
                        .action(ArgAction::Append)
                        .help("Variable definition NAME=VALUE"),
                )
                .arg(
                    Arg::new("mozc_version_template")
                        .long("mozc_version_template")
                        .help("Version template whose keys become variables"),
                ),
        )
        .subcommand(
            Command::new("run-in-dir")
                .about("Change into a directory and launch a program without waiting for it")
                .arg(
                    Arg::new("interpreter")
                        .long("interpreter")
                        .default_value("python3")
                        .help("Interpreter prepended for .py programs"),
                )
                .arg(Arg::new("dir").required(true).help("Directory to run in"))
                .arg(
                    Arg::new("command")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .help("Program followed by its arguments"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli/mod.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("ime-build-tools.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
