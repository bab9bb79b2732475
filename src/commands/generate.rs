// src/commands/generate.rs

//! C++ table generator commands
//!
//! All generators except `gen-test-sentences` print to stdout, so nothing
//! else may be written there.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use ime_build_tools::codegen::{
    code_page, east_asian_width, sentences, svm, unicode_blocks, unicode_data,
};

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Run `generate` from `path` into a buffered stdout
fn generate_to_stdout<F>(name: &str, path: &Path, generate: F) -> Result<()>
where
    F: FnOnce(BufReader<File>, &mut dyn Write) -> Result<usize>,
{
    let reader = open_input(path)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rows = generate(reader, &mut out)
        .with_context(|| format!("Failed to generate {} from {}", name, path.display()))?;
    out.flush()?;
    info!("Generated {} rows for {} from {}", rows, name, path.display());
    Ok(())
}

pub fn cmd_gen_unicode_blocks(path: &Path) -> Result<()> {
    generate_to_stdout("unicode blocks", path, |reader, mut out| {
        Ok(unicode_blocks::generate(reader, &mut out)?)
    })
}

pub fn cmd_gen_unicode_data(path: &Path) -> Result<()> {
    generate_to_stdout("unicode data", path, |reader, mut out| {
        Ok(unicode_data::generate(reader, &mut out)?)
    })
}

pub fn cmd_gen_east_asian_width(path: &Path) -> Result<()> {
    generate_to_stdout("east asian width", path, |reader, mut out| {
        Ok(east_asian_width::generate(reader, &mut out)?)
    })
}

pub fn cmd_gen_svm_classifier(path: &Path) -> Result<()> {
    generate_to_stdout("svm classifier", path, |reader, mut out| {
        Ok(svm::generate(reader, &mut out)?)
    })
}

/// Code page generator
///
/// Unlike the other generators, any failure opening or reading the mapping
/// file is reported as `Failed to read <path>` and the process exits with
/// status 1 instead of returning an error.
pub fn cmd_gen_code_page(path: &Path, table_name: &str) -> Result<()> {
    let mappings = match read_code_page(path) {
        Ok(mappings) => mappings,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    code_page::write(&mut out, table_name, &mappings)?;
    out.flush()?;
    info!("Generated {} code page mappings from {}", mappings.len(), path.display());
    Ok(())
}

fn read_code_page(path: &Path) -> io::Result<Vec<code_page::CodePageMapping>> {
    let file = File::open(path)?;
    code_page::parse(BufReader::new(file))
}

/// Test sentence generator
///
/// The output file is created before the corpus is read, so a read failure
/// leaves an empty output file behind.
pub fn cmd_gen_test_sentences(input: &Path, output: &Path) -> Result<()> {
    let out_file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut out = BufWriter::new(out_file);

    let corpus = sentences::parse(open_input(input)?)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    sentences::write(&mut out, &corpus)?;
    out.flush()?;

    info!("Wrote {} test sentences to {}", corpus.len(), output.display());
    Ok(())
}
