// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    // Logs go to stderr: generators print their output on stdout
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::GenUnicodeBlocks { path } => commands::cmd_gen_unicode_blocks(&path),
        Commands::GenUnicodeData { path } => commands::cmd_gen_unicode_data(&path),
        Commands::GenEastAsianWidth { path } => commands::cmd_gen_east_asian_width(&path),
        Commands::GenCodePage { path, name } => commands::cmd_gen_code_page(&path, &name),
        Commands::GenSvmClassifier { path } => commands::cmd_gen_svm_classifier(&path),
        Commands::GenTestSentences { input, output } => {
            commands::cmd_gen_test_sentences(&input, &output)
        }
        Commands::ExtractSubtree {
            input,
            output,
            prefix,
        } => commands::cmd_extract_subtree(&input, &output, &prefix),
        Commands::ZlibUtil { args } => commands::cmd_zlib_util(&args),
        Commands::Litify {
            in_file_path,
            out_file_path,
        } => commands::cmd_litify(&in_file_path, &out_file_path),
        Commands::MozcVersion {
            tag,
            mozc_version_template,
            output,
        } => commands::cmd_mozc_version(&tag, &mozc_version_template, &output),
        Commands::RenderTemplate {
            input,
            output,
            defines,
            mozc_version_template,
        } => commands::cmd_render_template(
            &input,
            &output,
            &defines,
            mozc_version_template.as_deref(),
        ),
        Commands::RunInDir {
            interpreter,
            dir,
            command,
        } => commands::cmd_run_in_dir(&dir, &interpreter, &command),
    }
}
