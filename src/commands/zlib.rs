// src/commands/zlib.rs

//! zlib compress/decompress command

use anyhow::Result;
use tracing::info;

use ime_build_tools::compression::ZlibCommand;

/// `zlib-util compress|decompress <in> <out>`
///
/// Usage problems are printed to stdout and the command still succeeds.
pub fn cmd_zlib_util(args: &[String]) -> Result<()> {
    let command = match ZlibCommand::from_args(args) {
        Ok(command) => command,
        Err(usage) => {
            println!("{}", usage);
            return Ok(());
        }
    };

    command.run()?;

    let verb = match command {
        ZlibCommand::Compress { .. } => "Compressed",
        ZlibCommand::Decompress { .. } => "Decompressed",
    };
    info!("{} {} -> {}", verb, command.input().display(), command.output().display());
    Ok(())
}
