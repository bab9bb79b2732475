// src/commands/schema.rs

//! Schema litify command

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn cmd_litify(in_file_path: &Path, out_file_path: &Path) -> Result<()> {
    ime_build_tools::schema::litify_file(in_file_path, out_file_path).with_context(|| {
        format!(
            "Failed to litify {} into {}",
            in_file_path.display(),
            out_file_path.display()
        )
    })?;
    info!("Litified {} -> {}", in_file_path.display(), out_file_path.display());
    Ok(())
}
