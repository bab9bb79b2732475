// src/commands/archive.rs

//! Archive sub-tree extraction command

use anyhow::{Context, Result};
use std::path::Path;

pub fn cmd_extract_subtree(input: &Path, output: &Path, prefix: &str) -> Result<()> {
    ime_build_tools::extract_subtree_file(input, output, prefix).with_context(|| {
        format!(
            "Failed to extract '{}/' from {} into {}",
            prefix,
            input.display(),
            output.display()
        )
    })?;
    Ok(())
}
