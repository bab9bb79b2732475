// src/commands/exec.rs

//! Run-in-directory command

use anyhow::{Context, Result};
use std::path::Path;

/// Launch `command` from `dir` and return without waiting for it
pub fn cmd_run_in_dir(dir: &Path, interpreter: &str, command: &[String]) -> Result<()> {
    let _child = ime_build_tools::exec::run_in_dir(dir, interpreter, command)
        .with_context(|| format!("Failed to run {:?} in {}", command, dir.display()))?;
    Ok(())
}
