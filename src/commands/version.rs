// src/commands/version.rs

//! Version string and template rendering commands

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use ime_build_tools::template::{parse_definition, substitute};
use ime_build_tools::VersionTemplate;

fn load_template(path: &Path) -> Result<VersionTemplate> {
    VersionTemplate::load(path)
        .with_context(|| format!("Failed to read version template {}", path.display()))
}

/// Write `ENGINE_VERSION.DATA_VERSION.TAG` to `output`, without a newline
pub fn cmd_mozc_version(tag: &str, template_path: &Path, output: &Path) -> Result<()> {
    let template = load_template(template_path)?;
    let version = template
        .version_string(tag)
        .with_context(|| format!("Incomplete version template {}", template_path.display()))?;

    fs::write(output, &version).with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Version {} written to {}", version, output.display());
    Ok(())
}

/// Expand `${name}` placeholders of `input` into `output`
///
/// Version template keys are loaded first; `--define` values override them.
pub fn cmd_render_template(
    input: &Path,
    output: &Path,
    defines: &[String],
    version_template: Option<&Path>,
) -> Result<()> {
    let mut vars = match version_template {
        Some(path) => load_template(path)?.into_variables(),
        None => HashMap::new(),
    };
    for definition in defines {
        let (name, value) = parse_definition(definition)
            .ok_or_else(|| anyhow::anyhow!("Invalid definition '{}', expected NAME=VALUE", definition))?;
        debug!("Defining {} = {}", name, value);
        vars.insert(name, value);
    }

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read template {}", input.display()))?;
    let rendered = substitute(&text, &vars);
    fs::write(output, rendered).with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Rendered {} -> {} with {} variables", input.display(), output.display(), vars.len());
    Ok(())
}
