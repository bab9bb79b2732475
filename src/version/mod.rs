// src/version/mod.rs

//! Version template parsing and version string assembly
//!
//! A version template is a plain text file of `KEY = VALUE` lines:
//!
//! ```text
//! MAJOR = 2
//! ENGINE_VERSION = 2
//! DATA_VERSION = 30
//! ```
//!
//! Lines that do not look like an assignment are ignored.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Key holding the engine version component
pub const ENGINE_VERSION_KEY: &str = "ENGINE_VERSION";

/// Key holding the data version component
pub const DATA_VERSION_KEY: &str = "DATA_VERSION";

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*=\s*(.*?)\s*$").unwrap());

/// Parsed `KEY = VALUE` template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTemplate {
    values: HashMap<String, String>,
}

impl VersionTemplate {
    /// Parse template text; later assignments to the same key win
    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        for line in text.lines() {
            match ASSIGNMENT.captures(line) {
                Some(caps) => {
                    values.insert(caps[1].to_string(), caps[2].to_string());
                }
                None => {
                    if !line.trim().is_empty() {
                        debug!("Ignoring template line: {}", line);
                    }
                }
            }
        }
        Self { values }
    }

    /// Read and parse a template file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    /// Assemble `ENGINE_VERSION.DATA_VERSION.TAG`
    pub fn version_string(&self, tag: &str) -> Result<String> {
        let engine = self.require(ENGINE_VERSION_KEY)?;
        let data = self.require(DATA_VERSION_KEY)?;
        Ok(format!("{}.{}.{}", engine, data, tag))
    }

    /// All key/value pairs, for use as template variables
    pub fn into_variables(self) -> HashMap<String, String> {
        self.values
    }
}
