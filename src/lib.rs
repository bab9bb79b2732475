// src/lib.rs

//! IME build tools
//!
//! Small, independent build steps for the input method engine's build
//! pipeline. Each module is one transformation; the `ime-build-tools` binary
//! exposes each as a subcommand.
//!
//! # Modules
//!
//! - `archive`: copy one top-level directory of a ZIP archive into a new archive
//! - `codegen`: C++ static tables from Unicode, code page, SVM and corpus data
//! - `template`: `${name}` placeholder substitution
//! - `compression`: whole-file zlib compress/decompress
//! - `schema`: append the lite-runtime option to protocol schemas
//! - `version`: version template parsing and version strings
//! - `exec`: run a program from another working directory

pub mod archive;
pub mod codegen;
pub mod compression;
mod error;
pub mod exec;
pub mod schema;
pub mod template;
pub mod version;

pub use archive::{ExtractSummary, extract_subtree, extract_subtree_file};
pub use compression::CompressionError;
pub use error::{Error, Result};
pub use template::substitute;
pub use version::VersionTemplate;
