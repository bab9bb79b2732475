// src/commands/mod.rs
//! Command handlers for the ime-build-tools CLI

mod archive;
mod exec;
mod generate;
mod schema;
mod version;
mod zlib;

// Re-export all command handlers
pub use archive::cmd_extract_subtree;
pub use exec::cmd_run_in_dir;
pub use generate::{
    cmd_gen_code_page, cmd_gen_east_asian_width, cmd_gen_svm_classifier, cmd_gen_test_sentences,
    cmd_gen_unicode_blocks, cmd_gen_unicode_data,
};
pub use schema::cmd_litify;
pub use version::{cmd_mozc_version, cmd_render_template};
pub use zlib::cmd_zlib_util;
