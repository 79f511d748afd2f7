//! Run configuration loading and merging
//!
//! Precedence is CLI > Env > File > Defaults. Environment variables are resolved
//! by clap, so the file layer only ever sees values the command line left unset.

use crate::domain::{
    DEFAULT_INDENT_WIDTH, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE, FRAGMENT_FILE_NAME,
};
use serde::Deserialize;
use std::path::PathBuf;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Settings for one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Base template, relative to the working directory
    pub template: PathBuf,
    /// Destination of the merged config
    pub output: PathBuf,
    /// Exact base name of fragment files
    pub fragment_name: String,
    /// Spaces added by the `indent` template helper
    pub indent_width: usize,
    /// Follow symbolic links while walking the configs directory
    pub follow_links: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fragment_name: FRAGMENT_FILE_NAME.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
            follow_links: false,
        }
    }
}
