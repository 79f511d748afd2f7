//! Command-line overrides on top of file settings

use super::MergeConfig;
use std::path::PathBuf;

/// Values given on the command line (or through clap's env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub fragment_name: Option<String>,
    pub indent_width: Option<usize>,
    pub follow_links: bool,
}

pub fn merge_cli_with_config(mut config: MergeConfig, overrides: CliOverrides) -> MergeConfig {
    if let Some(template) = overrides.template {
        config.template = template;
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if let Some(fragment_name) = overrides.fragment_name {
        config.fragment_name = fragment_name;
    }
    if let Some(indent_width) = overrides.indent_width {
        config.indent_width = indent_width;
    }
    // A flag can only switch link following on.
    config.follow_links |= overrides.follow_links;
    config
}
