//! Config file loading

use super::MergeConfig;
use crate::domain::MAX_INDENT_WIDTH;
use crate::error::{MergeError, Result};
use std::fs;
use std::path::Path;

/// Section name under which settings may be nested in a shared TOML file.
const NESTED_SECTION: &str = "path-instructions-merge";

/// Load settings from `config_path`, or defaults when no file is given.
///
/// There is no auto-discovery: a file named on the command line that cannot be
/// read or parsed is an error.
pub fn load_config(config_path: Option<&Path>) -> Result<MergeConfig> {
    let Some(config_file) = config_path else {
        return Ok(MergeConfig::default());
    };

    let content = fs::read_to_string(config_file)
        .map_err(|source| MergeError::Read { path: config_file.to_path_buf(), source })?;

    let config = parse_toml_config(&content)
        .map_err(|source| MergeError::Config { path: config_file.to_path_buf(), source })?;
    if config.indent_width > MAX_INDENT_WIDTH {
        return Err(MergeError::Setting {
            path: config_file.to_path_buf(),
            message: format!(
                "indent_width {} exceeds the maximum of {}",
                config.indent_width, MAX_INDENT_WIDTH
            ),
        });
    }
    tracing::debug!("Loaded config from {}: {:?}", config_file.display(), config);
    Ok(config)
}

/// Parse TOML settings, either at top level or under `[path-instructions-merge]`.
fn parse_toml_config(content: &str) -> std::result::Result<MergeConfig, toml::de::Error> {
    let raw: toml::Table = toml::from_str(content)?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => toml::Value::Table(raw),
    };

    config_val.try_into()
}
