//! Core data types shared by the collector, expander and renderer

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Base name a file must carry to be picked up as a fragment.
pub const FRAGMENT_FILE_NAME: &str = "path_instructions.yaml";

/// Merged config written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = ".coderabbit.yaml";

/// Base template read from the working directory.
pub const DEFAULT_TEMPLATE_FILE: &str = ".coderabbit.base.yaml";

/// Spaces prepended to each instruction line by the `indent` template helper.
pub const DEFAULT_INDENT_WIDTH: usize = 8;

/// Largest accepted indent width.
pub const MAX_INDENT_WIDTH: usize = 64;

/// Review guidance for every file matching `path`.
///
/// Fragments may omit either key or give a bare scalar (`path: 123`); both are
/// read as text, a missing or null value as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInstruction {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub path: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub instructions: String,
}

fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(D::Error::custom(format!("expected a scalar, found {other:?}"))),
    }
}

impl PathInstruction {
    pub fn new(path: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self { path: path.into(), instructions: instructions.into() }
    }
}

/// Value bound into the base template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData<'a> {
    pub path_instructions: &'a [PathInstruction],
}

/// Counters gathered while walking the configs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub fragments_read: usize,
    pub instructions_collected: usize,
}
