//! Error types for the merge pipeline

use std::io;
use std::path::PathBuf;

/// Every failure is fatal for the run; each variant names the path involved.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Failed to walk configs directory {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render template {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting in {path}: {message}")]
    Setting { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, MergeError>;
