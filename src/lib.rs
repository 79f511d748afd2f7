//! path-instructions-merge: merge per-technology review path instructions
//!
//! Walks a configs directory for `path_instructions.yaml` fragments, pairs every
//! folder pattern of the form `**/{kw,...}*/**` with a derived file pattern
//! `**/*{kw*,...}*`, and renders the result through a Handlebars base template.

pub mod cli;
pub mod collect;
pub mod config;
pub mod domain;
pub mod error;
pub mod expand;
pub mod render;

pub use domain::PathInstruction;
pub use error::MergeError;
