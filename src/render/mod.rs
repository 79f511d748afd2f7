//! Merged config rendering

pub mod indent;
pub mod template;

pub use indent::indent_text;
pub use template::{generate_config, ConfigRenderer};
