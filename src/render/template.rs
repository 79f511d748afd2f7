//! Base template rendering with the `indent` helper

use super::indent::indent_text;
use crate::domain::{PathInstruction, TemplateData};
use crate::error::{MergeError, Result};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason,
};
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE_NAME: &str = "base";

/// `{{indent text}}`: reindents a multi-line block by a fixed number of spaces.
struct IndentHelper {
    indent: String,
}

impl HelperDef for IndentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h.param(0).ok_or(RenderErrorReason::ParamNotFoundForIndex("indent", 0))?;
        let text =
            param.value().as_str().ok_or(RenderErrorReason::InvalidParamType("string"))?;
        out.write(&indent_text(text, &self.indent))?;
        Ok(())
    }
}

/// Compiled base template ready to render a merged config.
pub struct ConfigRenderer {
    registry: Handlebars<'static>,
    template_path: PathBuf,
}

impl ConfigRenderer {
    /// Load and compile the template at `template_path`.
    pub fn from_file(template_path: &Path, indent_width: usize) -> Result<Self> {
        let source = fs::read_to_string(template_path)
            .map_err(|source| MergeError::Read { path: template_path.to_path_buf(), source })?;
        Self::from_source(template_path, &source, indent_width)
    }

    /// Compile `source`; `template_path` is only used in error messages.
    pub fn from_source(template_path: &Path, source: &str, indent_width: usize) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        let indent = IndentHelper { indent: " ".repeat(indent_width) };
        registry.register_helper("indent", Box::new(indent));
        registry.register_template_string(TEMPLATE_NAME, source).map_err(|source| {
            MergeError::Template { path: template_path.to_path_buf(), source: Box::new(source) }
        })?;

        Ok(Self { registry, template_path: template_path.to_path_buf() })
    }

    /// Render the template with `instructions` bound to `path_instructions`.
    pub fn render(&self, instructions: &[PathInstruction]) -> Result<String> {
        let data = TemplateData { path_instructions: instructions };
        self.registry.render(TEMPLATE_NAME, &data).map_err(|source| MergeError::Render {
            path: self.template_path.clone(),
            source: Box::new(source),
        })
    }

    /// Render and write to `output_path`, replacing any existing file.
    ///
    /// Rendering completes before the output is touched.
    pub fn write(&self, instructions: &[PathInstruction], output_path: &Path) -> Result<()> {
        let rendered = self.render(instructions)?;
        let write_err =
            |source: std::io::Error| MergeError::Write { path: output_path.to_path_buf(), source };

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(output_path, rendered).map_err(write_err)?;
        tracing::debug!("Wrote {}", output_path.display());
        Ok(())
    }
}

/// Render `instructions` through the template at `template_path` into `output_path`.
pub fn generate_config(
    instructions: &[PathInstruction],
    template_path: &Path,
    output_path: &Path,
    indent_width: usize,
) -> Result<()> {
    ConfigRenderer::from_file(template_path, indent_width)?.write(instructions, output_path)
}
