//! Collect, expand and render in one pass

use anyhow::{Context, Result};
use std::path::Path;

use crate::collect::InstructionCollector;
use crate::config::MergeConfig;
use crate::expand::expand_path_instructions;
use crate::render::ConfigRenderer;

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub fragments_read: usize,
    pub collected: usize,
    pub expanded: usize,
}

pub fn run_merge(configs_dir: &Path, config: &MergeConfig) -> Result<MergeSummary> {
    let mut collector = InstructionCollector::new(configs_dir.to_path_buf())
        .fragment_name(config.fragment_name.as_str())
        .follow_links(config.follow_links);
    let instructions = collector.collect().context("Failed to collect path instructions")?;

    let expanded = expand_path_instructions(&instructions);

    // Compile before writing anything so a broken template never clobbers the output.
    let renderer = ConfigRenderer::from_file(&config.template, config.indent_width)
        .context("Failed to generate config")?;
    renderer.write(&expanded, &config.output).context("Failed to generate config")?;

    Ok(MergeSummary {
        fragments_read: collector.stats().fragments_read,
        collected: instructions.len(),
        expanded: expanded.len(),
    })
}
