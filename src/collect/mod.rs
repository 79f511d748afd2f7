//! Path instruction collection from a configs directory

use crate::domain::{CollectStats, PathInstruction};
use crate::error::Result;
use std::path::Path;

pub mod collector;

pub use collector::{read_fragment, InstructionCollector};

/// Collect every fragment under `root` using the default fragment name.
pub fn collect_path_instructions<P: AsRef<Path>>(
    root: P,
) -> Result<(Vec<PathInstruction>, CollectStats)> {
    let mut collector = InstructionCollector::new(root.as_ref().to_path_buf());
    let instructions = collector.collect()?;
    let stats = collector.stats().clone();
    Ok((instructions, stats))
}
