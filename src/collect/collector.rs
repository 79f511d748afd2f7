//! Fragment discovery and parsing

use crate::domain::{CollectStats, PathInstruction, FRAGMENT_FILE_NAME};
use crate::error::{MergeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks a configs directory and gathers the path instructions of every fragment.
pub struct InstructionCollector {
    root_path: PathBuf,
    fragment_name: String,
    follow_links: bool,
    stats: CollectStats,
}

impl InstructionCollector {
    /// Create a collector for `root_path` with the default fragment name.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            fragment_name: FRAGMENT_FILE_NAME.to_string(),
            follow_links: false,
            stats: CollectStats::default(),
        }
    }

    /// Set the exact base name a fragment file must have
    pub fn fragment_name(mut self, name: impl Into<String>) -> Self {
        self.fragment_name = name.into();
        self
    }

    /// Set whether to follow symbolic links while walking
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walk the tree and return every instruction in discovery order.
    ///
    /// Directory entries are visited sorted by file name, depth first. The first
    /// walk, read or parse error aborts collection.
    pub fn collect(&mut self) -> Result<Vec<PathInstruction>> {
        self.stats = CollectStats::default();
        let mut all_instructions = Vec::new();

        let walker =
            WalkDir::new(&self.root_path).follow_links(self.follow_links).sort_by_file_name();

        for entry in walker {
            let entry = entry
                .map_err(|source| MergeError::Walk { root: self.root_path.clone(), source })?;

            if entry.file_name() != self.fragment_name.as_str() {
                continue;
            }

            let path = entry.path();
            if !is_fragment_file(&entry)? {
                continue;
            }
            tracing::info!("Processing: {}", path.display());

            let instructions = read_fragment(path)?;
            tracing::info!("  Added {} path instructions", instructions.len());

            self.stats.fragments_read += 1;
            self.stats.instructions_collected += instructions.len();
            all_instructions.extend(instructions);
        }

        tracing::info!("Total path instructions collected: {}", all_instructions.len());
        Ok(all_instructions)
    }

    /// Get collection statistics
    pub fn stats(&self) -> &CollectStats {
        &self.stats
    }
}

/// Whether a name-matching entry is a readable file.
///
/// Unfollowed symlinks are resolved here; a dangling link is a read error.
fn is_fragment_file(entry: &walkdir::DirEntry) -> Result<bool> {
    if entry.file_type().is_file() {
        return Ok(true);
    }
    if !entry.path_is_symlink() {
        return Ok(false);
    }
    let metadata = fs::metadata(entry.path())
        .map_err(|source| MergeError::Read { path: entry.path().to_path_buf(), source })?;
    Ok(metadata.is_file())
}

/// Read one fragment file. An empty or comment-only file holds no instructions.
pub fn read_fragment(path: &Path) -> Result<Vec<PathInstruction>> {
    let content = fs::read_to_string(path)
        .map_err(|source| MergeError::Read { path: path.to_path_buf(), source })?;
    parse_fragment(&content)
        .map_err(|source| MergeError::Parse { path: path.to_path_buf(), source })
}

fn parse_fragment(content: &str) -> std::result::Result<Vec<PathInstruction>, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_yaml::from_value(value)
}
