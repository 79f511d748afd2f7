//! path-instructions-merge: build a single review config from scattered fragments
//!
//! Intended for build and CI steps: every failure aborts with a non-zero exit and
//! a message naming the offending path.

use anyhow::Result;

fn main() -> Result<()> {
    path_instructions_merge::cli::run()
}
