//! Command-line interface for path-instructions-merge
//!
//! `path-instructions-merge <CONFIGS_DIR> [OUTPUT_FILE]` with a few overrides for
//! the template, fragment name and indentation.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};

mod merge;

pub use merge::{run_merge, MergeSummary};

/// Merge per-technology path_instructions.yaml fragments into a single review config
#[derive(Parser)]
#[command(name = "path-instructions-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing technology-specific configs
    #[arg(value_name = "CONFIGS_DIR")]
    configs_dir: PathBuf,

    /// Output file [default: .coderabbit.yaml]
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: Option<PathBuf>,

    /// Base template [default: .coderabbit.base.yaml]
    #[arg(short, long, value_name = "FILE", env = "PATH_INSTRUCTIONS_TEMPLATE")]
    template: Option<PathBuf>,

    /// TOML file with run settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exact file name of instruction fragments [default: path_instructions.yaml]
    #[arg(long, value_name = "NAME")]
    fragment_name: Option<String>,

    /// Spaces used by the `indent` template helper, at most 64 [default: 8]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=64))]
    indent: Option<u16>,

    /// Follow symbolic links when walking CONFIGS_DIR
    #[arg(long)]
    follow_links: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A valid RUST_LOG replaces the default level; otherwise WARN, or DEBUG with --verbose.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let file_config = load_config(cli.config.as_deref())?;
    let overrides = CliOverrides {
        template: cli.template,
        output: cli.output_file,
        fragment_name: cli.fragment_name,
        indent_width: cli.indent.map(usize::from),
        follow_links: cli.follow_links,
    };
    let config = merge_cli_with_config(file_config, overrides);

    let summary = run_merge(&cli.configs_dir, &config)?;

    println!(
        "Successfully merged {} path instructions into {} (expanded to {} total patterns)",
        summary.collected,
        config.output.display(),
        summary.expanded
    );
    Ok(())
}
