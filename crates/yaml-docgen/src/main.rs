//! yaml-docgen CLI: scans a YAML directory and writes markdown documentation.
//!
//! Logging: set `RUST_LOG=yaml_docgen=debug` (or `warn`, `info`) to see
//! scanner and renderer logs on stderr.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use yaml_docgen::generate_docs;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; else info
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yaml_docgen=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    generate_docs(&cli.input_dir, &cli.output_file).with_context(|| {
        format!(
            "failed to generate documentation from {:?} into {:?}",
            cli.input_dir, cli.output_file
        )
    })
}
