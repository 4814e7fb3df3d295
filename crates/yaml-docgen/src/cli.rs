//! Command-line arguments for the yaml-docgen binary.

use std::path::PathBuf;

use clap::Parser;

/// Generate markdown documentation for YAML files in a directory.
#[derive(Parser, Debug)]
#[command(
    name = "yaml-docgen",
    version,
    about = "Generate markdown documentation for YAML files in a directory"
)]
pub struct Cli {
    /// Directory containing YAML files.
    #[arg(long, value_name = "DIR", default_value = "yaml")]
    pub input_dir: PathBuf,

    /// Path to write the generated markdown.
    #[arg(long, value_name = "FILE", default_value = "docs/yaml-docs.md")]
    pub output_file: PathBuf,
}
