//! yaml-docgen - markdown documentation generator for YAML directories.
//!
//! Scans a directory for `.yml`/`.yaml` files and writes a single markdown
//! document with one section per file, reporting each file's `name` and
//! `values` fields, or a parse error line for malformed files.
//!
//! # Architecture
//!
//! ```text
//! yaml-docgen/src/
//! ├── lib.rs       # Pipeline entry point and exports
//! ├── scanner.rs   # Directory listing and YAML file selection
//! ├── render.rs    # Per-file section rendering
//! ├── document.rs  # Section assembly and output writing
//! └── error.rs     # FilesystemError / DocumentParseError
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use yaml_docgen::generate_docs;
//!
//! generate_docs(Path::new("yaml"), Path::new("docs/yaml-docs.md"))?;
//! ```
//!
//! Per-file YAML failures are embedded in the generated document; only
//! filesystem failures (unreadable input directory, unwritable output path)
//! abort a run.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod document;
pub mod error;
pub mod render;
pub mod scanner;

// ============================================================================
// Re-exports
// ============================================================================

pub use document::{assemble, write_document};
pub use error::{DocumentParseError, FilesystemError};
pub use render::{SectionRenderer, render_value};
pub use scanner::YamlScanner;

use std::path::Path;

/// Run the full pipeline: scan `input_dir`, render each selected file in
/// sorted order, assemble the sections, and write `output_file`.
///
/// The output file is written exactly once, after all sections have been
/// rendered; a fatal error during scanning leaves it untouched.
///
/// # Errors
///
/// Returns [`FilesystemError`] if the input directory cannot be listed or
/// the output path cannot be created or written.
pub fn generate_docs(input_dir: &Path, output_file: &Path) -> Result<(), FilesystemError> {
    let scanner = YamlScanner::new();
    let renderer = SectionRenderer::new();

    let files = scanner.scan(input_dir)?;
    let sections: Vec<Vec<String>> = files
        .iter()
        .map(|path| renderer.render_file(path))
        .collect();

    let text = assemble(&sections);
    write_document(output_file, &text)
}

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Note: End-to-end tests are in tests/generate_docs.rs
