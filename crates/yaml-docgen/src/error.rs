//! Error types for the documentation pipeline.
//!
//! Two tiers: [`FilesystemError`] aborts the whole run, while
//! [`DocumentParseError`] is recovered inside the renderer and surfaces as an
//! in-document error line for the affected file only.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal filesystem failures.
///
/// Each variant represents a failure that prevents producing any output.
/// The output file is never written once one of these occurs.
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Input directory does not exist or cannot be listed.
    #[error("cannot list input directory {path:?}: {source}")]
    ListDir {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be read during listing.
    #[error("cannot read directory entry in {path:?}: {source}")]
    ReadEntry {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file's parent directory chain could not be created.
    #[error("cannot create output directory {path:?}: {source}")]
    CreateParentDir {
        /// Directory that failed to create.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write output file {path:?}: {source}")]
    WriteOutput {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable per-file failures.
///
/// Any failure to read or parse a single input file lands here. The renderer
/// turns the error into a `- YAML parse error: <message>` line; it never
/// escapes the renderer, so one malformed file cannot abort the run.
///
/// The `Display` form is the underlying error's message so the in-document
/// line reports the parser diagnostic verbatim.
#[derive(Error, Debug)]
pub enum DocumentParseError {
    /// File could not be read as UTF-8 text.
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// File content is not a single valid YAML document.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}
