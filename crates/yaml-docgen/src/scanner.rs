//! Directory scanner - selects the YAML files to document.
//!
//! Listing is non-recursive: only regular files directly inside the input
//! directory are considered, and only those with a `.yml` or `.yaml`
//! extension are selected.
//!
//! # Example
//!
//! ```ignore
//! use yaml_docgen::YamlScanner;
//!
//! let scanner = YamlScanner::new();
//! let files = scanner.scan(Path::new("yaml"))?;
//!
//! for file in files {
//!     println!("selected: {:?}", file);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Extensions selected for documentation (case-sensitive).
const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Directory scanner - lists YAML files in a single directory.
///
/// Entries that are not regular files (directories, symlinks to
/// directories) are skipped, and the result is sorted by file name so the
/// generated document order is stable across runs.
#[derive(Debug, Default)]
pub struct YamlScanner;

impl YamlScanner {
    /// Create a new scanner with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// List the YAML files in `input_dir`, sorted ascending by file name.
    ///
    /// # Errors
    ///
    /// Returns [`FilesystemError`] if the directory does not exist or cannot
    /// be listed. Nothing is written in that case.
    pub fn scan(&self, input_dir: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
        let entries = fs::read_dir(input_dir).map_err(|source| FilesystemError::ListDir {
            path: input_dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| FilesystemError::ReadEntry {
                path: input_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if !path.is_file() {
                log::debug!("Skipping non-file entry: {:?}", path);
                continue;
            }
            if !has_yaml_extension(&path) {
                log::debug!("Skipping non-YAML file: {:?}", path);
                continue;
            }

            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        log::info!("Selected {} YAML files from {:?}", files.len(), input_dir);
        Ok(files)
    }
}

/// Check whether a path carries one of the selected YAML extensions.
///
/// A bare dotfile such as `.yaml` has no extension and is not selected.
fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}
