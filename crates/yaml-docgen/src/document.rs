//! Document assembler - joins rendered sections and writes the output file.
//!
//! The assembled document keeps sections in scanner order, separated by one
//! blank line, and always ends in exactly one trailing newline. The output
//! file is written once per run, after every section has been rendered.

use std::fs;
use std::path::Path;

use crate::error::FilesystemError;

/// Join rendered sections into the final markdown document.
///
/// Each section is followed by one blank line; trailing whitespace and
/// blank lines collapse so the document ends in exactly one newline. An
/// empty section list assembles to a single newline.
#[must_use]
pub fn assemble(sections: &[Vec<String>]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for section in sections {
        for line in section {
            lines.push(line);
        }
        lines.push("");
    }

    format!("{}\n", lines.join("\n").trim_end())
}

/// Write the assembled document, creating parent directories as needed.
///
/// The output file is overwritten unconditionally; no merge with prior
/// output takes place.
///
/// # Errors
///
/// Returns [`FilesystemError`] if the parent directory chain cannot be
/// created or the file cannot be written.
pub fn write_document(output_file: &Path, text: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent).map_err(|source| FilesystemError::CreateParentDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output_file, text).map_err(|source| FilesystemError::WriteOutput {
        path: output_file.to_path_buf(),
        source,
    })?;

    log::info!("Wrote documentation to {:?}", output_file);
    Ok(())
}
