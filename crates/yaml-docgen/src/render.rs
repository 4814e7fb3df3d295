//! File renderer - turns one YAML file into its markdown section.
//!
//! A section is a heading line (`# <file name>`), one blank line, then
//! either the `name`/`values` field lines or a single parse-error line.
//! Rendering never fails: every read or parse failure for a file degrades
//! to the error line, so one malformed file cannot abort the run.
//!
//! # Example
//!
//! ```ignore
//! use yaml_docgen::SectionRenderer;
//!
//! let renderer = SectionRenderer::new();
//! let section = renderer.render_file(Path::new("yaml/config.yaml"));
//!
//! assert!(section[0].starts_with("# "));
//! ```

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::DocumentParseError;

/// Line content reported when the `name` key is absent.
const MISSING_NAME: &str = "Missing name attribute";
/// Line content reported when the `values` key is absent.
const MISSING_VALUES: &str = "Missing values attribute";

/// File renderer - produces the markdown section for a single YAML file.
#[derive(Debug, Default)]
pub struct SectionRenderer;

impl SectionRenderer {
    /// Create a new renderer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the section for `path`.
    ///
    /// Returns the heading and blank line followed by the `name` and
    /// `values` field lines, or by one `- YAML parse error: <message>` line
    /// if the file could not be read or parsed.
    #[must_use]
    pub fn render_file(&self, path: &Path) -> Vec<String> {
        let file_name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        let mut lines = vec![format!("# {file_name}"), String::new()];

        let mapping = match load_mapping(path) {
            Ok(mapping) => mapping,
            Err(err) => {
                log::warn!("Failed to parse {:?}: {}", path, err);
                lines.push(format!("- YAML parse error: {err}"));
                return lines;
            }
        };

        lines.push(field_line("name", &mapping, MISSING_NAME));
        lines.push(field_line("values", &mapping, MISSING_VALUES));
        lines
    }
}

/// Read and parse one file as a single YAML document, in mapping form.
///
/// A document whose top-level value is not a mapping (sequence, scalar,
/// null/empty document) is treated as an empty mapping: no fields are
/// considered present. Read failures and parse failures both land in
/// [`DocumentParseError`].
fn load_mapping(path: &Path) -> Result<Mapping, DocumentParseError> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Ok(Mapping::new()),
    }
}

/// Render the field line for `key`, or the `missing` placeholder when the
/// mapping has no such key.
fn field_line(key: &str, mapping: &Mapping, missing: &str) -> String {
    match mapping.get(Value::String(key.to_string())) {
        Some(value) => format!("- {key}: {}", render_value(value)),
        None => format!("- {key}: {missing}"),
    }
}

/// Render a YAML value in its canonical text form.
///
/// Strings pass through unquoted. Scalars use their natural form (`true`,
/// `null`, `42`). Sequences and mappings render in flow style with elements
/// rendered recursively, so `[1, 2, 3]` stays `[1, 2, 3]`.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Mapping(mapping) => {
            let rendered: Vec<String> = mapping
                .iter()
                .map(|(key, val)| format!("{}: {}", render_value(key), render_value(val)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_value(&tagged.value)),
    }
}
