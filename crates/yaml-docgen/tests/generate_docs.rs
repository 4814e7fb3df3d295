//! End-to-end tests for the documentation pipeline.
//!
//! These tests exercise the public `generate_docs` entry point by building
//! temporary input directories and checking the generated markdown.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use yaml_docgen::{FilesystemError, generate_docs};

fn generate(input_dir: &Path) -> (TempDir, PathBuf, String) {
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("yaml-docs.md");
    generate_docs(input_dir, &output).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    (out_dir, output, text)
}

/// A mapping file with both fields yields the documented three-line section.
#[test]
fn test_single_file_with_both_fields() {
    let input = TempDir::new().unwrap();
    fs::write(
        input.path().join("config.yaml"),
        "name: demo\nvalues: [1, 2, 3]\n",
    )
    .unwrap();

    let (_out, _path, text) = generate(input.path());

    assert_eq!(text, "# config.yaml\n\n- name: demo\n- values: [1, 2, 3]\n");
}

/// Malformed YAML yields a heading plus a single parse-error line.
#[test]
fn test_broken_file_reports_parse_error() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("broken.yaml"), "key: [1, 2\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert!(text.starts_with("# broken.yaml\n\n- YAML parse error: "));
    assert!(!text.contains("- name:"));
    assert!(!text.contains("- values:"));
}

/// One malformed file does not abort the run; healthy files still render.
#[test]
fn test_broken_file_does_not_abort_run() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("bad.yaml"), "key: [1, 2\n").unwrap();
    fs::write(input.path().join("good.yaml"), "name: ok\nvalues: fine\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert!(text.contains("- YAML parse error: "));
    assert!(text.contains("# good.yaml\n\n- name: ok\n- values: fine\n"));
}

/// Sections appear in ascending file-name order regardless of creation order.
#[test]
fn test_sections_follow_sorted_file_names() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("b.yaml"), "name: beta\n").unwrap();
    fs::write(input.path().join("a.yml"), "name: alpha\n").unwrap();
    fs::write(input.path().join("c.yaml"), "name: gamma\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    let a = text.find("# a.yml").unwrap();
    let b = text.find("# b.yaml").unwrap();
    let c = text.find("# c.yaml").unwrap();
    assert!(a < b && b < c);
}

/// Files lacking one or both keys report the missing-attribute placeholder.
#[test]
fn test_missing_attributes_reported() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("partial.yaml"), "name: only-name\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert_eq!(
        text,
        "# partial.yaml\n\n- name: only-name\n- values: Missing values attribute\n"
    );
}

/// A non-mapping document (top-level sequence) reports both fields missing.
#[test]
fn test_non_mapping_document_reports_both_missing() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("list.yaml"), "- 1\n- 2\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert_eq!(
        text,
        "# list.yaml\n\n- name: Missing name attribute\n- values: Missing values attribute\n"
    );
}

/// Non-YAML files are ignored; an input directory without any YAML files
/// produces an empty document body.
#[test]
fn test_directory_without_yaml_files_yields_empty_body() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("readme.txt"), "not yaml").unwrap();
    fs::write(input.path().join("data.json"), "{}").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert_eq!(text, "\n");
}

/// Two runs over unchanged input produce byte-identical output.
#[test]
fn test_generation_is_idempotent() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.yaml"), "name: alpha\nvalues: [1]\n").unwrap();
    fs::write(input.path().join("b.yaml"), "values: {k: v}\n").unwrap();

    let (_out1, _path1, first) = generate(input.path());
    let (_out2, _path2, second) = generate(input.path());

    assert_eq!(first, second);
}

/// The output parent directory chain is created when missing.
#[test]
fn test_output_parent_directories_created() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.yaml"), "name: alpha\n").unwrap();

    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("docs").join("generated").join("out.md");
    generate_docs(input.path(), &output).unwrap();

    assert!(output.is_file());
}

/// A missing input directory is fatal and produces no output file.
#[test]
fn test_missing_input_directory_is_fatal() {
    let scratch = TempDir::new().unwrap();
    let missing_input = scratch.path().join("no-such-dir");
    let output = scratch.path().join("docs").join("out.md");

    let result = generate_docs(&missing_input, &output);

    assert!(matches!(result, Err(FilesystemError::ListDir { .. })));
    assert!(!output.exists());
}

/// Non-string scalar values render in their natural text form.
#[test]
fn test_scalar_values_render_naturally() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("port.yaml"), "name: 8080\nvalues: true\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert_eq!(text, "# port.yaml\n\n- name: 8080\n- values: true\n");
}

/// The document always ends in exactly one newline.
#[test]
fn test_document_ends_with_single_newline() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.yaml"), "name: alpha\nvalues: [1]\n").unwrap();

    let (_out, _path, text) = generate(input.path());

    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
}
