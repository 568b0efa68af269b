use std::path::{Path, PathBuf};

/// Name of the file written next to `input`: `<stem>-<operation>.<extension>`.
pub fn output_path(input: &Path, operation: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}-{operation}.{extension}"))
}
