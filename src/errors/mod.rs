use std::path::{Path, PathBuf};

/// A data file exists but does not hold the expected JSON document
#[derive(Debug, thiserror::Error)]
#[error("{} does not contain a valid {kind}", .path.display())]
pub struct CorruptDocument {
    pub path: PathBuf,
    pub kind: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Add context to read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read data file: {}", path.display())
}

/// Add context to write errors
pub fn write_context(path: &Path) -> String {
    format!("Failed to write data file: {}", path.display())
}

/// Add context to directory creation errors
pub fn dir_context(path: &Path) -> String {
    format!("Failed to create data directory: {}", path.display())
}

/// True when the error chain bottoms out in a corrupted data file
pub fn is_corrupt_document(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<CorruptDocument>())
}
