use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a text file, `None` when it does not exist
pub fn read_optional_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {:?}", path))
}
