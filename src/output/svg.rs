//! SVG chart output writer.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write rendered SVG content to a file.
///
/// Parent directories are created if needed.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - path is empty or a directory
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("SVG written successfully ({} bytes)", svg_content.len());

    Ok(())
}

pub(crate) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

pub(crate) fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const VALID_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <rect x="0" y="0" width="100" height="100" fill="red"/>
</svg>"#;

    #[test]
    fn write_svg_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_svg(VALID_SVG, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, VALID_SVG);
    }

    #[test]
    fn write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/plot.svg");

        write_svg(VALID_SVG, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn directory_path_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }
}
