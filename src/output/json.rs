//! JSON export writer for normalized recordings.

use crate::output::svg::{create_parent_dirs, validate_output_path};
use crate::parser::schema::RecordingDocument;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a recording document to a pretty-printed JSON file.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_document(
    document: &RecordingDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON export to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a recording document back from a JSON file.
pub fn read_document(input_path: impl AsRef<Path>) -> Result<RecordingDocument, OutputError> {
    let file = File::open(input_path.as_ref()).map_err(OutputError::ReadFailed)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(OutputError::SerializationFailed)
}
