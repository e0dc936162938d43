//! JSON document writer.
//!
//! Writes ProfileDocument structs to JSON files in the compact layout
//! Python's `json.dump` produces.

use crate::parser::schema::ProfileDocument;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// The file is created or truncated, and is flushed and closed before this
/// returns. Parent directories are not created.
///
/// # Arguments
/// * `document` - Document to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty or a directory
///
/// # Example
/// ```ignore
/// let document = to_document(&stats);
/// write_document(&document, "profile.json")?;
/// ```
pub fn write_document(
    document: &ProfileDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, document).map_err(OutputError::SerializationFailed)?;

    // Surface buffered write errors instead of losing them on drop
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!(
        "Document written ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a document to a string
///
/// **Public** - useful for tests and debugging
pub fn document_to_string(document: &ProfileDocument) -> Result<String, OutputError> {
    serde_json::to_string(document).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Public** - lets callers reject a bad path before doing any work
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a document from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_document(input_path: impl AsRef<Path>) -> Result<ProfileDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading document from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let document: ProfileDocument = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Document loaded: {} functions",
        document.profiled_functions.len()
    );

    Ok(document)
}
