//! Output writers for converted profiles.
//!
//! This module handles writing data to disk:
//! - JSON documents (compact, as the editor plugin reads them)

pub mod json;

// Re-export main functions
pub use json::{document_to_string, read_document, validate_path, write_document};
