//! Profile loading and schema definitions.
//!
//! This module handles:
//! - Loading `line_profiler` result files
//! - Refusing unsupported pickle protocols
//! - Defining the output schema

pub mod line_stats;
pub mod schema;

// Re-export main types
pub use line_stats::{
    declared_protocol, load_stats, stats_from_slice, to_document, FunctionKey, LineRecord, LineStats,
};
pub use schema::{Number, ProfileDocument, ProfiledFunction, ProfiledLine};
