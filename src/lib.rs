//! kernprof-json
//!
//! Converts `line_profiler` (kernprof) result files into the JSON document
//! the PyCharm line profiler plugin reads.
//!
//! This crate provides the implementation behind the `kernprof-json` CLI:
//!
//! ```bash
//! kernprof-json profile.lprof profile.json
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod summary;
pub mod utils;
