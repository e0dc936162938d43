//! Output JSON schema definitions for converted profiles.
//!
//! This module defines the structure of JSON files we write to disk.
//! Field names are the camelCase keys the editor plugin reads.

use serde::{Deserialize, Serialize};

/// Top-level document written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// One entry per profiled function, in the order the profiler stored them
    pub profiled_functions: Vec<ProfiledFunction>,

    /// Time unit of every `time` value, in seconds
    pub unit: Number,
}

/// A profiled function and its per-line records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledFunction {
    /// Source file the function lives in
    pub file: String,

    /// First line of the function
    pub line_no: i64,

    pub function_name: String,

    pub profiled_lines: Vec<ProfiledLine>,
}

/// Execution count and accumulated time of one source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledLine {
    pub line_no: i64,
    pub hits: i64,
    pub time: Number,
}

/// A JSON number that keeps whether it was written as an integer or a float
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
