//! Totals and unit labels for converted profiles.
//!
//! Mirrors what the editor plugin derives when it loads a document:
//! per-function total and maximum line time, plus a profile-wide total.

use crate::parser::schema::{ProfileDocument, ProfiledFunction};
use crate::utils::config::{MICROSECONDS, MILLISECONDS, SECONDS};

/// Time totals of a single function, in profiler ticks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FunctionTotals {
    pub total_time: f64,
    pub max_line_time: f64,
}

/// Summary statistics for a converted profile
///
/// **Public** - returned from `summarize`
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    /// Number of profiled functions
    pub function_count: usize,

    /// Number of profiled lines across all functions
    pub line_count: usize,

    /// Sum of all line hits
    pub total_hits: i64,

    /// Sum of all line times, in profiler ticks
    pub total_time: f64,

    /// Time unit in seconds
    pub unit: f64,

    /// Name and total time of the most expensive function
    pub hottest: Option<(String, f64)>,
}

/// Totals for one function
pub fn function_totals(function: &ProfiledFunction) -> FunctionTotals {
    function
        .profiled_lines
        .iter()
        .fold(FunctionTotals::default(), |acc, line| {
            let time = line.time.as_f64();
            FunctionTotals {
                total_time: acc.total_time + time,
                max_line_time: acc.max_line_time.max(time),
            }
        })
}

/// Summarize a converted document
///
/// **Public** - main entry point for summary statistics
pub fn summarize(document: &ProfileDocument) -> ProfileSummary {
    let mut summary = ProfileSummary {
        function_count: document.profiled_functions.len(),
        line_count: 0,
        total_hits: 0,
        total_time: 0.0,
        unit: document.unit.as_f64(),
        hottest: None,
    };

    for function in &document.profiled_functions {
        let totals = function_totals(function);

        summary.line_count += function.profiled_lines.len();
        summary.total_hits = function
            .profiled_lines
            .iter()
            .fold(summary.total_hits, |acc, line| acc.saturating_add(line.hits));
        summary.total_time += totals.total_time;

        let is_hotter = summary
            .hottest
            .as_ref()
            .map_or(true, |(_, time)| totals.total_time > *time);
        if is_hotter {
            summary.hottest = Some((function.function_name.clone(), totals.total_time));
        }
    }

    summary
}

impl ProfileSummary {
    /// Total time converted to seconds
    pub fn total_seconds(&self) -> f64 {
        self.total_time * self.unit
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Functions: {} | Lines: {} | Hits: {} | Total: {:.6} s (unit {})",
            self.function_count,
            self.line_count,
            self.total_hits,
            self.total_seconds(),
            unit_long(self.unit)
        );
        if let Some((name, time)) = &self.hottest {
            text.push_str(&format!(" | Hottest: {} ({:.6} s)", name, time * self.unit));
        }
        text
    }
}

/// Short label for a time unit, empty when it has no common name
pub fn unit_short(unit: f64) -> &'static str {
    if unit == MICROSECONDS {
        "µs"
    } else if unit == MILLISECONDS {
        "ms"
    } else if unit == SECONDS {
        "s"
    } else {
        ""
    }
}

/// Long label for a time unit
pub fn unit_long(unit: f64) -> String {
    if unit == MICROSECONDS {
        "µs (microseconds)".to_string()
    } else if unit == MILLISECONDS {
        "ms (milliseconds)".to_string()
    } else if unit == SECONDS {
        "s (seconds)".to_string()
    } else {
        format!("{:.6} s", unit)
    }
}
