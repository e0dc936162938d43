//! Loader for `line_profiler` result files.
//!
//! `kernprof` pickles a `LineStats` instance whose attribute dict holds
//! `timings` (`{(file, first_line, function): [(line, hits, time), ...]}`)
//! and `unit`. `serde_pickle` hands the instance over as that attribute dict;
//! this module deserializes it and maps it onto the output document.

use super::schema::{Number, ProfileDocument, ProfiledFunction, ProfiledLine};
use crate::utils::config::{HIGHEST_SUPPORTED_PROTOCOL, PROTO_OPCODE, REFUSED_PROTOCOL};
use crate::utils::error::LoadError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_pickle::DeOptions;
use std::path::Path;

/// Decoded profiling results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStats {
    /// Timing entries in the order they were stored
    #[serde(with = "ordered_timings")]
    pub timings: Vec<(FunctionKey, Vec<LineRecord>)>,
    pub unit: Number,
}

/// Identifies a profiled function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, i64, String)", into = "(String, i64, String)")]
pub struct FunctionKey {
    pub file: String,
    pub line_no: i64,
    pub function_name: String,
}

/// One `(line, hits, time)` record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, i64, Number)", into = "(i64, i64, Number)")]
pub struct LineRecord {
    pub line_no: i64,
    pub hits: i64,
    pub time: Number,
}

impl From<(String, i64, String)> for FunctionKey {
    fn from((file, line_no, function_name): (String, i64, String)) -> Self {
        FunctionKey {
            file,
            line_no,
            function_name,
        }
    }
}

impl From<FunctionKey> for (String, i64, String) {
    fn from(key: FunctionKey) -> Self {
        (key.file, key.line_no, key.function_name)
    }
}

impl From<(i64, i64, Number)> for LineRecord {
    fn from((line_no, hits, time): (i64, i64, Number)) -> Self {
        LineRecord {
            line_no,
            hits,
            time,
        }
    }
}

impl From<LineRecord> for (i64, i64, Number) {
    fn from(record: LineRecord) -> Self {
        (record.line_no, record.hits, record.time)
    }
}

/// `timings` as a dict that keeps the order entries were written in
mod ordered_timings {
    use super::{FunctionKey, LineRecord};
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    type Entries = Vec<(FunctionKey, Vec<LineRecord>)>;

    pub fn serialize<S: Serializer>(entries: &Entries, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, records) in entries {
            map.serialize_entry(key, records)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Entries, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Entries;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a dict of (file, line, function) keys to line records")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}

/// Load a profiling results file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - Path to a file written by `kernprof`/`LineProfiler.dump_stats`
///
/// # Errors
/// * `LoadError::Io` - file cannot be read
/// * `LoadError::UnsupportedProtocol` - file was pickled with protocol 5
/// * `LoadError::UnknownProtocol` - file declares any other protocol above 4
/// * `LoadError::Decode` - file is not a pickle of line stats
pub fn load_stats(path: impl AsRef<Path>) -> Result<LineStats, LoadError> {
    let path = path.as_ref();

    debug!("Loading line stats from: {}", path.display());

    let data = std::fs::read(path)?;
    let stats = stats_from_slice(&data)?;

    debug!(
        "Loaded {} timing entries (unit {:?})",
        stats.timings.len(),
        stats.unit
    );

    Ok(stats)
}

/// Decode line stats from pickle bytes
///
/// Accepts a pickled `LineStats` instance or a plain dict with the same keys.
pub fn stats_from_slice(data: &[u8]) -> Result<LineStats, LoadError> {
    match declared_protocol(data) {
        Some(REFUSED_PROTOCOL) => return Err(LoadError::UnsupportedProtocol(REFUSED_PROTOCOL)),
        Some(version) if version > HIGHEST_SUPPORTED_PROTOCOL => {
            return Err(LoadError::UnknownProtocol(version))
        }
        _ => {}
    }

    // Instances come back as their attribute dict; the class reference is dropped
    let options = DeOptions::new()
        .decode_strings()
        .replace_unresolved_globals();

    Ok(serde_pickle::from_slice(data, options)?)
}

/// Protocol version declared by a leading `PROTO` opcode
///
/// Protocol 0 and 1 streams carry no header and yield `None`.
pub fn declared_protocol(data: &[u8]) -> Option<u8> {
    match data {
        [PROTO_OPCODE, version, ..] => Some(*version),
        _ => None,
    }
}

/// Map line stats onto the output document, keeping every order as-is
///
/// **Public** - the conversion at the heart of the tool
pub fn to_document(stats: &LineStats) -> ProfileDocument {
    let profiled_functions = stats
        .timings
        .iter()
        .map(|(key, records)| ProfiledFunction {
            file: key.file.clone(),
            line_no: key.line_no,
            function_name: key.function_name.clone(),
            profiled_lines: records
                .iter()
                .map(|record| ProfiledLine {
                    line_no: record.line_no,
                    hits: record.hits,
                    time: record.time,
                })
                .collect(),
        })
        .collect();

    ProfileDocument {
        profiled_functions,
        unit: stats.unit,
    }
}
