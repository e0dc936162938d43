//! Shared fixtures for integration tests.
//!
//! `tests/fixtures/line_stats_p{0,2,4,5}.lprof` were written by CPython's
//! `pickle.dump` on a `line_profiler.line_profiler.LineStats` holding
//! [`fixture_stats`]. Ad-hoc inputs are pickled as plain dicts with
//! `serde_pickle`.

#![allow(dead_code)]

use kernprof_json::parser::{FunctionKey, LineRecord, LineStats, Number};
use serde_pickle::SerOptions;
use std::path::{Path, PathBuf};

/// Path of a checked-in fixture
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of the checked-in `LineStats` fixtures
pub fn fixture_stats() -> LineStats {
    line_stats(
        vec![
            ("/src/app/zeta.py", 3, "zeta", vec![(5, 1, Number::Int(40)), (4, 2, Number::Int(7))]),
            (
                "/src/app/alpha.py",
                10,
                "foo",
                vec![
                    (10, 5, Number::Int(1200)),
                    (11, 5, Number::Int(3400)),
                    (12, 1, Number::Int(5_000_000_000)),
                ],
            ),
            ("/src/app/alpha.py", 20, "bar", vec![]),
        ],
        Number::Float(1e-6),
    )
}

pub fn line_stats(
    entries: Vec<(&str, i64, &str, Vec<(i64, i64, Number)>)>,
    unit: Number,
) -> LineStats {
    LineStats {
        timings: entries
            .into_iter()
            .map(|(file, line_no, function_name, records)| {
                (
                    FunctionKey {
                        file: file.to_string(),
                        line_no,
                        function_name: function_name.to_string(),
                    },
                    records.into_iter().map(LineRecord::from).collect(),
                )
            })
            .collect(),
        unit,
    }
}

/// Pickle line stats as a plain dict
pub fn pickle_stats(stats: &LineStats) -> Vec<u8> {
    serde_pickle::to_vec(stats, SerOptions::new()).unwrap()
}

/// A minimal stream that declares the given protocol
pub fn protocol_stream(version: u8) -> Vec<u8> {
    vec![0x80, version, b'K', 0x01, b'.']
}

pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
