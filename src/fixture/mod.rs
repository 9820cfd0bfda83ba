// src/fixture/mod.rs
//! Helpers for the two files a harness run pairs up: the input feed and the
//! expected per-scenario output log. Both use the scenario file format, and a
//! scenario is addressed by its 1-based position in the file.

use anyhow::Result;
use std::{collections::BTreeMap, path::Path};

use crate::scenario::{read_scenarios, RawScenario};

/// Read `path` and key each scenario by its 1-based position in the file.
pub fn numbered_scenarios<P: AsRef<Path>>(path: P) -> Result<BTreeMap<usize, RawScenario>> {
    Ok(read_scenarios(path)?
        .into_iter()
        .enumerate()
        .map(|(idx, scenario)| (idx + 1, scenario))
        .collect())
}

/// Read an expected-output fixture. Each record is re-joined with `", "`
/// into the exact log line the run under test should have emitted, keyed by
/// the same 1-based numbering as [`numbered_scenarios`].
pub fn expected_output<P: AsRef<Path>>(path: P) -> Result<BTreeMap<usize, Vec<String>>> {
    let mut outputs = BTreeMap::new();
    for (idx, scenario) in read_scenarios(path)?.into_iter().enumerate() {
        let lines = scenario.iter().map(|row| row.join(", ")).collect();
        outputs.insert(idx + 1, lines);
    }
    Ok(outputs)
}
