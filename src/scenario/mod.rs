// src/scenario/mod.rs
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// One scenario: the record lines between two `#` markers, in file order,
/// each line already split into fields on the literal `", "` delimiter.
pub type RawScenario = Vec<Vec<String>>;

/// Read every scenario out of the fixture file at `path`.
///
/// The format is line-oriented. After stripping trailing whitespace from a
/// line (leading whitespace is kept):
/// - a line starting with `#` closes the scenario being accumulated; the
///   marker itself carries no data,
/// - a blank line is skipped and does NOT close the current scenario,
/// - any other line is one record, split on `", "` as-is. Fields are not
///   validated; a line without the delimiter becomes a single-field record.
///
/// Scenarios come back in file order and are never empty. A trailing
/// scenario with no closing marker is still included.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<RawScenario>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open scenario file {:?}", path))?;
    let reader = BufReader::new(file);

    let mut scenarios: Vec<RawScenario> = Vec::new();
    let mut current: RawScenario = Vec::new();

    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read from {:?}", path))?;
        let line = line.trim_end();

        if line.starts_with('#') {
            if !current.is_empty() {
                scenarios.push(std::mem::take(&mut current));
            }
        } else if !line.is_empty() {
            current.push(line.split(", ").map(str::to_string).collect());
        }
    }
    if !current.is_empty() {
        scenarios.push(current);
    }

    debug!(
        scenarios = scenarios.len(),
        rows = scenarios.iter().map(Vec::len).sum::<usize>(),
        "parsed scenario file"
    );
    Ok(scenarios)
}
