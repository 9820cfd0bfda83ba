// src/bin/check_output.rs
use anyhow::{Context, Result};
use scenarios::fixture::expected_output;
use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    process::exit,
};

fn main() {
    // Expect: expected-output fixture, 1-based scenario id, captured run log.
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <EXPECTED_FILE> <SCENARIO_ID> <LOG_FILE>", args[0]);
        exit(1);
    }
    let id: usize = match args[2].parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("SCENARIO_ID must be a positive integer, got {:?}", args[2]);
            exit(1);
        }
    };

    match check(Path::new(&args[1]), id, Path::new(&args[3])) {
        Ok(0) => println!("scenario {} matches", id),
        Ok(mismatches) => {
            eprintln!("scenario {}: {} line(s) differ", id, mismatches);
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

/// Compare the captured log against the expected lines for scenario `id`.
/// Prints each difference and returns how many positions differed.
fn check(expected_path: &Path, id: usize, log_path: &Path) -> Result<usize> {
    let outputs = expected_output(expected_path)?;
    let expected = outputs.get(&id).with_context(|| {
        format!(
            "no scenario {} in {:?} ({} scenario(s) in file)",
            id,
            expected_path,
            outputs.len()
        )
    })?;

    let log = File::open(log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;
    let log_lines: Vec<String> = BufReader::new(log)
        .lines()
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to read log file {:?}", log_path))?;

    let mut mismatches = 0;
    for i in 0..log_lines.len().max(expected.len()) {
        let got = log_lines.get(i).map(String::as_str);
        let want = expected.get(i).map(String::as_str);
        if got != want {
            mismatches += 1;
            println!(
                "line {}: got {:?}, expected {:?}",
                i + 1,
                got.unwrap_or("<missing>"),
                want.unwrap_or("<missing>")
            );
        }
    }
    Ok(mismatches)
}
