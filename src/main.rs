use anyhow::Result;
use scenarios::fixture::numbered_scenarios;
use serde::Serialize;
use std::{env, process::exit};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Serialize)]
struct ScenarioDump {
    id: usize,
    rows: Vec<Vec<String>>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <SCENARIO_FILE>", args[0]);
        exit(1);
    }

    // ─── 3) load + dump ──────────────────────────────────────────────
    let scenarios = numbered_scenarios(&args[1])?;
    info!(
        file = %args[1],
        scenarios = scenarios.len(),
        rows = scenarios.values().map(Vec::len).sum::<usize>(),
        "loaded scenario file"
    );

    let dump: Vec<ScenarioDump> = scenarios
        .into_iter()
        .map(|(id, rows)| ScenarioDump { id, rows })
        .collect();
    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
