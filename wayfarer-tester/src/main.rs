mod checks;
mod loader;
mod reports;
mod scenarios;
mod tester;
mod util;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use wayfarer_core::ViewerConfig;

use scenarios::{all_keys, get_scenario, list_scenarios};
use tester::{ScenarioResult, ViewerTester};
use util::{parse_seeds, run_stamp, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "wayfarer-tester", version)]
#[command(about = "Headless QA for the Wayfarer viewer: replays sessions against a recording map")]
struct Args {
    /// Itinerary JSON to test (defaults to the bundled itinerary)
    #[arg(long)]
    itinerary: Option<PathBuf>,

    /// Viewer config JSON (defaults to the bundled viewer.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated, decimal or 0x-hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut out = open_output(args.output.as_deref())?;

    if args.list_scenarios {
        write_catalog(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    announce_banner();

    let started = Instant::now();
    let itinerary = Arc::new(loader::load(args.itinerary.as_deref())?);
    let config = load_config(args.config.as_deref())?;
    let seeds = parse_seeds(&split_csv(&args.seeds))?;
    log::info!(
        "testing '{}' ({} days) with {} seed(s)",
        itinerary.title(),
        itinerary.day_count(),
        seeds.len()
    );

    let tester = ViewerTester::new(itinerary, config, args.verbose);
    let results = run_scenarios(&tester, &expand_scenarios(&args.scenarios), &seeds, args.iterations);

    write_report(&mut out, args.report, &results, started.elapsed())?;
    out.flush()?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

/// Buffered report sink: the `--output` file when given, stdout otherwise.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(stdout())));
    };
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn write_catalog(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(out, "  {key:15} - {description}")?;
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "🧭 Wayfarer Viewer Tester".bright_cyan().bold());
    println!("{}", "=========================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::load_from_static());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse {}", path.display()))
}

/// Split the `--scenarios` list, replacing `all` with every catalog key not
/// already named.
fn expand_scenarios(arg: &str) -> Vec<String> {
    let requested = split_csv(arg);
    if !requested.iter().any(|s| s == "all") {
        return requested;
    }
    let mut keys: Vec<String> = requested.into_iter().filter(|s| s != "all").collect();
    for key in all_keys() {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn run_scenarios(
    tester: &ViewerTester,
    keys: &[String],
    seeds: &[u64],
    iterations: usize,
) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Viewer Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    keys.iter()
        .filter_map(|key| {
            let scenario = get_scenario(key);
            if scenario.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", key.yellow());
            }
            scenario
        })
        .flat_map(|scenario| tester.run_scenario(scenario, seeds, iterations))
        .collect()
}

fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    results: &[ScenarioResult],
    elapsed: Duration,
) -> Result<()> {
    match (format, results.is_empty()) {
        (ReportFormat::Json, _) => return reports::generate_json_report(out, results),
        (ReportFormat::Markdown, true) => writeln!(
            out,
            "# Wayfarer Viewer Test Results\n\n_No scenarios executed._"
        )?,
        (ReportFormat::Markdown, false) => reports::generate_markdown_report(out, results)?,
        (ReportFormat::Console, true) => writeln!(out, "No scenarios executed.")?,
        (ReportFormat::Console, false) => {
            reports::generate_console_report(out, results, elapsed)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "🏁 Finished {} in {elapsed:?}", run_stamp())?;
    Ok(())
}
