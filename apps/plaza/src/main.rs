//! plaza: command-line front end for the toll plaza simulator.
//!
//! ```text
//! plaza run --config plaza.json --seed 42 --out output/
//! plaza run --scenario "weekday peak" --db scenarios.json --json
//! plaza scenarios list --db scenarios.json
//! plaza scenarios save --db scenarios.json --name "weekday peak" --config plaza.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=tp_sim=debug` prints every arrival and completion).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use tp_core::{PlazaConfig, RawPlazaConfig, SimRng};
use tp_output::{CsvWriter, ScenarioRecord, ScenarioStore, SimOutputObserver};
use tp_sim::{FinalStats, NoopObserver, SimBuilder, SimOutcome};

const DEFAULT_DB: &str = "scenarios_db.json";

#[derive(Parser)]
#[command(name = "plaza")]
#[command(about = "Discrete-time toll plaza simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one simulation and print its statistics
    Run {
        /// JSON configuration file
        #[arg(long, conflicts_with = "scenario")]
        config: Option<PathBuf>,

        /// Name of a saved scenario to run instead of a config file
        #[arg(long)]
        scenario: Option<String>,

        /// Scenario store used with --scenario
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,

        /// RNG seed; omit for a non-reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Directory for tick_history.csv and booth_utilization.csv
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the full history and statistics as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Manage saved scenarios
    Scenarios {
        #[command(subcommand)]
        action: ScenarioAction,
    },
}

#[derive(Subcommand)]
enum ScenarioAction {
    /// List saved scenarios
    List {
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
    /// Save a configuration file under a name
    Save {
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run { config, scenario, db, seed, out, json } => {
            let raw = match (config, scenario) {
                (Some(path), None) => RawPlazaConfig::from_path(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, Some(name)) => ScenarioStore::new(db)
                    .find(&name)?
                    .with_context(|| format!("no saved scenario named {name:?}"))?
                    .config,
                _ => bail!("pass either --config or --scenario"),
            };
            let config = PlazaConfig::try_from(raw).context("invalid configuration")?;
            run(config, seed, out.as_deref(), json)
        }
        Command::Scenarios { action: ScenarioAction::List { db } } => list_scenarios(&db),
        Command::Scenarios { action: ScenarioAction::Save { db, name, config } } => {
            let raw = RawPlazaConfig::from_path(&config)
                .with_context(|| format!("reading {}", config.display()))?;
            // Reject configurations that could never be run.
            PlazaConfig::try_from(raw.clone()).context("invalid configuration")?;
            ScenarioStore::new(&db).append(ScenarioRecord { name: name.clone(), config: raw })?;
            info!("saved scenario {name:?} to {}", db.display());
            Ok(())
        }
    }
}

fn run(config: PlazaConfig, seed: Option<u64>, out: Option<&Path>, json: bool) -> Result<()> {
    info!(
        "{} automatic + {} manual booths, {} ticks, {} vehicles/min, {}% electronic, {}",
        config.automatic_booths,
        config.manual_booths,
        config.duration_ticks,
        config.vehicles_per_minute,
        config.electronic_percentage,
        config.traffic_pattern,
    );

    let rng = match seed {
        Some(s) => SimRng::new(s),
        None    => SimRng::from_entropy(),
    };
    let sim = SimBuilder::new(config, rng).build()?;

    let t0 = Instant::now();
    let outcome: SimOutcome = match out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            let outcome = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing CSV output");
            }
            info!("wrote {} history rows to {}", obs.rows_written(), dir.display());
            outcome
        }
        None => sim.run(&mut NoopObserver),
    };
    info!("simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_stats(&outcome.stats);
    }
    Ok(())
}

fn print_stats(stats: &FinalStats) {
    println!("Vehicles served      : {}", stats.completed);
    println!("Avg time in system   : {:.2} ticks", stats.avg_time_in_system);
    println!("Max time in system   : {} ticks", stats.max_time_in_system);
    println!("Max queue length     : {}", stats.max_queue_len);
    println!();
    println!("{:<12} {:>10} {:>12}", "Booth", "Busy", "Utilization");
    println!("{}", "-".repeat(36));
    for u in &stats.booth_utilization {
        println!(
            "{:<12} {:>10} {:>11.2}%",
            format!("{}-{}", u.kind, u.id),
            u.busy_ticks,
            u.utilization,
        );
    }
}

fn list_scenarios(db: &Path) -> Result<()> {
    let records = ScenarioStore::new(db).list()?;
    if records.is_empty() {
        println!("no saved scenarios in {}", db.display());
        return Ok(());
    }
    for r in records {
        println!("{:<24} {}", r.name, serde_json::to_string(&r.config)?);
    }
    Ok(())
}
