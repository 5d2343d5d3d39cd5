//! u-energy-sim - command-line front end for the dispatch simulator
//!
//! Loads a task set (JSON file or random generation), schedules it under
//! one or more policies, and prints each timeline with its energy summary.
//!
//! Binary: u-energy-sim

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_energy_schedule::config::{GeneratorConfig, SchedulerConfig};
use u_energy_schedule::generator::generate_tasks;
use u_energy_schedule::history::DEFAULT_HISTORY_CAPACITY;
use u_energy_schedule::models::{RawTaskRecord, ScheduledTask};
use u_energy_schedule::scheduler::{RunResult, SchedulerEngine};
use u_energy_schedule::taskset::{load_task_set, save_task_set, ImportMode};
use u_energy_schedule::validation::validate_tasks;

/// Energy-aware single-resource dispatch simulator
#[derive(Parser)]
#[command(name = "u-energy-sim")]
#[command(about = "Simulate non-preemptive task dispatch and report energy use", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "random"])))]
struct Cli {
    /// JSON task set to schedule
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Fill missing arrival (0), burst (1) and power (1) on import
    #[arg(long, requires = "input")]
    lenient: bool,

    /// Generate N random tasks instead of reading a file
    #[arg(short, long, value_name = "N")]
    random: Option<usize>,

    /// Seed for random generation
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// JSON generator ranges (see GeneratorConfig)
    #[arg(long, requires = "random")]
    generator_config: Option<PathBuf>,

    /// Ordering policy; repeat to compare several
    #[arg(short, long = "policy", default_value = "FCFS")]
    policies: Vec<String>,

    /// Scheduled tasks retained in the history
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    /// Print the history after all runs (most recent first)
    #[arg(long)]
    show_history: bool,

    /// Write the task set to a JSON file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    runs: &'a [RunResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<ScheduledTask>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "u_energy_schedule=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let records = load_records(&cli)?;
    if records.is_empty() {
        bail!("no tasks to schedule");
    }

    let config = SchedulerConfig::new().with_history_capacity(cli.history_capacity);
    let engine = SchedulerEngine::new(&config);

    let mut runs = Vec::with_capacity(cli.policies.len());
    for policy in &cli.policies {
        let result = engine
            .schedule(&records, policy)
            .with_context(|| format!("scheduling with policy '{policy}' failed"))?;
        runs.push(result);
    }

    if let Some(path) = &cli.export {
        let tasks = validate_tasks(&records)?;
        save_task_set(path, &tasks)
            .with_context(|| format!("failed to export tasks to {}", path.display()))?;
        info!(path = %path.display(), count = tasks.len(), "exported task set");
    }

    let history = cli.show_history.then(|| engine.history());

    if cli.json {
        let report = Report {
            runs: &runs,
            history,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for run in &runs {
            print_run(run);
        }
        if let Some(history) = history {
            print_history(&history, engine.history_capacity());
        }
    }

    Ok(())
}

fn load_records(cli: &Cli) -> anyhow::Result<Vec<RawTaskRecord>> {
    if let Some(path) = &cli.input {
        let mode = if cli.lenient {
            ImportMode::Lenient
        } else {
            ImportMode::Strict
        };
        return load_task_set(path, mode)
            .with_context(|| format!("failed to load tasks from {}", path.display()));
    }

    let count = cli.random.unwrap_or_default();
    let generator = match &cli.generator_config {
        Some(path) => load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(count, seed = ?cli.seed, "generating random tasks");
    Ok(generate_tasks(count, &generator, &mut rng))
}

fn load_generator_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    GeneratorConfig::from_json_str(&text)
        .with_context(|| format!("invalid generator config {}", path.display()))
}

const TABLE_HEADER: &str = "    ID  Arrival  Burst  Power  Priority    Start      End   Energy";

fn print_row(st: &ScheduledTask) {
    let t = st.task();
    println!(
        "{:>6}  {:>7}  {:>5}  {:>5}  {:>8}  {:>7}  {:>7}  {:>7}",
        t.id(),
        t.arrival(),
        t.burst(),
        t.power(),
        t.priority(),
        st.start(),
        st.end(),
        st.energy()
    );
}

fn print_run(run: &RunResult) {
    let m = &run.metrics;
    println!("== {} ({} tasks) ==", run.policy, run.len());
    println!("Order: {}", run.policy.describe());
    println!("{TABLE_HEADER}");
    for st in &run.schedule {
        print_row(st);
    }
    println!();
    println!("Total energy:    {} units", m.total_energy);
    println!("Average power:   {:.2}", m.avg_power);
    println!("Peak power:      {}", m.peak_power);
    println!("Makespan:        {} time units", m.makespan);
    println!(
        "Utilization:     {:.1}% (idle {} time units)",
        m.utilization * 100.0,
        m.idle_time
    );
    println!("Avg waiting:     {:.2}", m.avg_waiting_time);
    println!("Avg turnaround:  {:.2}", m.avg_turnaround_time);
    println!();
}

fn print_history(history: &[ScheduledTask], capacity: usize) {
    println!("== History ({}/{capacity}, most recent first) ==", history.len());
    println!("{TABLE_HEADER}");
    for st in history.iter().rev() {
        print_row(st);
    }
}
