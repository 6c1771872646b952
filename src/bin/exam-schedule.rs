//! Exam schedule CLI
//!
//! Generates a two-day exam schedule from a dataset file and writes the
//! text export (or the JSON record with `--json`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use exam_schedule::config::SchedulerConfig;
use exam_schedule::dataset::Dataset;
use exam_schedule::export::export_text;
use exam_schedule::scheduler::ExamScheduler;

#[derive(Debug, Parser)]
#[command(name = "exam-schedule", version, about = "Generate a two-day exam schedule")]
struct Cli {
    /// Dataset file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    data: PathBuf,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible schedules (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Output path (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the schedule and statistics as JSON instead of the text export
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SchedulerConfig::load_with_env_and_validate(path)?,
        None => {
            let config = SchedulerConfig::load_or_default().with_env_override();
            config.validate()?;
            config
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase())),
        )
        .init();

    let dataset = Dataset::load(&cli.data)?;
    let summary = dataset.summary();
    info!(
        instructors = summary.instructors,
        courses = summary.courses,
        rooms = summary.rooms,
        programs = summary.programs,
        "dataset loaded"
    );
    if let Err(errors) = dataset.validate() {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let run = ExamScheduler::new().generate_dataset(&dataset, &mut rng)?;
    let stats = run.stats(&dataset.rooms);

    println!("Total exams:          {}", stats.total_exams);
    println!("Utilization:          {:.1}%", stats.utilization_rate);
    println!("Instructors used:     {}", stats.assigned_instructor_count);
    println!("Rooms used:           {}", stats.assigned_room_count);
    let unplaced = run.unplaced_courses(&dataset.courses);
    if !unplaced.is_empty() {
        let codes: Vec<&str> = unplaced.iter().map(|c| c.code.as_str()).collect();
        println!("Unplaced courses:     {}", codes.join(", "));
    }

    let body = if cli.json {
        serde_json::to_string_pretty(&json!({
            "schedule_data": run.grid,
            "stats": stats,
        }))?
    } else {
        export_text(&run.grid)?
    };
    std::fs::write(&config.output, body)
        .with_context(|| format!("writing {}", config.output.display()))?;
    info!(path = %config.output.display(), "schedule exported");

    Ok(())
}
