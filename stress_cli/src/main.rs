//! # Beamstress CLI
//!
//! Runs cross-section stress jobs stored as JSON files.
//!
//! ```text
//! stress init beam.json --label B-1
//! stress run beam.json
//! stress query beam.json --position 1.5 --json
//! ```
//!
//! Logging goes to stderr through `env_logger`; `RUST_LOG` overrides the
//! level chosen by `--verbose`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use stress_core::calculations::{stress_at, stress_envelope, PointStress};
use stress_core::diagram::ForceDiagram;
use stress_core::equations::section::rectangular_moment_of_inertia;
use stress_core::errors::StressError;
use stress_core::file_io::{load_job, save_job};
use stress_core::job::AnalysisJob;
use stress_core::sections::SectionDescriptor;

mod report;

#[derive(Parser)]
#[command(name = "stress")]
#[command(about = "Bending and shear stresses in beam cross-sections", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample job file
    Init {
        /// Output job file
        path: PathBuf,
        /// Job label
        #[arg(short, long, default_value = "B-1")]
        label: String,
    },
    /// Run every calculation for a job
    Run {
        /// Job file
        job: PathBuf,
        /// Analysis position (default: job setting, then peak bending station)
        #[arg(long, allow_negative_numbers = true)]
        position: Option<f64>,
        /// Intervals across the section height
        #[arg(long)]
        points: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Bending and shear stress at every diagram station
    Profile {
        /// Job file
        job: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Stresses and forces at one position
    Query {
        /// Job file
        job: PathBuf,
        /// Position along the span
        #[arg(short, long, allow_negative_numbers = true)]
        position: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Stress across the section height at one position
    Distribution {
        /// Job file
        job: PathBuf,
        /// Analysis position (default: job setting, then peak bending station)
        #[arg(long, allow_negative_numbers = true)]
        position: Option<f64>,
        /// Intervals across the section height
        #[arg(long)]
        points: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    label: &'a str,
    position: f64,
    #[serde(flatten)]
    stress: PointStress,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Init { path, label } => init_job(&path, label),
        Commands::Run {
            job,
            position,
            points,
            json,
        } => {
            let job = open_job(&job, position, points)?;
            let report = job.run()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report::render_report(&report));
            }
            Ok(())
        }
        Commands::Profile { job, json } => {
            let job = open_job(&job, None, None)?;
            let profile = job.profile()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let envelope = stress_envelope(&profile);
                println!("{}", report::render_profile(&profile, envelope.as_ref()));
            }
            Ok(())
        }
        Commands::Query {
            job,
            position,
            json,
        } => {
            let job = open_job(&job, None, None)?;
            let stress = stress_at(&job.properties(), &job.diagram, position)?;
            if json {
                let output = QueryOutput {
                    label: &job.meta.label,
                    position,
                    stress,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", report::render_point(position, &stress));
            }
            Ok(())
        }
        Commands::Distribution {
            job,
            position,
            points,
            json,
        } => {
            let job = open_job(&job, position, points)?;
            let report = job.run()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report.distribution)?);
            } else {
                println!(
                    "{}",
                    report::render_distribution(
                        report.section_kind,
                        report.analysis_position,
                        &report.distribution
                    )
                );
            }
            Ok(())
        }
    }
}

/// Load a job and apply command-line overrides to its settings
fn open_job(path: &Path, position: Option<f64>, points: Option<usize>) -> Result<AnalysisJob> {
    let mut job =
        load_job(path).with_context(|| format!("failed to load job {}", path.display()))?;
    if position.is_some() {
        job.settings.analysis_position = position;
    }
    if let Some(points) = points {
        job.settings.point_count = points;
    }
    log::debug!("job '{}' settings: {:?}", job.meta.label, job.settings);
    Ok(job)
}

/// Sample job: 0.2 x 0.4 rectangle on a 4 m simple span under 1000 N/m
fn init_job(path: &Path, label: String) -> Result<()> {
    const SPAN: f64 = 4.0;
    const LOAD: f64 = 1000.0;

    let xs: Vec<f64> = (0..=8).map(|i| i as f64 * SPAN / 8.0).collect();
    let shear: Vec<(f64, f64)> = xs.iter().map(|&x| (x, LOAD * (SPAN / 2.0 - x))).collect();
    let moment: Vec<(f64, f64)> = xs
        .iter()
        .map(|&x| (x, LOAD * x * (SPAN - x) / 2.0))
        .collect();
    let diagram = ForceDiagram::from_diagrams(&shear, &moment)?;

    let job = AnalysisJob::new(
        label,
        SectionDescriptor::rectangular(0.2, 0.4),
        rectangular_moment_of_inertia(0.2, 0.4),
        diagram,
    );
    save_job(&job, path).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote sample job '{}' to {}", job.meta.label, path.display());
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {:#}", err);
    if let Some(stress_err) = err.downcast_ref::<StressError>() {
        if let Ok(json) = serde_json::to_string_pretty(stress_err) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
}
