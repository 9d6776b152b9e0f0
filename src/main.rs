use std::path::PathBuf;

use anyhow::Context;
use care_gaps::utils::test::SyntheticClinic;
use care_gaps::{PipelineConfig, ScoringPolicy, run_full_analysis};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "care-gaps")]
#[command(about = "Identify and prioritize preventive care gaps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full care gap analysis
    Run {
        /// Directory with patients, visits, screening_due and lab_results tables
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Directory the reports are written to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Evaluate patients in parallel
        #[arg(long)]
        parallel: bool,
        /// Worker threads for parallel mode
        #[arg(long)]
        threads: Option<usize>,
        /// Give the senior age bonus once per patient instead of once per gap
        #[arg(long)]
        age_bonus_per_patient: bool,
    },
    /// Write a synthetic clinic extract as CSV files
    Generate {
        /// Directory the tables are written to
        #[arg(long, default_value = "data")]
        output_dir: PathBuf,
        /// Number of patients
        #[arg(long, default_value_t = 100)]
        patients: usize,
        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Date the synthetic history is generated around (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data_dir,
            output_dir,
            date,
            parallel,
            threads,
            age_bonus_per_patient,
        } => {
            let mut config = PipelineConfig::from_env()
                .with_data_dir(data_dir)
                .with_output_dir(output_dir)
                .with_parallel(parallel);
            if let Some(date) = date {
                config = config.with_reference_date(date);
            }
            if let Some(threads) = threads {
                config.num_threads = threads;
            }
            if age_bonus_per_patient {
                config = config.with_scoring_policy(ScoringPolicy::AgeBonusPerPatient);
            }

            let outcome = run_full_analysis(&config).context("care gap analysis failed")?;
            info!(
                "Done: {} patients with gaps, report at {}",
                outcome.summary.patients_with_gaps,
                outcome.files.report_csv.display()
            );
        }
        Commands::Generate {
            output_dir,
            patients,
            seed,
            date,
        } => {
            let reference_date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let clinic = SyntheticClinic::generate(patients, reference_date, seed);
            clinic
                .write_csv(&output_dir)
                .with_context(|| format!("writing synthetic data to {}", output_dir.display()))?;
            info!(
                "Wrote {} patients, {} visits, {} screening rows, {} lab results to {}",
                clinic.patients.len(),
                clinic.visits.len(),
                clinic.screenings.len(),
                clinic.lab_results.len(),
                output_dir.display()
            );
        }
    }

    Ok(())
}
