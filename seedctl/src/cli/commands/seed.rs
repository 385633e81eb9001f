//! Seed command handler

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::datasets;
use crate::pipeline::{self, RawRecord, SeedJob};
use crate::seeds;

#[derive(Subcommand, Debug)]
pub enum SeedCommands {
    /// Seed teacher accounts from a CSV export
    Teachers {
        /// Path to the CSV file
        file: PathBuf,
        /// Registration endpoint URL
        api_url: String,
    },
    /// Seed default user accounts from an Excel workbook
    Users {
        /// Path to the workbook
        file: PathBuf,
        /// Registration endpoint URL
        api_url: String,
        /// Worksheet to read (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Seed the built-in patent records
    Patents {
        /// Patent endpoint URL
        api_url: String,
    },
    /// Seed the built-in student achievement records
    Students {
        /// Entrance exam endpoint URL
        entrance_url: String,
        /// Higher studies endpoint URL
        higher_url: String,
        /// Inter-university sports endpoint URL
        inter_url: String,
        /// Intra-university sports endpoint URL
        intra_url: String,
    },
    /// Seed the built-in department activity records
    Department {
        /// Attended-activities endpoint URL
        attended_url: String,
        /// Conducted-activities endpoint URL
        conducted_url: String,
    },
}

/// Dispatch a seed subcommand.
///
/// Setup failures (missing file, unparseable source) abort before any
/// submission; per-record failures are reported but never fail the run.
pub async fn handle_seed_command(cmd: SeedCommands) -> Result<()> {
    let client = reqwest::Client::new();
    match cmd {
        SeedCommands::Teachers { file, api_url } => {
            let records = pipeline::read_csv(&file)?;
            run_job(&client, &seeds::teachers(), &records, &api_url).await;
        }
        SeedCommands::Users {
            file,
            api_url,
            sheet,
        } => {
            let records = pipeline::read_excel(&file, sheet.as_deref())?;
            run_job(&client, &seeds::users(), &records, &api_url).await;
        }
        SeedCommands::Patents { api_url } => {
            run_job(&client, &seeds::patents(), &datasets::patents(), &api_url).await;
        }
        SeedCommands::Students {
            entrance_url,
            higher_url,
            inter_url,
            intra_url,
        } => {
            run_job(
                &client,
                &seeds::entrance_exams(),
                &datasets::entrance_exams(),
                &entrance_url,
            )
            .await;
            run_job(
                &client,
                &seeds::higher_studies(),
                &datasets::higher_studies(),
                &higher_url,
            )
            .await;
            run_job(
                &client,
                &seeds::inter_sports(),
                &datasets::inter_sports(),
                &inter_url,
            )
            .await;
            run_job(
                &client,
                &seeds::intra_sports(),
                &datasets::intra_sports(),
                &intra_url,
            )
            .await;
        }
        SeedCommands::Department {
            attended_url,
            conducted_url,
        } => {
            run_job(
                &client,
                &seeds::attended_activities(),
                &datasets::attended_activities(),
                &attended_url,
            )
            .await;
            run_job(
                &client,
                &seeds::conducted_activities(),
                &datasets::conducted_activities(),
                &conducted_url,
            )
            .await;
        }
    }
    Ok(())
}

async fn run_job(
    client: &reqwest::Client,
    job: &SeedJob,
    records: &[RawRecord],
    endpoint: &str,
) {
    println!(
        "Seeding {} ({} records) -> {}",
        job.name.bold(),
        records.len(),
        endpoint.dimmed()
    );

    let report = pipeline::run(client, job, records, endpoint).await;

    for failure in report.failures() {
        println!(
            "  {} {}: {}",
            "failed".red(),
            failure.key,
            failure.error.as_deref().unwrap_or("")
        );
    }

    let summary = format!(
        "{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
    if report.is_clean() {
        println!("{}: {}", job.name, summary.green());
    } else {
        println!("{}: {}", job.name, summary.yellow());
    }
}
