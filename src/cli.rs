// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;
use crate::jobs::JobFetcher;
use crate::tailor::{ResumeTailor, TailoringRequest};
use crate::utils;

#[derive(Parser)]
#[command(name = "jobtailor")]
#[command(about = "Fetch job postings and tailor a master resume to them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for job postings
    Fetch {
        /// Free-text search query, e.g. "Frontend Developer React"
        #[arg(long)]
        query: String,
        /// Free-text location appended to the query
        #[arg(long, default_value = "Remote")]
        location: String,
        /// Print full listings as JSON instead of summary lines
        #[arg(long)]
        json: bool,
    },
    /// Tailor the master resume to one job posting
    Tailor {
        /// Job title of the posting
        #[arg(long)]
        title: String,
        /// Company offering the role
        #[arg(long)]
        company: String,
        /// File containing the raw job description text
        #[arg(long)]
        description_file: PathBuf,
        /// Where to write the tailored resume (defaults to a timestamped
        /// file under the configured output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Command::Fetch {
            query,
            location,
            json,
        } => {
            let api_key = Settings::search_api_key()?;
            let fetcher = JobFetcher::new(&settings.search, api_key, settings.timeout_seconds)?;

            let jobs = fetcher.fetch(&query, &location).await?;

            if jobs.is_empty() {
                println!("No jobs found for: {} in {}", query, location);
                return Ok(());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
            } else {
                println!("✓ Found {} relevant job openings", jobs.len());
                for job in &jobs {
                    println!("  {} at {}", job.title, job.company);
                    println!("    Apply here: {}", job.apply_link);
                }
            }
        }

        Command::Tailor {
            title,
            company,
            description_file,
            output,
        } => {
            let api_key = Settings::model_api_key()?;
            let description = utils::read_file_content(&description_file).await?;

            let request = TailoringRequest {
                job_title: title,
                company_name: company,
                job_description: description,
            };

            let tailor = ResumeTailor::new(settings, api_key)?;
            let tailored = tailor.tailor(&request).await?;

            let output_path = output.unwrap_or_else(|| {
                utils::tailored_output_path(
                    &settings.output_path,
                    &request.company_name,
                    &request.job_title,
                )
            });

            utils::write_file_content(&output_path, &tailored).await?;
            println!("✓ Tailored resume written to {}", output_path.display());
        }
    }

    Ok(())
}
