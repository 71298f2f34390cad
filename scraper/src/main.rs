//! NUWorks job-detail scraper
//!
//! Fetches (or reads from disk) one job-detail page, scrapes it and prints
//! the result as JSON. Optionally saves it to data/job.json.

use anyhow::{bail, Context, Result};
use clap::Parser;
use common::{is_job_detail_url, JobDetails};
use job_scraper::{
    scrape_additional_details, scrape_description, scrape_job_details, AdditionalDetail,
};
use scraper::Html;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "job-scraper", about = "Scrape a NUWorks job-detail page")]
struct Args {
    /// URL of the job-detail page
    url: String,

    /// Read the page from this HTML file instead of downloading it
    #[arg(long)]
    html: Option<PathBuf>,

    /// Also write the result to data/job.json
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Serialize)]
struct ScrapeReport {
    #[serde(flatten)]
    job: JobDetails,
    description: Option<String>,
    additional_details: Vec<AdditionalDetail>,
}

fn load_page(args: &Args) -> Result<String> {
    if let Some(path) = &args.html {
        tracing::info!(path = %path.display(), "Reading page from file");
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    tracing::info!(url = %args.url, "Fetching page");
    let response = reqwest::blocking::get(&args.url)
        .with_context(|| format!("Failed to fetch {}", args.url))?
        .error_for_status()?;
    let body = response.text().context("Failed to read response body")?;
    tracing::info!(bytes = body.len(), "Fetched page");
    Ok(body)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_scraper=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !is_job_detail_url(&args.url) {
        bail!("{} is not a job-detail page", args.url);
    }

    let page = load_page(&args)?;
    let document = Html::parse_document(&page);

    let report = ScrapeReport {
        job: scrape_job_details(&document, &args.url)?,
        description: scrape_description(&document),
        additional_details: scrape_additional_details(&document),
    };
    tracing::info!(title = %report.job.title, company = %report.job.company, "Scraped posting");

    let json_output = serde_json::to_string_pretty(&report).context("Failed to serialize job")?;
    println!("{json_output}");

    if args.save {
        let data_dir = Path::new("data");
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
        let output_path = data_dir.join("job.json");
        fs::write(&output_path, &json_output).context("Failed to write job.json")?;
        tracing::info!(path = %output_path.display(), "Saved job");
    }

    Ok(())
}
