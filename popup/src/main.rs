//! jobclip popup
//!
//! `show` prints the form as it would open for the active tab; `submit`
//! fills in the rest from flags and files the application.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use common::SubmitOutcome;
use popup::{BackgroundClient, DEFAULT_BACKGROUND_URL, JobForm, Popup};

#[derive(Debug, Parser)]
#[command(name = "popup", about = "jobclip popup")]
struct Cli {
    /// Base URL of the background coordinator
    #[arg(long, env = "BACKGROUND_URL", default_value = DEFAULT_BACKGROUND_URL)]
    background_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the pre-filled form
    Show,
    /// Fill in the form and add the job to Notion
    Submit(FormFields),
}

/// Values typed into the form; each replaces the pre-filled one.
#[derive(Debug, Args)]
struct FormFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long = "type")]
    job_type: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    deadline: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long = "pay")]
    pay_per_hour: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

impl FormFields {
    fn apply(self, form: &mut JobForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.company, &mut form.company),
            (self.location, &mut form.location),
            (self.job_type, &mut form.job_type),
            (self.deadline, &mut form.deadline),
            (self.status, &mut form.status),
            (self.pay_per_hour, &mut form.pay_per_hour),
            (self.notes, &mut form.notes),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,popup=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = BackgroundClient::new(cli.background_url);
    let mut popup = Popup::open(client)
        .await
        .context("Failed to open popup")?;

    match cli.command {
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(&popup.form)?);
        }
        Command::Submit(fields) => {
            fields.apply(&mut popup.form);
            match popup.submit().await.context("Failed to submit job")? {
                SubmitOutcome::Created { page_id, url } => {
                    println!("Added to Notion: {}", url.unwrap_or(page_id));
                }
                SubmitOutcome::Failed { error } => bail!("Notion rejected the job: {error}"),
            }
        }
    }

    Ok(())
}
