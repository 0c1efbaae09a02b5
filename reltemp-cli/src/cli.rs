use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Text};
use reltemp_core::{
    Config, FixedLocation, Location, LocationProvider, NoLocation, Orchestrator,
    provider_from_config,
};
use std::process::ExitCode;

use crate::render::ReportView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "reltemp", version, about = "How today feels compared with the past week")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a home location and timezone.
    Configure,

    /// Show current temperature, comparisons and clothing advice.
    Show {
        /// Latitude of the location to report on.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the location to report on.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// IANA timezone for daily highs/lows, e.g. "Europe/Amsterdam".
        #[arg(long)]
        timezone: Option<String>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Exit on failure instead of offering to retry.
        #[arg(long)]
        no_retry: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure().map(|()| ExitCode::SUCCESS),
            Command::Show {
                lat,
                lon,
                timezone,
                json,
                no_retry,
            } => {
                let mut config = Config::load()?;
                if let Some(tz) = timezone {
                    config.timezone = Some(tz);
                }

                // Without explicit coordinates the report uses the configured home, or Tokyo.
                let locator: Box<dyn LocationProvider> = match (lat, lon) {
                    (Some(lat), Some(lon)) => Box::new(FixedLocation(Location::new(lat, lon))),
                    _ => Box::new(NoLocation),
                };

                let orchestrator = Orchestrator::new(
                    locator,
                    provider_from_config(&config)?,
                    config.default_location(),
                    config.location_timeout(),
                );

                show(&orchestrator, json, no_retry).await
            }
        }
    }
}

/// Load and print a report, offering to retry on failure.
///
/// Declining the retry exits with a failure code; the error has already been shown.
async fn show(
    orchestrator: &Orchestrator,
    json: bool,
    no_retry: bool,
) -> anyhow::Result<ExitCode> {
    let mut prompt = || Confirm::new("Retry?").with_default(true).prompt();
    show_with(orchestrator, json, no_retry, &mut prompt).await
}

async fn show_with<F>(
    orchestrator: &Orchestrator,
    json: bool,
    no_retry: bool,
    retry: &mut F,
) -> anyhow::Result<ExitCode>
where
    F: FnMut() -> inquire::error::InquireResult<bool>,
{
    loop {
        match orchestrator.load().await {
            Ok(report) => {
                if json {
                    let out = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?;
                    println!("{out}");
                } else {
                    print!("{}", ReportView(&report));
                }
                return Ok(ExitCode::SUCCESS);
            }
            Err(err) => {
                tracing::debug!("{err:?}");
                if no_retry {
                    return Err(err);
                }

                eprintln!("Could not load temperature data: {err}");
                if !retry()? {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config.default_location();

    let latitude = CustomType::<f64>::new("Home latitude:")
        .with_default(current.latitude)
        .with_error_message("Please enter a number, e.g. 35.6762")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Home longitude:")
        .with_default(current.longitude)
        .with_error_message("Please enter a number, e.g. 139.6503")
        .prompt()?;

    let name = Text::new("Name (optional):")
        .with_default(current.name.as_deref().unwrap_or(""))
        .prompt()?;
    let name = Some(name.trim().to_string()).filter(|n| !n.is_empty());

    let timezone = Text::new("Timezone:").with_default(config.timezone()).prompt()?;

    config.set_home(latitude, longitude, name);
    config.timezone = Some(timezone.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
