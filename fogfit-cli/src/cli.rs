use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use fogfit_core::{Config, Recommendation, Recommender, neighborhoods};
use inquire::{Confirm, Text};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "fogfit", version, about = "What to wear right now in a San Francisco neighborhood")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known neighborhoods.
    List,

    /// Recommend an outfit for a neighborhood.
    Recommend {
        /// Neighborhood name, e.g. "Mission" or "Outer Sunset".
        neighborhood: String,

        /// Skip the network providers and use synthetic weather.
        #[arg(long)]
        offline: bool,

        /// Print the recommendation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactively set the outbound identification and offline mode.
    Configure,

    /// Liveness check.
    Health,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::List => {
                for name in neighborhoods::names() {
                    println!("{name}");
                }
            }
            Command::Recommend { neighborhood, offline, json } => {
                let coord = neighborhoods::lookup(&neighborhood)
                    .ok_or_else(|| anyhow!("Unknown neighborhood: {neighborhood}"))?;

                let mut config = Config::from_env()?;
                config.offline |= offline;
                debug!(?config, "loaded configuration");

                let recommender = Recommender::from_config(&config)?;
                let rec = recommender.recommend(coord).await;

                if json {
                    let out = serde_json::to_string_pretty(&rec)
                        .context("Failed to serialize recommendation")?;
                    println!("{out}");
                } else {
                    print_recommendation(&neighborhood, &rec);
                }
            }
            Command::Configure => configure()?,
            Command::Health => println!("ok"),
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.user_agent = Text::new("User-Agent for weather providers:")
        .with_default(&config.user_agent)
        .with_help_message("NOAA asks for an app name and a contact address")
        .prompt()
        .context("Failed to read user agent")?;

    config.offline = Confirm::new("Always use offline (synthetic) weather?")
        .with_default(config.offline)
        .prompt()
        .context("Failed to read offline mode")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn print_recommendation(neighborhood: &str, rec: &Recommendation) {
    println!("{neighborhood}: {}°F, wind {} mph, {}", rec.temp_f, rec.wind_mph, rec.forecast);
    println!("Updated {} via {}", rec.last_updated_local, rec.source);
    println!();
    println!("Wear:");
    for item in &rec.items {
        println!("  - {item}");
    }
    println!();
    println!("({})", rec.note);
}
