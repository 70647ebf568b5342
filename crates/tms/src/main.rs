//! Time Machines SDK command line tool
//!
//! Operational entry points for the SDK:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tms check` | Load and validate application settings, reporting every violation |
//! | `tms providers` | List the closed provider registries |

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tms::adapters::factory;
use tms::{ProviderCategory, SettingsLoader};
use tms_domain::error::Error;

/// Command line interface for the Time Machines SDK
#[derive(Parser, Debug)]
#[command(name = "tms")]
#[command(about = "Time Machines SDK - validated configuration and provider adapters")]
#[command(version)]
struct Cli {
    /// Path to settings file (defaults to tms.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Log level (overridden by TMS_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the application settings from file and environment sources
    Check,
    /// List supported providers per category
    Providers {
        /// Limit the listing to one category
        #[arg(long)]
        category: Option<ProviderCategory>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tms::logging::init_logging(&cli.log_level, cli.json_logs)
        .context("failed to initialize logging")?;

    let mut loader = SettingsLoader::new();
    if let Some(config) = &cli.config {
        loader = loader.with_config_path(config);
    }

    match cli.command {
        Command::Check => run_check(&loader),
        Command::Providers { category } => {
            run_providers(category);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(loader: &SettingsLoader) -> anyhow::Result<ExitCode> {
    match loader.load_app() {
        Ok(settings) => {
            println!(
                "settings OK: port {}, environment {}",
                settings.port,
                settings.node_env.as_str()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Validation { issues }) => {
            eprintln!("{} validation issue(s):", issues.len());
            for issue in &issues {
                eprintln!("  {issue}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("failed to read settings sources"),
    }
}

fn run_providers(category: Option<ProviderCategory>) {
    let categories: Vec<ProviderCategory> = match category {
        Some(one) => vec![one],
        None => ProviderCategory::ALL.to_vec(),
    };

    for category in categories {
        println!("{category}:");
        for (name, description) in factory::providers(category) {
            println!("  {name:<12} {description}");
        }
    }
}
