//! shiftreq - shift-availability requests
//!
//! CLI binary for submitting monthly shift requests to Notion and Chatwork.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::AuthAction;
use shift_request::config::AppConfig;
use shift_request::types::Service;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "shiftreq")]
#[command(about = "Monthly shift requests - Notion & Chatwork")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to SHIFTREQ_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a request from a JSON file
    Submit {
        /// Request file (staff_name, month, days, remarks)
        #[arg(short, long)]
        request: PathBuf,

        /// Dry run - show what would be sent without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Credential management
    Auth {
        #[command(subcommand)]
        service: AuthService,
    },
}

#[derive(Subcommand)]
enum AuthService {
    /// Notion integration token
    Notion {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Chatwork API token
    Chatwork {
        #[command(subcommand)]
        action: AuthAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHIFTREQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => {
            // Default: interactive form
            cli::run_form(&config).await?;
        }
        Some(Commands::Submit { request, dry_run }) => {
            if !cli::run_submit(&config, &request, dry_run).await? {
                std::process::exit(1);
            }
        }
        Some(Commands::Auth { service }) => match service {
            AuthService::Notion { action } => {
                cli::run_auth(&config, Service::Notion, action).await?;
            }
            AuthService::Chatwork { action } => {
                cli::run_auth(&config, Service::Chatwork, action).await?;
            }
        },
    }

    Ok(())
}
