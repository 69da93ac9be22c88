pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "career")]
#[command(about = "Career Path CLI - database setup and server checks")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create missing tables and indexes")]
    Schema,

    #[command(about = "Insert the demo user and skills if no users exist")]
    Seed,

    #[command(about = "Check a running server's /api/health endpoint")]
    Ping {
        #[arg(long, help = "Server base URL (defaults to the configured host and port)")]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Schema => commands::database::schema(output_format).await,
        Commands::Seed => commands::database::seed(output_format).await,
        Commands::Ping { url } => commands::server::ping(url, output_format).await,
    }
}
