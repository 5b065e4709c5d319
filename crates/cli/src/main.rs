//! Feebank CLI - run account scenarios from the command line
//!
//! Usage:
//! ```bash
//! feebank demo
//! feebank run demos/scenario.json
//! feebank run demos/scenario.json --format json
//! feebank --config fees.json config
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use feebank_core::BankConfig;
use std::path::PathBuf;
use tracing::Level;

mod commands;

use commands::{demo, run};

/// Feebank - accounts with deposit bonuses and withdrawal fees
#[derive(Parser)]
#[command(name = "feebank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Fee configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in walkthrough with one account of each kind
    Demo,

    /// Run a scenario file
    Run {
        /// Scenario file path (JSON)
        scenario: PathBuf,
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// Skip the closing balance summary
        #[arg(long)]
        no_summary: bool,
    },

    /// Print the effective fee configuration
    Config,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: Option<&PathBuf>) -> Result<BankConfig> {
    match path {
        Some(path) => BankConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => Ok(BankConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Demo => {
            demo::run(config)?;
        }

        Commands::Run {
            scenario,
            format,
            no_summary,
        } => {
            run::run(config, &scenario, format, !no_summary)?;
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
