//! minestone CLI - issuance milestone countdown for halving-schedule chains.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod display;

use display::{Format, RateModeArg};

#[derive(Parser)]
#[command(name = "minestone")]
#[command(about = "Estimates when a fixed-supply chain crosses an issuance milestone", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the feed once and print the milestone report
    Status {
        /// Milestone threshold in whole coins. Defaults to the full supply.
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Rate strategy used for the projection
        #[arg(short, long, value_enum, default_value = "empirical")]
        rate_mode: RateModeArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Primary feed endpoint (JSON block batch)
        #[arg(long)]
        primary_url: Option<String>,

        /// Fallback feed endpoint (plain-text height)
        #[arg(long)]
        fallback_url: Option<String>,
    },

    /// Live countdown display, polling the feed on an interval
    Watch {
        /// Milestone threshold in whole coins. Defaults to the full supply.
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Rate strategy used for the projection
        #[arg(short, long, value_enum, default_value = "empirical")]
        rate_mode: RateModeArg,

        /// Seconds between feed polls
        #[arg(long, default_value = "30")]
        poll_interval: u64,

        /// Nominal fallback rate in seconds per block
        #[arg(long, default_value = "600")]
        nominal_rate: f64,

        /// Primary feed endpoint (JSON block batch)
        #[arg(long)]
        primary_url: Option<String>,

        /// Fallback feed endpoint (plain-text height)
        #[arg(long)]
        fallback_url: Option<String>,
    },

    /// Show the issuance schedule: eras, subsidies, total supply
    Info {
        /// Initial per-block subsidy in whole coins
        #[arg(long, default_value = "50")]
        subsidy: f64,

        /// Blocks per halving era
        #[arg(long, default_value = "210000")]
        era_length: u64,
    },

    /// Solve the target height for a threshold without touching the feed
    Target {
        /// Milestone threshold in whole coins
        threshold: f64,

        /// Initial per-block subsidy in whole coins
        #[arg(long, default_value = "50")]
        subsidy: f64,

        /// Blocks per halving era
        #[arg(long, default_value = "210000")]
        era_length: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Status {
            threshold,
            rate_mode,
            format,
            primary_url,
            fallback_url,
        } => commands::status::status(threshold, rate_mode, format, primary_url, fallback_url).await,
        Commands::Watch {
            threshold,
            rate_mode,
            poll_interval,
            nominal_rate,
            primary_url,
            fallback_url,
        } => {
            commands::watch::watch(
                threshold,
                rate_mode,
                poll_interval,
                nominal_rate,
                primary_url,
                fallback_url,
                cli.quiet,
            )
            .await
        }
        Commands::Info { subsidy, era_length } => commands::info::show_schedule(subsidy, era_length),
        Commands::Target {
            threshold,
            subsidy,
            era_length,
        } => commands::target::solve_target(threshold, subsidy, era_length),
    }
}
