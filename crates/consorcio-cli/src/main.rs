mod commands;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::bid::BidArgs;
use commands::schedule::ScheduleArgs;

/// Consórcio installment schedules and bid simulation
#[derive(Parser)]
#[command(
    name = "consorcio",
    version,
    about = "Consórcio installment schedules and bid (lance) simulation",
    long_about = "Computes the flat monthly installment and total cost of a consórcio \
                  contract from its credit amount, term, administration fee, reserve \
                  fund and insurance, and simulates applying a lump-sum bid either to \
                  shorten the term or to lower the installment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the flat installment schedule of a contract
    Schedule(ScheduleArgs),
    /// Simulate a bid (lance) against the contract balance
    Bid(BidArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Bid(args) => commands::bid::run_bid(args),
        Commands::Version => {
            println!("consorcio {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
