mod clipboard;
mod commands;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::MortgageArgs;
use commands::password::PasswordArgs;
use commands::replay::ReplayArgs;
use commands::text::CountArgs;

/// Word counter, password generator and mortgage calculator
#[derive(Parser)]
#[command(
    name = "ptools",
    version,
    about = "Word counter, password generator and mortgage calculator",
    long_about = "Command-line front end for the page widgets: live word and character \
                  counts, random passwords with optional digits and symbols, and \
                  fixed-rate mortgage payments with amortization schedules and chart data."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Count words and non-whitespace characters
    Count(CountArgs),
    /// Generate a random password
    Password(PasswordArgs),
    /// Calculate a fixed-rate mortgage payment and schedule
    Mortgage(MortgageArgs),
    /// Replay a recorded page event script and print the resulting updates
    Replay(ReplayArgs),
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
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Count(args) => commands::text::run_count(args),
        Commands::Password(args) => commands::password::run_password(args),
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Replay(args) => commands::replay::run_replay(args),
        Commands::Version => {
            println!("ptools {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
