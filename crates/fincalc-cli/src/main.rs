mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::loan::LoanArgs;
use commands::simple_interest::SimpleInterestArgs;
use commands::sip::SipArgs;

/// Loan, SIP and simple-interest calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Loan, SIP and simple-interest calculations with decimal precision",
    long_about = "A CLI for everyday financial planning with decimal precision. \
                  Supports EMI amortization schedules in equal-installment and \
                  equal-principal modes, side-by-side comparison of up to three \
                  loans, SIP projections, simple interest, and CSV export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Amortization schedule and headline metrics for a single loan
    Loan(LoanArgs),
    /// Compare up to three loans side by side
    Compare(CompareArgs),
    /// Project a monthly SIP investment
    Sip(SipArgs),
    /// Simple (non-compounding) interest
    SimpleInterest(SimpleInterestArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Sip(args) => commands::sip::run_sip(args),
        Commands::SimpleInterest(args) => commands::simple_interest::run_simple_interest(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
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
