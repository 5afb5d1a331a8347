mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::emi::EmiArgs;

/// Loan installment calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan installment (EMI) calculations",
    long_about = "A CLI for equated-monthly-installment calculations with decimal \
                  precision. Computes the monthly installment, total payment, and \
                  total interest of a fully amortizing loan, and can render a \
                  formatted repayment quote."
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
    /// Calculate the EMI breakdown (installment, total payment, total interest)
    Emi(EmiArgs),
    /// Print a formatted repayment quote (₹, Indian digit grouping)
    Quote(EmiArgs),
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
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Quote(args) => match commands::emi::run_quote(args) {
            Ok(()) => process::exit(0),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
        },
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
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
