use std::io::{self, Write};

use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_calc_core::emi::{calculate_emi, EmiInput};
use emi_calc_core::session::{CalculatorSession, LoanTerms, ResultsSink, ResultsView};
use emi_calc_core::{EmiCalcError, EmiCalcResult};

use crate::input;

/// Arguments for the EMI calculation. Omitted flags fall back to the
/// documented defaults (500000 at 7.5% over 60 months).
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EmiArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent, e.g. 7.5
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan tenure in months
    #[arg(long, alias = "months")]
    pub tenure_months: Option<i64>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input = resolve_input(&args)?;
    let output = calculate_emi(&emi_input)?;
    let value = serde_json::to_value(&output).map_err(EmiCalcError::from)?;
    Ok(value)
}

pub fn run_quote(args: EmiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let emi_input = resolve_input(&args)?;
    let terms = LoanTerms {
        principal: emi_input.principal,
        annual_rate_percent: emi_input.annual_rate_percent,
        tenure_months: emi_input.tenure_months,
    };
    // Constructing the session runs the initial recomputation, which
    // renders the quote through the console panel.
    CalculatorSession::new(terms, ConsolePanel::default())?;
    Ok(())
}

fn resolve_input(args: &EmiArgs) -> Result<EmiInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_document(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let defaults = LoanTerms::default();
    Ok(EmiInput {
        principal: args.principal.unwrap_or(defaults.principal),
        annual_rate_percent: args.annual_rate.unwrap_or(defaults.annual_rate_percent),
        tenure_months: args.tenure_months.unwrap_or(defaults.tenure_months),
    })
}

/// Results panel on stdout. The header prints once per session.
#[derive(Default)]
struct ConsolePanel {
    revealed: bool,
}

impl ResultsSink for ConsolePanel {
    fn present(&mut self, view: &ResultsView) -> EmiCalcResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_panel(&mut out, self.revealed, view).map_err(|e| EmiCalcError::Render(e.to_string()))?;
        self.revealed = true;
        Ok(())
    }
}

fn write_panel(out: &mut impl Write, revealed: bool, view: &ResultsView) -> io::Result<()> {
    if !revealed {
        writeln!(out, "Repayment quote")?;
    }
    writeln!(out, "  Principal:       {}", view.principal)?;
    writeln!(out, "  Annual rate:     {}%", view.annual_rate)?;
    writeln!(out, "  Tenure (months): {}", view.tenure_months)?;
    writeln!(out, "  Monthly EMI:     {}", view.emi)?;
    writeln!(out, "  Total payment:   {}", view.total_payment)?;
    writeln!(out, "  Total interest:  {}", view.total_interest)?;
    Ok(())
}
