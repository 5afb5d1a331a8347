use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::EmiCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate_percent: Rate,
    pub tenure_months: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl EmiBreakdown {
    fn zero() -> Self {
        Self {
            emi: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Monthly rate as a decimal fraction: 7.5 (%/year) becomes 0.00625.
pub fn monthly_rate(annual_rate_percent: Rate) -> Rate {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT
}

/// Equated monthly installment for a fully amortizing loan.
///
/// EMI = P × r × (1 + r)^n / [(1 + r)^n - 1], with r the monthly rate
/// and n the tenure in months. Total over its numeric domain: a non-positive
/// tenure yields the all-zero breakdown, a zero rate falls back to
/// linear amortization (P / n), and out-of-range principal or rate flow
/// through the arithmetic unchanged. Callers own any input-range policy.
pub fn compute(principal: Money, annual_rate_percent: Rate, tenure_months: i64) -> EmiBreakdown {
    if tenure_months <= 0 {
        return EmiBreakdown::zero();
    }

    let months = Decimal::from(tenure_months);
    let r = monthly_rate(annual_rate_percent);

    if r.is_zero() {
        return linear_amortization(principal, months);
    }

    let growth = (Decimal::ONE + r).checked_powd(months);
    match growth {
        // Rate too small to move the power term at Decimal precision.
        Some(g) if g == Decimal::ONE => linear_amortization(principal, months),
        Some(g) => {
            let emi = principal * r * g / (g - Decimal::ONE);
            let total_payment = emi * months;
            EmiBreakdown {
                emi,
                total_payment,
                total_interest: total_payment - principal,
            }
        }
        // Power term overflowed Decimal range; the annuity factor limit is r.
        None => {
            let emi = principal * r;
            let total_payment = emi * months;
            EmiBreakdown {
                emi,
                total_payment,
                total_interest: total_payment - principal,
            }
        }
    }
}

/// Envelope wrapper around [`compute`] with warnings for degenerate input.
///
/// Never fails for numeric input: the engine is deliberately permissive,
/// and range issues surface as warnings rather than errors.
pub fn calculate_emi(input: &EmiInput) -> EmiCalcResult<ComputationOutput<EmiBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.tenure_months <= 0 {
        warnings.push("Tenure is non-positive; returning the all-zero breakdown.".into());
    }
    if input.principal <= Decimal::ZERO {
        warnings.push(
            "Principal is non-positive; the result is arithmetically consistent but unlikely to be meaningful.".into(),
        );
    }
    if input.annual_rate_percent < Decimal::ZERO {
        warnings.push("Annual rate is negative; the installment falls below linear amortization.".into());
    }

    let result = compute(input.principal, input.annual_rate_percent, input.tenure_months);

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rate_compounding": "monthly (annual % / 12 / 100)",
        "degenerate_tenure": "tenure <= 0 yields the all-zero breakdown",
        "rounding": "none; formatting is a presentation concern"
    });

    Ok(with_metadata(
        "Equated Monthly Installment (reducing-balance amortization)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn linear_amortization(principal: Money, months: Decimal) -> EmiBreakdown {
    EmiBreakdown {
        emi: principal / months,
        total_payment: principal,
        total_interest: Decimal::ZERO,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
