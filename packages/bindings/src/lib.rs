use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use emi_calc_core::emi::{self, EmiInput};
use emi_calc_core::format;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn to_decimal(value: f64, field: &str) -> NapiResult<Decimal> {
    Decimal::try_from(value).map_err(|e| to_napi_error(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Full envelope calculation over a JSON `EmiInput` document.
#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: EmiInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Raw engine triple for drop-in use from a browser UI: three numbers
/// in, `{emi, total_payment, total_interest}` out.
#[napi]
pub fn emi_breakdown(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: i32,
) -> NapiResult<String> {
    let principal = to_decimal(principal, "principal")?;
    let rate = to_decimal(annual_rate_percent, "annual_rate_percent")?;
    let breakdown = emi::compute(principal, rate, i64::from(tenure_months));
    serde_json::to_string(&breakdown).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// ₹ currency string with Indian digit grouping and two fraction digits.
#[napi]
pub fn format_currency(value: f64) -> NapiResult<String> {
    Ok(format::format_currency(to_decimal(value, "value")?))
}

/// Plain number string with Indian digit grouping and at most one
/// fraction digit.
#[napi]
pub fn format_number(value: f64) -> NapiResult<String> {
    Ok(format::format_number(to_decimal(value, "value")?))
}
