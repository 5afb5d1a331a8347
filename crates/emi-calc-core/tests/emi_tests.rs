use emi_calc_core::emi::{calculate_emi, compute, monthly_rate, EmiInput};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TOLERANCE: Decimal = dec!(0.01);

// ===========================================================================
// Degenerate tenure policy
// ===========================================================================

#[test]
fn test_zero_tenure_yields_all_zero() {
    let b = compute(dec!(500_000), dec!(7.5), 0);
    assert_eq!(b.emi, Decimal::ZERO);
    assert_eq!(b.total_payment, Decimal::ZERO);
    assert_eq!(b.total_interest, Decimal::ZERO);
}

#[test]
fn test_negative_tenure_yields_all_zero() {
    let b = compute(dec!(500_000), dec!(7.5), -10);
    assert_eq!(b.emi, Decimal::ZERO);
    assert_eq!(b.total_payment, Decimal::ZERO);
    assert_eq!(b.total_interest, Decimal::ZERO);
}

// ===========================================================================
// Zero-rate branch
// ===========================================================================

#[test]
fn test_zero_rate_linear_amortization() {
    let b = compute(dec!(500_000), dec!(0), 60);
    assert!((b.emi - dec!(8333.33)).abs() < TOLERANCE);
    assert_eq!(b.total_payment, dec!(500_000));
    assert_eq!(b.total_interest, Decimal::ZERO);
}

#[test]
fn test_zero_rate_emi_is_principal_over_months() {
    let b = compute(dec!(120_000), dec!(0), 24);
    assert_eq!(b.emi, dec!(5_000));
    assert_eq!(b.total_payment, dec!(120_000));
}

// ===========================================================================
// Formula conformance
// ===========================================================================

#[test]
fn test_reference_scenario_five_lakh_five_years() {
    let b = compute(dec!(500_000), dec!(7.5), 60);
    assert!((b.emi - dec!(10_018.97)).abs() < TOLERANCE);
    assert!((b.total_payment - dec!(601_138.46)).abs() < TOLERANCE);
    assert!((b.total_interest - dec!(101_138.46)).abs() < TOLERANCE);
}

#[test]
fn test_reference_scenario_one_lakh_one_year() {
    let b = compute(dec!(100_000), dec!(12), 12);
    assert!((b.emi - dec!(8_884.88)).abs() < TOLERANCE);
}

#[test]
fn test_reference_scenario_ten_lakh_ten_years() {
    let b = compute(dec!(1_000_000), dec!(8.5), 120);
    assert!((b.emi - dec!(12_398.57)).abs() < TOLERANCE);
}

#[test]
fn test_single_installment_is_principal_plus_one_month_interest() {
    let b = compute(dec!(500_000), dec!(7.5), 1);
    assert_eq!(b.emi, dec!(503_125));
    assert_eq!(b.total_payment, b.emi);
    assert_eq!(b.total_interest, dec!(3_125));
}

// ===========================================================================
// Invariants
// ===========================================================================

#[test]
fn test_total_payment_equals_emi_times_months() {
    for (principal, rate, months) in [
        (dec!(500_000), dec!(7.5), 60_i64),
        (dec!(250_000), dec!(9), 36),
        (dec!(1_000_000), dec!(8.5), 120),
    ] {
        let b = compute(principal, rate, months);
        assert_eq!(b.total_payment, b.emi * Decimal::from(months));
    }
}

#[test]
fn test_total_interest_equals_total_payment_minus_principal() {
    for (principal, rate, months) in [
        (dec!(500_000), dec!(7.5), 60_i64),
        (dec!(250_000), dec!(9), 36),
    ] {
        let b = compute(principal, rate, months);
        assert_eq!(b.total_interest, b.total_payment - principal);
    }
}

// ===========================================================================
// Monotonicity
// ===========================================================================

#[test]
fn test_emi_increases_with_rate() {
    let low = compute(dec!(500_000), dec!(5), 60);
    let mid = compute(dec!(500_000), dec!(7.5), 60);
    let high = compute(dec!(500_000), dec!(10), 60);
    assert!(low.emi < mid.emi);
    assert!(mid.emi < high.emi);
}

#[test]
fn test_emi_increases_as_tenure_shrinks() {
    let long = compute(dec!(500_000), dec!(7.5), 60);
    let short = compute(dec!(500_000), dec!(7.5), 24);
    let single = compute(dec!(500_000), dec!(7.5), 1);
    assert!(short.emi > long.emi);
    assert!(single.emi > short.emi);
}

#[test]
fn test_total_interest_increases_with_tenure() {
    let short = compute(dec!(500_000), dec!(7.5), 24);
    let long = compute(dec!(500_000), dec!(7.5), 60);
    assert!(long.total_interest > short.total_interest);
}

#[test]
fn test_emi_increases_with_principal() {
    let small = compute(dec!(500_000), dec!(7.5), 60);
    let large = compute(dec!(750_000), dec!(7.5), 60);
    assert!(large.emi > small.emi);
}

// ===========================================================================
// Determinism and permissive pass-through
// ===========================================================================

#[test]
fn test_identical_inputs_identical_outputs() {
    let first = compute(dec!(500_000), dec!(7.5), 60);
    let second = compute(dec!(500_000), dec!(7.5), 60);
    assert_eq!(first, second);
}

#[test]
fn test_negative_principal_flows_through() {
    let b = compute(dec!(-500_000), dec!(7.5), 60);
    assert!(b.emi < Decimal::ZERO);
    assert_eq!(b.total_payment, b.emi * dec!(60));
    assert_eq!(b.total_interest, b.total_payment - dec!(-500_000));
}

#[test]
fn test_negative_rate_flows_through() {
    let b = compute(dec!(500_000), dec!(-3), 60);
    // Cheaper than the zero-rate installment, still a consistent breakdown.
    assert!(b.emi < dec!(500_000) / dec!(60));
    assert!(b.total_interest < Decimal::ZERO);
}

#[test]
fn test_monthly_rate_conversion() {
    assert_eq!(monthly_rate(dec!(7.5)), dec!(0.00625));
    assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
}

// ===========================================================================
// Envelope wrapper
// ===========================================================================

#[test]
fn test_envelope_clean_input_has_no_warnings() {
    let input = EmiInput {
        principal: dec!(500_000),
        annual_rate_percent: dec!(7.5),
        tenure_months: 60,
    };
    let output = calculate_emi(&input).unwrap();
    assert!(output.warnings.is_empty());
    assert!((output.result.emi - dec!(10_018.97)).abs() < TOLERANCE);
}

#[test]
fn test_envelope_degenerate_tenure_warns_not_errors() {
    let input = EmiInput {
        principal: dec!(500_000),
        annual_rate_percent: dec!(7.5),
        tenure_months: -10,
    };
    let output = calculate_emi(&input).unwrap();
    assert_eq!(output.result.emi, Decimal::ZERO);
    assert!(output.warnings.iter().any(|w| w.contains("Tenure")));
}

#[test]
fn test_envelope_serializes() {
    let input = EmiInput {
        principal: dec!(500_000),
        annual_rate_percent: dec!(7.5),
        tenure_months: 60,
    };
    let output = calculate_emi(&input).unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert!(value.get("result").is_some());
    assert!(value.get("methodology").is_some());
    assert!(value["result"].get("emi").is_some());
}
