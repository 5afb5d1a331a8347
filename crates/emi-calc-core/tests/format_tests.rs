use emi_calc_core::format::{format_currency, format_number};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Currency formatting
// ===========================================================================

#[test]
fn test_currency_symbol_and_grouping() {
    assert_eq!(format_currency(dec!(1_000_000)), "₹10,00,000.00");
    assert_eq!(format_currency(dec!(10_000_000)), "₹1,00,00,000.00");
}

#[test]
fn test_currency_grouping_boundaries() {
    assert_eq!(format_currency(dec!(999)), "₹999.00");
    assert_eq!(format_currency(dec!(1_000)), "₹1,000.00");
    assert_eq!(format_currency(dec!(99_999)), "₹99,999.00");
    assert_eq!(format_currency(dec!(100_000)), "₹1,00,000.00");
}

#[test]
fn test_currency_accepts_zero() {
    assert_eq!(format_currency(dec!(0)), "₹0.00");
}

#[test]
fn test_currency_non_integer_values() {
    assert_eq!(format_currency(dec!(10018.974298)), "₹10,018.97");
    assert_eq!(format_currency(dec!(8333.335)), "₹8,333.34");
}

#[test]
fn test_currency_negative_values() {
    assert_eq!(format_currency(dec!(-101_138.46)), "-₹1,01,138.46");
}

#[test]
fn test_currency_is_deterministic() {
    let value = dec!(601_138.457869);
    assert_eq!(format_currency(value), format_currency(value));
}

// ===========================================================================
// Plain number formatting
// ===========================================================================

#[test]
fn test_number_at_most_one_fraction_digit() {
    assert_eq!(format_number(dec!(7.5)), "7.5");
    assert_eq!(format_number(dec!(7.46)), "7.5");
    assert_eq!(format_number(dec!(7.44)), "7.4");
}

#[test]
fn test_number_trims_trailing_zeros() {
    assert_eq!(format_number(dec!(60)), "60");
    assert_eq!(format_number(dec!(60.0)), "60");
    assert_eq!(format_number(dec!(0)), "0");
}

#[test]
fn test_number_grouping() {
    assert_eq!(format_number(dec!(500_000)), "5,00,000");
    assert_eq!(format_number(dec!(1_234_567.89)), "12,34,567.9");
}

#[test]
fn test_number_negative_values() {
    assert_eq!(format_number(dec!(-2.5)), "-2.5");
}
