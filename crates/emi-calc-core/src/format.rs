use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Fixed display currency. Not runtime-configurable.
const CURRENCY_SYMBOL: &str = "₹";

/// Render a monetary value: `₹` symbol, Indian digit grouping, and a
/// fixed two fraction digits (`₹5,00,000.00`). Never panics.
pub fn format_currency(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();
    let text = format!("{magnitude:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!(
        "{}{}{}.{}",
        sign_prefix(rounded),
        CURRENCY_SYMBOL,
        group_indian(int_part),
        frac_part
    )
}

/// Render a plain number: Indian digit grouping, at most one fraction
/// digit, trailing zeros trimmed (`7.5`, `60`). Never panics.
pub fn format_number(value: Money) -> String {
    let rounded = value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let magnitude = rounded.abs();
    let text = magnitude.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!(
            "{}{}.{}",
            sign_prefix(rounded),
            group_indian(int_part),
            frac_part
        ),
        None => format!("{}{}", sign_prefix(rounded), group_indian(&text)),
    }
}

fn sign_prefix(value: Decimal) -> &'static str {
    if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    }
}

/// South Asian grouping: the last three digits form one group, the rest
/// split into groups of two (`10,00,000`).
fn group_indian(integer_digits: &str) -> String {
    if integer_digits.len() <= 3 {
        return integer_digits.to_string();
    }

    let (head, tail) = integer_digits.split_at(integer_digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}
