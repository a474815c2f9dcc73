//! Display formatting for amounts, rates and the as-of date.
//!
//! Numbers follow en-US conventions: `,` groups thousands, `.` separates
//! fractions, between 2 and 4 fraction digits, halves rounded away from
//! zero. Formatting works on `Decimal`, so no binary-float artifacts reach
//! the screen.

use chrono::{DateTime, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_MAX_FRACTION_DIGITS, DISPLAY_MIN_FRACTION_DIGITS};

/// Formats an amount or rate for display, e.g. `9.30`, `1,234.5678`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(
            DISPLAY_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    // Padded as text: near Decimal::MAX there is no room to rescale.
    let min_digits = DISPLAY_MIN_FRACTION_DIGITS as usize;
    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + min_digits);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    for _ in frac_part.len()..min_digits {
        out.push('0');
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats the source's as-of date as a long date ("October 17, 2026").
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Anything else is shown
/// as published.
pub fn format_as_of_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
