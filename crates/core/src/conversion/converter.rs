use std::str::FromStr;

use rust_decimal::Decimal;
use usdconv_market_data::RateTable;

use super::conversion_errors::{ConversionError, ValidationError};
use super::conversion_model::{ConversionRequest, ConversionResult};

/// Parses a user-entered amount.
///
/// Accepts plain decimals (`"10"`, `"0.5"`, `" 12.75 "`) and scientific
/// notation (`"1e3"`). Rejects empty input, anything non-numeric (including
/// `NaN` and `Infinity`), zero and negative values, and values too large or
/// too small for a `Decimal`.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let numeric_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !numeric_chars {
        return Err(ValidationError::NotANumber(text.to_string()));
    }

    let amount = match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(amount) => amount,
        // Still a number, just outside what a Decimal can hold.
        Err(_) => match text.parse::<f64>() {
            Ok(value) if value > 0.0 => {
                return Err(ValidationError::OutOfRange(text.to_string()))
            }
            Ok(_) => return Err(ValidationError::NotPositive(text.to_string())),
            Err(_) => return Err(ValidationError::NotANumber(text.to_string())),
        },
    };

    // Positive input whose digits all fell below Decimal precision.
    if amount.is_zero() && !text.starts_with('-') && has_nonzero_mantissa(text) {
        return Err(ValidationError::OutOfRange(text.to_string()));
    }
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(text.to_string()));
    }
    Ok(amount)
}

fn has_nonzero_mantissa(text: &str) -> bool {
    text.split(|c: char| c == 'e' || c == 'E')
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

/// Converts a USD amount into the requested currency.
///
/// The amount is validated before the rate is looked up, so a bad amount is
/// reported even when the currency is unknown. Never touches `rates`.
pub fn convert(
    rates: &RateTable,
    request: &ConversionRequest,
) -> Result<ConversionResult, ConversionError> {
    let amount = parse_amount(&request.amount)?;

    let currency = request.target_currency.trim().to_ascii_lowercase();
    let rate = rates
        .get(&currency)
        .ok_or_else(|| ConversionError::MissingRate(currency.clone()))?;

    let converted_amount = amount
        .checked_mul(rate)
        .ok_or_else(|| ValidationError::OutOfRange(request.amount.trim().to_string()))?;

    Ok(ConversionResult {
        amount,
        currency,
        rate,
        converted_amount,
    })
}
