use rust_decimal::Decimal;
use serde::Serialize;
use usdconv_market_data::CurrencyCode;

/// User input for one conversion. The amount stays as typed until
/// [`convert`](super::convert) parses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount: String,
    pub target_currency: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: impl Into<String>, target_currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount: amount.into(),
            target_currency: target_currency.into(),
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Parsed USD amount
    pub amount: Decimal,

    /// Lowercase target code
    pub currency: CurrencyCode,

    /// Target units per 1 USD used for this conversion
    pub rate: Decimal,

    /// `amount * rate`
    pub converted_amount: Decimal,
}
