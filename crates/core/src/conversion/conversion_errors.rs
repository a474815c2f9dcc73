use thiserror::Error;
use usdconv_market_data::CurrencyCode;

use crate::constants::INVALID_AMOUNT_MESSAGE;

/// Reasons an amount entered by the user is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is empty")]
    EmptyAmount,

    #[error("Amount '{0}' is not a number")]
    NotANumber(String),

    #[error("Amount '{0}' must be greater than zero")]
    NotPositive(String),

    #[error("Amount '{0}' is too large to convert")]
    OutOfRange(String),
}

impl ValidationError {
    /// Message shown next to the amount input. The same for every variant.
    pub fn user_message(&self) -> &'static str {
        INVALID_AMOUNT_MESSAGE
    }
}

/// Errors from a single conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The target currency has no rate, including when no table is loaded yet.
    #[error("No rate for currency '{0}'")]
    MissingRate(CurrencyCode),
}
