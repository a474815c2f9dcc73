use usdconv_market_data::CurrencyCode;

use crate::constants::DEFAULT_AMOUNT;
use crate::errors::{Error, Result};

/// Settings for one conversion view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    /// Selected by default when the loaded table contains it
    pub preferred_currency: Option<CurrencyCode>,

    /// Text pre-filled in the amount input
    pub initial_amount: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            preferred_currency: None,
            initial_amount: DEFAULT_AMOUNT.to_string(),
        }
    }
}

impl ViewSettings {
    /// Sets the preferred currency. Codes are ASCII letters or digits and
    /// are stored lowercase.
    pub fn with_preferred_currency(mut self, code: &str) -> Result<Self> {
        let code = code.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidConfigValue(format!(
                "preferred currency '{}' is not a currency code",
                code
            )));
        }
        self.preferred_currency = Some(code.to_ascii_lowercase());
        Ok(self)
    }

    pub fn with_initial_amount(mut self, amount: impl Into<String>) -> Self {
        self.initial_amount = amount.into();
        self
    }
}
