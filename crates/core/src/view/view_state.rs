use log::debug;
use serde::Serialize;
use usdconv_market_data::{CurrencyCode, RateTable, RatesSnapshot};

use crate::constants::RATES_UNAVAILABLE_MESSAGE;
use crate::conversion::{
    convert, ConversionError, ConversionRequest, ConversionResult, ValidationError,
};
use crate::settings::ViewSettings;

/// Lifecycle of the rate retrieval.
///
/// `Loading` moves to `Ready` or `Error` exactly once. Neither of those is
/// ever left again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready {
        rates: RateTable,
        last_updated: Option<String>,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded table, if any.
    pub fn rates(&self) -> Option<&RateTable> {
        match self {
            FetchState::Ready { rates, .. } => Some(rates),
            _ => None,
        }
    }

    pub fn last_updated(&self) -> Option<&str> {
        match self {
            FetchState::Ready { last_updated, .. } => last_updated.as_deref(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What a submit did to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// A fresh result was computed.
    Converted,
    /// The amount failed validation; any previous result is hidden.
    Rejected,
    /// The selected currency has no rate; any previous result is hidden.
    NoRate,
    /// Nothing is selected, so nothing happened.
    Ignored,
}

/// Complete state of one conversion view.
///
/// All fields change only through the transition methods below, which keep
/// a result present only while rates are ready and contain its currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    fetch: FetchState,
    amount: String,
    selected_currency: Option<CurrencyCode>,
    result: Option<ConversionResult>,
    validation_error: Option<ValidationError>,
}

impl ViewState {
    pub fn new(settings: &ViewSettings) -> Self {
        Self {
            fetch: FetchState::Loading,
            amount: settings.initial_amount.clone(),
            selected_currency: None,
            result: None,
            validation_error: None,
        }
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn selected_currency(&self) -> Option<&str> {
        self.selected_currency.as_deref()
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    /// `Loading -> Ready`. Returns `false` if the fetch had already finished.
    ///
    /// A currency chosen while loading is kept. Otherwise the preferred
    /// currency is selected when the table has it, else the first code in
    /// received order.
    pub fn rates_loaded(&mut self, snapshot: RatesSnapshot, settings: &ViewSettings) -> bool {
        if !self.fetch.is_loading() {
            return false;
        }

        if self.selected_currency.is_none() {
            self.selected_currency = settings
                .preferred_currency
                .as_deref()
                .filter(|code| snapshot.rates.contains(code))
                .or_else(|| snapshot.rates.first_code())
                .map(str::to_string);
        }
        debug!(
            "Rates ready: {} currencies, default selection {:?}",
            snapshot.rates.len(),
            self.selected_currency
        );

        self.fetch = FetchState::Ready {
            rates: snapshot.rates,
            last_updated: snapshot.last_updated,
        };
        true
    }

    /// `Loading -> Error`. Returns `false` if the fetch had already finished.
    pub fn rates_failed(&mut self) -> bool {
        if !self.fetch.is_loading() {
            return false;
        }
        self.fetch = FetchState::Error(RATES_UNAVAILABLE_MESSAGE.to_string());
        true
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    /// Selects a target currency. Blank input clears the selection.
    pub fn select_currency(&mut self, code: &str) {
        let code = code.trim().to_ascii_lowercase();
        self.selected_currency = if code.is_empty() { None } else { Some(code) };
    }

    /// Validates the current input and converts it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(code) = self.selected_currency.clone() else {
            return SubmitOutcome::Ignored;
        };

        let empty = RateTable::new();
        let rates = self.fetch.rates().unwrap_or(&empty);
        let request = ConversionRequest::new(self.amount.clone(), code);

        match convert(rates, &request) {
            Ok(result) => {
                self.validation_error = None;
                self.result = Some(result);
                SubmitOutcome::Converted
            }
            Err(ConversionError::Validation(e)) => {
                debug!("Rejected amount: {}", e);
                self.result = None;
                self.validation_error = Some(e);
                SubmitOutcome::Rejected
            }
            Err(ConversionError::MissingRate(code)) => {
                debug!("No rate for '{}', nothing to show", code);
                self.result = None;
                self.validation_error = None;
                SubmitOutcome::NoRate
            }
        }
    }
}
