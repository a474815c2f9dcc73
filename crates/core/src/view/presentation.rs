//! Rendering of a [`ViewState`] into a toolkit-free [`Screen`].

use std::fmt;

use serde::Serialize;

use super::format::{format_amount, format_as_of_date};
use super::view_state::{FetchState, ViewState};
use crate::constants::{BASE_CURRENCY, LOADING_MESSAGE};

pub const TITLE: &str = "USD Currency Converter";
const CONVERT_LABEL: &str = "Convert";
const LOADING_LABEL: &str = "Loading rates...";

/// Everything a host needs to draw the view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub title: &'static str,
    pub amount_input: AmountInput,
    pub currency_selector: CurrencySelector,
    pub submit: SubmitButton,
    /// Status and result blocks, in display priority order
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountInput {
    pub value: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySelector {
    /// Alphabetical, empty until rates are ready
    pub options: Vec<CurrencyOption>,
    pub selected: Option<String>,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    /// Lowercase code, the value submitted
    pub code: String,
    /// Uppercase code, the text shown
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Section {
    ValidationError { message: String },
    Loading { message: String },
    FetchError { message: String },
    Result(ResultCard),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    /// e.g. "10.00 USD"
    pub source_amount: String,
    /// e.g. "9.30 EUR"
    pub converted_amount: String,
    /// e.g. "1 USD = 0.93 EUR"
    pub unit_rate: String,
    /// e.g. "Rates updated on October 17, 2026"
    pub as_of: Option<String>,
}

/// Renders the view.
///
/// Sections appear as: validation error, loading indicator, fetch error,
/// result card. The result card is left out while the fetch is in error.
pub fn render(state: &ViewState) -> Screen {
    let fetch = state.fetch();
    let loading = fetch.is_loading();
    let base = BASE_CURRENCY.to_ascii_uppercase();

    let options: Vec<CurrencyOption> = fetch
        .rates()
        .map(|rates| {
            rates
                .sorted_codes()
                .into_iter()
                .map(|code| CurrencyOption {
                    label: code.to_ascii_uppercase(),
                    code,
                })
                .collect()
        })
        .unwrap_or_default();

    let mut sections = Vec::new();
    if let Some(error) = state.validation_error() {
        sections.push(Section::ValidationError {
            message: error.user_message().to_string(),
        });
    }
    if loading {
        sections.push(Section::Loading {
            message: LOADING_MESSAGE.to_string(),
        });
    }
    let fetch_failed = matches!(fetch, FetchState::Error(_));
    if let FetchState::Error(message) = fetch {
        sections.push(Section::FetchError {
            message: message.clone(),
        });
    }
    if let Some(result) = state.result().filter(|_| !fetch_failed) {
        let code = result.currency.to_ascii_uppercase();
        sections.push(Section::Result(ResultCard {
            source_amount: format!("{} {}", format_amount(result.amount), base),
            converted_amount: format!("{} {}", format_amount(result.converted_amount), code),
            unit_rate: format!("1 {} = {} {}", base, format_amount(result.rate), code),
            as_of: fetch
                .last_updated()
                .map(|date| format!("Rates updated on {}", format_as_of_date(date))),
        }));
    }

    Screen {
        title: TITLE,
        amount_input: AmountInput {
            value: state.amount().to_string(),
            enabled: !loading,
        },
        currency_selector: CurrencySelector {
            enabled: !loading && !options.is_empty(),
            options,
            selected: state.selected_currency().map(str::to_string),
        },
        submit: SubmitButton {
            label: if loading { LOADING_LABEL } else { CONVERT_LABEL },
            enabled: !loading && state.selected_currency().is_some(),
        },
        sections,
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Amount in USD: {}", self.amount_input.value)?;

        let selected = self
            .currency_selector
            .selected
            .as_deref()
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "Convert to: {} ({} currencies)",
            selected,
            self.currency_selector.options.len()
        )?;
        writeln!(f, "[{}]", self.submit.label)?;

        for section in &self.sections {
            match section {
                Section::ValidationError { message } => writeln!(f, "! {}", message)?,
                Section::Loading { message } => writeln!(f, "{}", message)?,
                Section::FetchError { message } => writeln!(f, "Error: {}", message)?,
                Section::Result(card) => {
                    writeln!(f, "Converted amount: {}", card.converted_amount)?;
                    writeln!(f, "  {} = {}", card.source_amount, card.converted_amount)?;
                    writeln!(f, "  {}", card.unit_rate)?;
                    if let Some(as_of) = &card.as_of {
                        writeln!(f, "  {}", as_of)?;
                    }
                }
            }
        }
        Ok(())
    }
}
