//! View module - state machine, rate loading and rendering.

pub mod format;
mod presentation;
mod rate_view;
mod view_state;

pub use presentation::{
    render, AmountInput, CurrencyOption, CurrencySelector, ResultCard, Screen, Section,
    SubmitButton, TITLE,
};
pub use rate_view::RateConversionView;
pub use view_state::{FetchState, SubmitOutcome, ViewState};
