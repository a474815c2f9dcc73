use super::rate_table::RateTable;
use super::types::{CurrencyCode, ProviderId};

/// One successfully fetched rate table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatesSnapshot {
    /// Base currency the rates are quoted against (e.g. "usd")
    pub base: CurrencyCode,

    /// Rates per 1 unit of `base`
    pub rates: RateTable,

    /// As-of date exactly as published by the source, if any
    pub last_updated: Option<String>,

    /// Provider that produced the snapshot
    pub source: ProviderId,
}

impl RatesSnapshot {
    pub fn new(
        base: impl Into<CurrencyCode>,
        rates: RateTable,
        source: impl Into<ProviderId>,
    ) -> Self {
        Self {
            base: base.into(),
            rates,
            last_updated: None,
            source: source.into(),
        }
    }

    /// Set the as-of date.
    pub fn with_last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = Some(date.into());
        self
    }
}
