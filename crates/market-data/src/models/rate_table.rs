use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::CurrencyCode;

/// Mapping from currency code to the number of target-currency units per 1
/// unit of the base currency.
///
/// Codes are stored lowercase. The order in which codes were received is
/// kept, so "the first currency" is well defined regardless of how the map
/// is hashed. Only positive rates are ever stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateTable {
    /// Codes in received order
    order: Vec<CurrencyCode>,
    rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(code, rate)` pairs, keeping their order.
    ///
    /// Non-positive rates are skipped. A repeated code keeps its first
    /// position and takes the last rate.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (code, rate) in entries {
            table.insert(code.as_ref(), rate);
        }
        table
    }

    /// Inserts a rate. Returns `false` (and stores nothing) when the rate is
    /// not positive or the code is blank.
    pub fn insert(&mut self, code: &str, rate: Decimal) -> bool {
        let code = normalize_code(code);
        if code.is_empty() || rate <= Decimal::ZERO {
            return false;
        }
        if self.rates.insert(code.clone(), rate).is_none() {
            self.order.push(code);
        }
        true
    }

    /// Looks up the rate for a code, ignoring case and surrounding whitespace.
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&normalize_code(code)).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The first code in received order.
    pub fn first_code(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Codes in received order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Codes sorted alphabetically, for display in a selector.
    pub fn sorted_codes(&self) -> Vec<CurrencyCode> {
        let mut codes = self.order.clone();
        codes.sort_unstable();
        codes
    }
}

pub(crate) fn normalize_code(code: &str) -> CurrencyCode {
    code.trim().to_ascii_lowercase()
}
