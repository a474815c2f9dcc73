//! Currency API response models.
//!
//! The daily `usd.json` document looks like:
//!
//! ```json
//! { "date": "2026-10-17", "usd": { "eur": 0.93, "jpy": 150.2 } }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response body of the `currencies/usd.json` endpoint
#[derive(Debug, Deserialize)]
pub struct CurrencyApiResponse {
    #[serde(default)]
    pub date: Option<String>,

    /// Rates keyed by lowercase code. Kept as raw values so a single bad
    /// entry does not reject the whole table.
    pub usd: Map<String, Value>,
}
