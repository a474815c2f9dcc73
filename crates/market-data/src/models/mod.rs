//! Rate data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, CurrencyCode)
//! - `rate_table` - Ordered currency code to rate mapping (RateTable)
//! - `snapshot` - One fetched table plus its as-of date (RatesSnapshot)

mod rate_table;
mod snapshot;
mod types;

pub use rate_table::RateTable;
pub use snapshot::RatesSnapshot;
pub use types::{CurrencyCode, ProviderId};
