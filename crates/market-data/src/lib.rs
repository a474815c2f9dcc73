//! USD rate table fetching for the usdconv workspace.
//!
//! This crate owns everything between the remote rate source and the
//! in-memory [`RateTable`]:
//!
//! - The [`RateProvider`] trait, the seam the conversion view fetches through
//! - [`CurrencyApiProvider`], the CDN-hosted Currency API implementation
//! - Wire parsing ([`parse_rates_body`]) into a [`RatesSnapshot`]
//! - [`MarketDataError`], the error type for every fetch failure
//!
//! # Architecture
//!
//! ```text
//! +------------------+     GET usd.json     +------------------+
//! |   RateProvider   | -------------------> |   Currency API   |
//! +------------------+                      +------------------+
//!          |
//!          v
//! +------------------+
//! | parse_rates_body |  (drop invalid entries, keep received order)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  RatesSnapshot   |  (RateTable + as-of date)
//! +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CurrencyCode, ProviderId, RateTable, RatesSnapshot};
pub use provider::currency_api::{parse_rates_body, CurrencyApiProvider, DEFAULT_RATES_URL};
pub use provider::RateProvider;
