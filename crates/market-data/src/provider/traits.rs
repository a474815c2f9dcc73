//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RatesSnapshot;

/// Trait for sources of a latest-rates table.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use usdconv_market_data::{MarketDataError, RateProvider, RateTable, RatesSnapshot};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl RateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_latest_rates(&self) -> Result<RatesSnapshot, MarketDataError> {
///         Ok(RatesSnapshot::new("usd", RateTable::new(), self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error detail.
    fn id(&self) -> &'static str;

    /// Fetch the latest rate table.
    ///
    /// Implementations perform exactly one request per call and never retry.
    async fn fetch_latest_rates(&self) -> Result<RatesSnapshot, MarketDataError>;
}
