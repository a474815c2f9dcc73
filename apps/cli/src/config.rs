use std::time::Duration;

use usdconv_market_data::DEFAULT_RATES_URL;

pub struct Config {
    pub rates_url: String,
    pub request_timeout: Duration,
    pub preferred_currency: Option<String>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let rates_url =
            std::env::var("USDCONV_RATES_URL").unwrap_or_else(|_| DEFAULT_RATES_URL.to_string());
        let timeout_ms: u64 = std::env::var("USDCONV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let preferred_currency = std::env::var("USDCONV_PREFERRED_CURRENCY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let log_format = std::env::var("USDCONV_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            rates_url,
            request_timeout: Duration::from_millis(timeout_ms),
            preferred_currency,
            log_format,
        }
    }
}
