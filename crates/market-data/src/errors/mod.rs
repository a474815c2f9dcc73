//! Error types for the market data crate.
//!
//! Every variant is a fetch failure from the caller's point of view. The
//! detail carried here is meant for logs; callers decide what a user sees.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a rate table.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-2xx status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be parsed into a rate table.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    pub(crate) fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::HttpStatus {
            provider: "CURRENCY_API".to_string(),
            status: 503,
        };
        assert_eq!(format!("{}", error), "HTTP 503 from CURRENCY_API");

        let error = MarketDataError::Timeout {
            provider: "CURRENCY_API".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: CURRENCY_API");

        let error = MarketDataError::malformed("CURRENCY_API", "missing field `usd`");
        assert_eq!(
            format!("{}", error),
            "Malformed response from CURRENCY_API: missing field `usd`"
        );
    }
}
