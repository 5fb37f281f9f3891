//! Error types for the `stockalyzer` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, StockError>`.
//!
//! [`StockError`] covers:
//! - **Window errors**: Market closed, unsupported bucket, too few candles
//! - **API errors**: Structured `{"error": ...}` responses from Finnhub
//! - **Rate limiting**: HTTP 429 from the provider
//! - **HTTP status errors**: Unexpected status codes with response body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **Malformed responses**: Candle arrays that do not line up
//! - **JSON errors**: Deserialization and chart serialization failures
//! - **Configuration errors**: Unreadable or malformed TOML
//! - **Invalid arguments**: Client-side validation errors

use std::fmt;

use crate::constants::rate_limits;
use crate::window::WindowError;

/// Error response returned by the Finnhub API.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description (e.g. "Invalid API key").
    #[serde(default)]
    pub error: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error.as_deref().unwrap_or("No message"))
    }
}

/// All possible errors produced by `stockalyzer`.
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    /// A chart window could not be computed.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// An error response returned by the Finnhub REST API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The provider rejected the request because of its rate limit.
    #[error(
        "rate limited by provider (free tier allows {} calls/min, {} calls/s): {}",
        rate_limits::PER_MINUTE,
        rate_limits::PER_SECOND,
        .body
    )]
    RateLimited {
        /// The response body text.
        body: String,
    },

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a payload that does not hold together.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Failed to (de)serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Reading a config file or writing a chart failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StockError {
    /// `true` when the request targeted a weekend, which is expected and
    /// user-actionable rather than a defect.
    pub fn is_market_closed(&self) -> bool {
        matches!(self, Self::Window(WindowError::WeekendMarketClosed { .. }))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockError>;
