//! Constants for the Finnhub API and chart defaults.
//!
//! These are used internally by [`FinnhubClient`](crate::client::FinnhubClient)
//! and [`Config`](crate::config::Config), but are also exported for advanced
//! usage.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the Finnhub REST API v1.
pub const API_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "x-finnhub-token";

/// Environment variable that overrides the configured API token.
pub const TOKEN_ENV_VAR: &str = "FINNHUB_TOKEN";

// ---------------------------------------------------------------------------
// Chart defaults
// ---------------------------------------------------------------------------

/// Default session open hour (market-local).
pub const SESSION_OPEN_HOUR: u32 = 8;

/// Default session close hour (market-local).
pub const SESSION_CLOSE_HOUR: u32 = 22;

/// Default chart width in pixels.
pub const CHART_WIDTH: u32 = 1024;

/// Default chart height in pixels.
pub const CHART_HEIGHT: u32 = 400;

/// Default market timezone for converting provider timestamps.
pub const MARKET_TIMEZONE: &str = "UTC";

// ---------------------------------------------------------------------------
// Rate Limits
// ---------------------------------------------------------------------------

/// Rate limit configuration for the free Finnhub tier.
pub mod rate_limits {
    /// Maximum API calls per minute.
    pub const PER_MINUTE: u32 = 60;
    /// Maximum API calls per second.
    pub const PER_SECOND: u32 = 30;
}
