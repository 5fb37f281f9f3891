//! Core HTTP client for the Finnhub REST API.
//!
//! The [`FinnhubClient`] struct is the entry point for every provider call.
//! It wraps [`reqwest::Client`] with the token header, builds query strings
//! with [`url::Url`], and maps provider failures onto [`StockError`].
//!
//! Endpoint methods are added to `FinnhubClient` via `impl` blocks in the
//! [`crate::api`] module.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::{API_BASE_URL, TOKEN_HEADER};
use crate::error::{ApiErrorBody, Result, StockError};

/// Core HTTP client for the Finnhub REST API.
///
/// Also owns the market timezone used to translate between the provider's
/// unix timestamps and the market-local wall-clock times the chart window
/// engine works in.
///
/// # Example
///
/// ```no_run
/// use stockalyzer::client::FinnhubClient;
///
/// # #[tokio::main]
/// # async fn main() -> stockalyzer::error::Result<()> {
/// let client = FinnhubClient::new("your-api-token")?;
/// let quote = client.fetch_quote("AAPL").await?;
/// println!("{}", quote.current);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    http: reqwest::Client,
    token: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Timezone of the exchange the symbols trade on.
    timezone: Tz,
    /// Pre-built token header value.
    auth_header_token: HeaderValue,
}

impl FinnhubClient {
    /// Create a new `FinnhubClient` with the given API token.
    ///
    /// Uses the default API base URL (`https://finnhub.io/api/v1`) and UTC.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a new `FinnhubClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        let token = token.into();
        let auth_header_token = Self::token_header(&token)?;

        Ok(Self {
            http,
            token,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            timezone: Tz::UTC,
            auth_header_token,
        })
    }

    /// Set the market timezone used for timestamp conversion.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the current API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the API token.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.auth_header_token = Self::token_header(&token)?;
        self.token = token;
        Ok(())
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the market timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    // -----------------------------------------------------------------------
    // Time conversion
    // -----------------------------------------------------------------------

    /// Market-local wall-clock time → unix seconds.
    ///
    /// Ambiguous local times (DST fall-back) take the earlier instant; times
    /// skipped by a DST jump are read as UTC.
    pub fn to_unix(&self, local: NaiveDateTime) -> i64 {
        self.timezone
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.timestamp())
            .unwrap_or_else(|| local.and_utc().timestamp())
    }

    /// Unix seconds → market-local wall-clock time.
    pub fn from_unix(&self, secs: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp(secs, 0).map(|dt| dt.with_timezone(&self.timezone).naive_local())
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request with query parameters and deserialize the JSON
    /// response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<R> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .headers(self.auth_headers())
            .send()
            .await?;

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment and query pairs.
    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let raw = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Ok(Url::parse_with_params(&raw, query)?)
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn token_header(token: &str) -> Result<HeaderValue> {
        HeaderValue::from_str(token).map_err(|_| {
            StockError::InvalidArgument("API token contains invalid header characters".into())
        })
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(TOKEN_HEADER, self.auth_header_token.clone());
        headers
    }

    /// Read a response, returning either the deserialized body or a
    /// `StockError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(StockError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Map a non-success response onto the most specific error.
    pub(crate) fn parse_error_body(&self, status: StatusCode, body: &str) -> StockError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(%status, "provider rate limit hit");
            return StockError::RateLimited {
                body: body.to_owned(),
            };
        }
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.error.is_some() {
                return StockError::Api(api_err);
            }
        }
        StockError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
