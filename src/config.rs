//! Configuration loaded from TOML.
//!
//! ```toml
//! [general]
//! market_hours = [8, 22]
//! chart_size = [1024, 400]
//! timezone = "Europe/Berlin"
//!
//! [finnhub]
//! token = "your-api-token"
//! ```
//!
//! Every field has a default, so a partial file (or none at all) is valid.
//! The `FINNHUB_TOKEN` environment variable overrides `finnhub.token`.

use std::fs;
use std::io;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::client::FinnhubClient;
use crate::constants::{
    API_BASE_URL, CHART_HEIGHT, CHART_WIDTH, MARKET_TIMEZONE, SESSION_CLOSE_HOUR,
    SESSION_OPEN_HOUR, TOKEN_ENV_VAR,
};
use crate::error::{Result, StockError};
use crate::window::{DateRangeResolver, SessionHours};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub finnhub: FinnhubConfig,
}

/// Market session, chart and timezone settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Session `[open, close]` hours in market-local time.
    pub market_hours: [u32; 2],
    /// Chart `[width, height]` in pixels.
    pub chart_size: [u32; 2],
    /// IANA timezone of the exchange, e.g. `"America/New_York"`.
    pub timezone: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            market_hours: [SESSION_OPEN_HOUR, SESSION_CLOSE_HOUR],
            chart_size: [CHART_WIDTH, CHART_HEIGHT],
            timezone: MARKET_TIMEZONE.to_owned(),
        }
    }
}

/// Provider credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinnhubConfig {
    pub token: String,
    pub base_url: String,
}

impl Default for FinnhubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: API_BASE_URL.to_owned(),
        }
    }
}

impl Config {
    /// Load configuration from a file path, then apply environment
    /// overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;
        config.apply_env();
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    /// Load `./config.toml`, see [`Config::load_or_default`].
    pub fn load_default() -> Result<Self> {
        Self::load_or_default("config.toml")
    }

    /// Load `path`, falling back to defaults (plus environment overrides)
    /// only when the file does not exist.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read or parsed is reported, not
    /// replaced with defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(StockError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.as_ref().display(), "no config file, using defaults");
                let mut config = Self::default();
                config.apply_env();
                Ok(config)
            }
            other => other,
        }
    }

    /// Parse configuration from TOML text without touching the environment.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                self.finnhub.token = token;
            }
        }
    }

    /// Validated trading session bounds.
    pub fn session_hours(&self) -> Result<SessionHours> {
        let [open, close] = self.general.market_hours;
        Ok(SessionHours::from_hours(open, close)?)
    }

    /// Range resolver using the configured session.
    pub fn resolver(&self) -> Result<DateRangeResolver> {
        Ok(DateRangeResolver::new(self.session_hours()?))
    }

    /// Chart `(width, height)`.
    pub fn chart_size(&self) -> (u32, u32) {
        let [width, height] = self.general.chart_size;
        (width, height)
    }

    /// Parsed market timezone.
    pub fn timezone(&self) -> Result<Tz> {
        self.general.timezone.parse::<Tz>().map_err(|_| {
            StockError::InvalidArgument(format!("unknown timezone {:?}", self.general.timezone))
        })
    }

    /// Build a client from the provider section and timezone.
    pub fn client(&self) -> Result<FinnhubClient> {
        if self.finnhub.token.is_empty() {
            return Err(StockError::InvalidArgument(format!(
                "no Finnhub token configured (set finnhub.token or {TOKEN_ENV_VAR})"
            )));
        }
        Ok(FinnhubClient::with_base_url(&self.finnhub.token, &self.finnhub.base_url)?
            .with_timezone(self.timezone()?))
    }
}
