//! # stockalyzer
//!
//! Historical price charts for ticker symbols, backed by the
//! [Finnhub](https://finnhub.io/docs/api) REST API.
//!
//! The heart of the crate is the [`window`] engine, which decides which
//! calendar range and sampling resolution a chart duration maps to (counting
//! trading days, not calendar days) and where axis ticks and gridlines fall.
//! [`FinnhubClient`] fetches profiles, quotes and candles; [`chart`] and
//! [`report`] turn a fetched series into a chart document and a performance
//! summary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stockalyzer::chart::{Chart, ChartRenderer, JsonRenderer};
//! use stockalyzer::window::{DateRangeResolver, DurationBucket};
//! use stockalyzer::FinnhubClient;
//!
//! #[tokio::main]
//! async fn main() -> stockalyzer::Result<()> {
//!     let client = FinnhubClient::new("your-api-token")?;
//!     let now = chrono::Local::now().naive_local();
//!     let (_, series) = client
//!         .fetch_chart_series("AAPL", DurationBucket::M3, now, &DateRangeResolver::default())
//!         .await?;
//!     let chart = Chart::build("AAPL", &series, DurationBucket::M3, (1024, 400))?;
//!     JsonRenderer { pretty: true }.render(&chart, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod types;
pub mod window;

/// Re-export the main client type at crate root for convenience.
pub use client::FinnhubClient;
/// Re-export the error type and Result alias.
pub use error::{Result, StockError};
