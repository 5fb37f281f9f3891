//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`FinnhubClient`](crate::client::FinnhubClient) via `impl` blocks. All
//! methods handle query encoding, HTTP transport, and error mapping
//! automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use stockalyzer::FinnhubClient;
//!
//! # #[tokio::main]
//! # async fn main() -> stockalyzer::Result<()> {
//! let client = FinnhubClient::new("token")?;
//! let profile = client.fetch_profile("AAPL").await?;
//! let quote = client.fetch_quote("AAPL").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`profile`] | 1 | Company profile |
//! | [`quote`] | 1 | Real-time quote |
//! | [`candles`] | 1 | OHLCV candles, bucket-driven chart fetch |

pub mod candles;
pub mod profile;
pub mod quote;
