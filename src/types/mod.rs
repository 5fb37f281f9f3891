//! Request and response types for the Finnhub API.
//!
//! ## Organization
//!
//! - [`profile`]: Company profile
//! - [`quote`]: Real-time quote
//! - [`candles`]: OHLCV candle payloads and the ordered [`CandleSeries`]

pub mod candles;
pub mod profile;
pub mod quote;

pub use candles::{Candle, CandleResponse, CandleSeries};
pub use profile::CompanyProfile;
pub use quote::Quote;
