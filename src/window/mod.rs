//! Chart window engine.
//!
//! Everything here is pure and synchronous:
//!
//! - [`classify`]: literal date range → [`DurationBucket`]
//! - [`resolution_for`]: bucket → provider [`ResolutionKind`]
//! - [`DateRangeResolver::resolve`] / [`resolve`]: bucket + "now" →
//!   trading-day aware [`DateRange`]
//! - [`ticks`]: timestamps + bucket → [`TickMark`]s and [`GridLine`]s
//!
//! The bucket is always passed explicitly; no function reads state left by a
//! previous call.
//!
//! ```
//! use chrono::NaiveDate;
//! use stockalyzer::window::{self, DurationBucket, ResolutionKind};
//!
//! let now = NaiveDate::from_ymd_opt(2020, 3, 7).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let range = window::resolve(DurationBucket::Intraday, now)?;
//! assert_eq!(range.from.date(), NaiveDate::from_ymd_opt(2020, 3, 6).unwrap());
//! assert_eq!(window::resolution_for(DurationBucket::Max), ResolutionKind::Weekly);
//! # Ok::<(), stockalyzer::window::WindowError>(())
//! ```

mod axis;
mod bucket;
mod error;
mod range;
mod resolution;

pub use axis::{GridLine, TickMark, ticks};
pub use bucket::{DurationBucket, classify};
pub use error::WindowError;
pub use range::{DateRange, DateRangeResolver, SessionHours, is_weekend, resolve, trading_day_shift};
pub use resolution::{ResolutionKind, resolution_for};
