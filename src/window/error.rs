use chrono::{NaiveDate, NaiveDateTime};

/// Failures of the chart window engine.
///
/// These are pure-computation errors: retrying with the same inputs always
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The requested window lies entirely on a Saturday or Sunday.
    #[error("stock market is closed on weekends ({date})")]
    WeekendMarketClosed { date: NaiveDate },

    /// A bucket code outside the supported set.
    #[error("unsupported chart duration: {0:?}")]
    UnsupportedBucket(String),

    /// Boundary detection needs at least one adjacent pair of timestamps.
    #[error("cannot derive axis ticks from {len} timestamp(s), need at least 2")]
    EmptySeries { len: usize },

    /// Session open is not strictly before session close, or an hour is out
    /// of range.
    #[error("invalid trading session: {0}")]
    InvalidSession(String),

    /// A literal range whose start is not before its end.
    #[error("invalid date range {from} .. {to}")]
    InvalidRange { from: NaiveDateTime, to: NaiveDateTime },
}
