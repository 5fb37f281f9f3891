//! Resolution of a duration bucket into a concrete, trading-day aware
//! calendar range.
//!
//! Day-count buckets ([`DurationBucket::Intraday`], [`DurationBucket::D5`],
//! [`DurationBucket::D10`]) are measured in trading days: Saturdays and
//! Sundays inside the look-back window push the start further back. Month
//! and year buckets subtract calendar months and ignore weekends.
//!
//! Holidays are not modelled; a trading day is any weekday.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{SESSION_CLOSE_HOUR, SESSION_OPEN_HOUR};
use crate::window::{DurationBucket, WindowError};

// ---------------------------------------------------------------------------
// Session hours
// ---------------------------------------------------------------------------

/// Wall-clock bounds of a trading session.
///
/// Every resolved range starts at `open` and ends at `close`, whatever the
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionHours")]
pub struct SessionHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl SessionHours {
    /// Create session bounds; `open` must be strictly before `close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, WindowError> {
        if open >= close {
            return Err(WindowError::InvalidSession(format!(
                "open {open} is not before close {close}"
            )));
        }
        Ok(Self { open, close })
    }

    /// Create session bounds from whole hours, e.g. `(8, 22)`.
    pub fn from_hours(open: u32, close: u32) -> Result<Self, WindowError> {
        let hour = |h: u32| {
            NaiveTime::from_hms_opt(h, 0, 0)
                .ok_or_else(|| WindowError::InvalidSession(format!("hour {h} out of range")))
        };
        Self::new(hour(open)?, hour(close)?)
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }
}

#[derive(Deserialize)]
struct RawSessionHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl TryFrom<RawSessionHours> for SessionHours {
    type Error = WindowError;

    fn try_from(raw: RawSessionHours) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.close)
    }
}

impl Default for SessionHours {
    /// 08:00 to 22:00.
    fn default() -> Self {
        let hour = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            open: hour(SESSION_OPEN_HOUR),
            close: hour(SESSION_CLOSE_HOUR),
        }
    }
}

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

/// A `[from, to]` window in market-local wall-clock time.
///
/// Deserialization goes through [`DateRange::new`], so `from >= to` is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateRange {
    /// Build a literal range, rejecting `from >= to`.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, WindowError> {
        if from >= to {
            return Err(WindowError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Reject a same-day window that falls on a weekend.
    pub fn ensure_tradable(&self) -> Result<(), WindowError> {
        let day = self.from.date();
        if day == self.to.date() && is_weekend(day) {
            return Err(WindowError::WeekendMarketClosed { date: day });
        }
        Ok(())
    }

    /// Whole calendar days between the two endpoints.
    pub fn days(&self) -> i64 {
        (self.to.date() - self.from.date()).num_days()
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = WindowError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.from.format("%Y-%m-%d %H:%M:%S"),
            self.to.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Turns a [`DurationBucket`] into a [`DateRange`] ending at "now".
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeResolver {
    session: SessionHours,
}

impl DateRangeResolver {
    pub fn new(session: SessionHours) -> Self {
        Self { session }
    }

    pub fn session(&self) -> SessionHours {
        self.session
    }

    /// Resolve `bucket` relative to `now`.
    ///
    /// # Errors
    ///
    /// [`WindowError::WeekendMarketClosed`] if the resolved window is a single
    /// weekend day.
    pub fn resolve(&self, bucket: DurationBucket, now: NaiveDateTime) -> Result<DateRange, WindowError> {
        let today = now.date();

        let (from_day, to_day) = match bucket.months() {
            Some(months) => (
                today.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN),
                today,
            ),
            None => {
                let shift = trading_day_shift(bucket, today).unwrap_or(0);
                let start = shift_days(today, shift);
                if bucket == DurationBucket::Intraday {
                    (start, start)
                } else {
                    (start, today)
                }
            }
        };

        let range = DateRange {
            from: from_day.and_time(self.session.open),
            to: to_day.and_time(self.session.close),
        };
        range.ensure_tradable()?;

        tracing::debug!(%bucket, %now, %range, "resolved chart window");
        Ok(range)
    }
}

/// Resolve `bucket` relative to `now` using the default 08:00 to 22:00 session.
pub fn resolve(bucket: DurationBucket, now: NaiveDateTime) -> Result<DateRange, WindowError> {
    DateRangeResolver::default().resolve(bucket, now)
}

/// Day offset applied to `today` to find the first day of a day-count
/// bucket, or `None` for month/year buckets.
///
/// - `Intraday`: `-1` on Saturday, `-2` on Sunday, else `0`.
/// - `D5`: `-5 - skip`.
/// - `D10`: `-10 - skip - 1`; the extra day keeps the 15-second sampling
///   aligned with the row counts expected downstream.
///
/// `skip` is the number of weekend days among `today` and the `count - 1`
/// days before it.
pub fn trading_day_shift(bucket: DurationBucket, today: NaiveDate) -> Option<i64> {
    let count = bucket.trading_days()?;
    Some(match bucket {
        DurationBucket::Intraday => match today.weekday() {
            Weekday::Sat => -1,
            Weekday::Sun => -2,
            _ => 0,
        },
        DurationBucket::D10 => -count - weekend_days(today, count) - 1,
        _ => -count - weekend_days(today, count),
    })
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn weekend_days(start: NaiveDate, days: i64) -> i64 {
    (0..days)
        .filter(|&i| is_weekend(shift_days(start, -i)))
        .count() as i64
}

fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    let shifted = if delta < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };
    shifted.unwrap_or(date)
}
