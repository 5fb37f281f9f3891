//! Duration buckets and the day-span classifier.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::window::WindowError;

// ---------------------------------------------------------------------------
// Duration Bucket
// ---------------------------------------------------------------------------

/// Coarse chart duration.
///
/// Variants are declared in ascending span order, so the derived [`Ord`]
/// matches the span ordering (`Intraday < D5 < ... < Max`). The same type
/// drives range resolution, provider resolution and axis tick rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationBucket {
    /// A single trading session.
    Intraday,
    /// Five trading days.
    D5,
    /// Ten trading days.
    D10,
    /// One month.
    M1,
    /// Three months.
    M3,
    /// Six months.
    M6,
    /// One year.
    Y1,
    /// Three years.
    Y3,
    /// Five years.
    Y5,
    /// All available history.
    Max,
}

impl DurationBucket {
    /// Every bucket, in ascending span order.
    pub const ALL: [DurationBucket; 10] = [
        Self::Intraday,
        Self::D5,
        Self::D10,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Y3,
        Self::Y5,
        Self::Max,
    ];

    /// Short code used on the command line and in chart documents.
    pub fn code(self) -> &'static str {
        match self {
            Self::Intraday => "1d",
            Self::D5 => "5d",
            Self::D10 => "10d",
            Self::M1 => "1m",
            Self::M3 => "3m",
            Self::M6 => "6m",
            Self::Y1 => "1y",
            Self::Y3 => "3y",
            Self::Y5 => "5y",
            Self::Max => "max",
        }
    }

    /// Upper bound (inclusive) of the whole-day span classified into this
    /// bucket, or `None` for [`DurationBucket::Max`].
    ///
    /// Months count as 31 days and years as 12 such months.
    pub fn max_days(self) -> Option<i64> {
        match self {
            Self::Intraday => Some(1),
            Self::D5 => Some(5),
            Self::D10 => Some(10),
            Self::M1 => Some(31),
            Self::M3 => Some(93),
            Self::M6 => Some(186),
            Self::Y1 => Some(372),
            Self::Y3 => Some(1116),
            Self::Y5 => Some(1860),
            Self::Max => None,
        }
    }

    /// Nominal look-back in calendar months for month/year buckets.
    ///
    /// Returns `None` for the day-count buckets, which are resolved in
    /// trading days instead.
    pub fn months(self) -> Option<u32> {
        match self {
            Self::Intraday | Self::D5 | Self::D10 => None,
            Self::M1 => Some(1),
            Self::M3 => Some(3),
            Self::M6 => Some(6),
            Self::Y1 => Some(12),
            Self::Y3 => Some(36),
            Self::Y5 => Some(60),
            Self::Max => Some(360),
        }
    }

    /// Number of trading days spanned by the day-count buckets.
    pub fn trading_days(self) -> Option<i64> {
        match self {
            Self::Intraday => Some(1),
            Self::D5 => Some(5),
            Self::D10 => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DurationBucket {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.code() == code)
            .ok_or_else(|| WindowError::UnsupportedBucket(s.to_owned()))
    }
}

impl TryFrom<String> for DurationBucket {
    type Error = WindowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationBucket> for String {
    fn from(bucket: DurationBucket) -> Self {
        bucket.code().to_owned()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a literal range into the smallest bucket whose day threshold
/// accommodates it.
///
/// Only the calendar dates count; time of day is ignored. A reversed range is
/// classified by its absolute span.
pub fn classify(from: NaiveDateTime, to: NaiveDateTime) -> DurationBucket {
    let days = (to.date() - from.date()).num_days().abs();
    DurationBucket::ALL
        .into_iter()
        .find(|bucket| bucket.max_days().is_none_or(|max| days <= max))
        .unwrap_or(DurationBucket::Max)
}
