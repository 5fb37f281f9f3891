//! Sampling resolution requested from the provider for each bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::window::DurationBucket;

/// Candle sampling granularity, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    Second,
    FiveSecond,
    FifteenSecond,
    Minute,
    Daily,
    Weekly,
}

impl ResolutionKind {
    /// Resolution code sent in the `resolution` query parameter of the
    /// candle endpoint.
    pub fn provider_code(self) -> &'static str {
        match self {
            Self::Second => "1",
            Self::FiveSecond => "5",
            Self::FifteenSecond => "15",
            Self::Minute => "60",
            Self::Daily => "D",
            Self::Weekly => "W",
        }
    }
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_code())
    }
}

/// Resolution to request for a chart of the given duration.
pub fn resolution_for(bucket: DurationBucket) -> ResolutionKind {
    match bucket {
        DurationBucket::Intraday => ResolutionKind::Second,
        DurationBucket::D5 => ResolutionKind::FiveSecond,
        DurationBucket::D10 => ResolutionKind::FifteenSecond,
        DurationBucket::M1 | DurationBucket::M3 | DurationBucket::M6 => ResolutionKind::Minute,
        DurationBucket::Y1 | DurationBucket::Y3 | DurationBucket::Y5 => ResolutionKind::Daily,
        DurationBucket::Max => ResolutionKind::Weekly,
    }
}
