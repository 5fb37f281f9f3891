//! Axis tick marks and gridlines derived from calendar boundaries.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::window::{DurationBucket, WindowError};

/// A labelled position on the time axis, as an index into the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickMark {
    pub position: usize,
    pub label: String,
}

impl TickMark {
    fn new(position: usize, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// A vertical gridline at a series index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLine {
    pub position: usize,
}

/// Calendar field whose change marks a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Hour,
    Day,
    Month,
    Year,
}

impl Boundary {
    fn for_bucket(bucket: DurationBucket) -> Self {
        match bucket {
            DurationBucket::Intraday => Self::Hour,
            DurationBucket::D5 | DurationBucket::D10 => Self::Day,
            DurationBucket::M1 | DurationBucket::M3 | DurationBucket::M6 | DurationBucket::Y1 => {
                Self::Month
            }
            DurationBucket::Y3 | DurationBucket::Y5 | DurationBucket::Max => Self::Year,
        }
    }

    /// The timestamp truncated to this boundary's unit.
    fn key(self, t: &NaiveDateTime) -> (i32, u32, u32, u32) {
        match self {
            Self::Hour => (t.year(), t.month(), t.day(), t.hour()),
            Self::Day => (t.year(), t.month(), t.day(), 0),
            Self::Month => (t.year(), t.month(), 0, 0),
            Self::Year => (t.year(), 0, 0, 0),
        }
    }

    fn label(self, t: &NaiveDateTime) -> String {
        match self {
            Self::Hour => t.format("%m-%d %-I%p").to_string(),
            Self::Day => t.format("%Y-%m-%d").to_string(),
            Self::Month => t.format("%b").to_string(),
            Self::Year => t.format("%Y").to_string(),
        }
    }

    /// Month and year axes leave the leading tick blank.
    fn labels_leading_tick(self) -> bool {
        matches!(self, Self::Hour | Self::Day)
    }
}

/// Compute axis ticks and gridlines for an ascending timestamp sequence.
///
/// Ticks are placed at every index `j` where `times[j - 1]` and `times[j]`
/// fall into different hours, days, months or years (depending on
/// `bucket`), labelled with `times[j]`. The result is framed by a sentinel at
/// position `0` and an unlabelled sentinel at `times.len()`. Each interior
/// tick has a gridline at the same position.
///
/// For [`DurationBucket::Intraday`] the hour is compared together with its
/// date, so two samples at the same hour on different days still produce a
/// tick.
///
/// # Errors
///
/// [`WindowError::EmptySeries`] when `times` has fewer than two entries.
pub fn ticks(
    times: &[NaiveDateTime],
    bucket: DurationBucket,
) -> Result<(Vec<TickMark>, Vec<GridLine>), WindowError> {
    if times.len() < 2 {
        return Err(WindowError::EmptySeries { len: times.len() });
    }

    let boundary = Boundary::for_bucket(bucket);

    let leading = if boundary.labels_leading_tick() {
        boundary.label(&times[0])
    } else {
        String::new()
    };

    let mut marks = vec![TickMark::new(0, leading)];
    let mut grid = Vec::new();

    for (j, pair) in times.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
        if boundary.key(&pair[0]) != boundary.key(&pair[1]) {
            marks.push(TickMark::new(j, boundary.label(&pair[1])));
            grid.push(GridLine { position: j });
        }
    }

    marks.push(TickMark::new(times.len(), ""));

    tracing::trace!(%bucket, ticks = marks.len(), gridlines = grid.len(), "computed axis ticks");
    Ok((marks, grid))
}
