//! Chart documents and the renderer seam.
//!
//! A [`Chart`] bundles everything a plotting backend needs: the price series,
//! axis ticks, gridlines, legend name and canvas size. Rasterisation lives
//! behind [`ChartRenderer`]; [`JsonRenderer`] writes the document as JSON for
//! an external plotting tool.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::candles::CandleSeries;
use crate::window::{DurationBucket, GridLine, TickMark, ticks};

/// A renderable time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Legend entry for the series.
    pub name: String,
    pub bucket: DurationBucket,
    pub width: u32,
    pub height: u32,
    /// Candle times.
    pub x: Vec<NaiveDateTime>,
    /// Opening prices, one per entry of `x`.
    pub y: Vec<f64>,
    pub ticks: Vec<TickMark>,
    pub gridlines: Vec<GridLine>,
}

impl Chart {
    /// Build a chart of opening prices with axis annotations for `bucket`.
    ///
    /// # Errors
    ///
    /// [`WindowError::EmptySeries`](crate::window::WindowError::EmptySeries)
    /// if the series has fewer than two candles.
    pub fn build(
        name: impl Into<String>,
        series: &CandleSeries,
        bucket: DurationBucket,
        (width, height): (u32, u32),
    ) -> Result<Self> {
        let x = series.times();
        let (ticks, gridlines) = ticks(&x, bucket)?;

        Ok(Self {
            name: name.into(),
            bucket,
            width,
            height,
            y: series.opens(),
            x,
            ticks,
            gridlines,
        })
    }

    /// Labels of the non-empty ticks, in order.
    pub fn tick_labels(&self) -> impl Iterator<Item = &str> {
        self.ticks
            .iter()
            .map(|t| t.label.as_str())
            .filter(|label| !label.is_empty())
    }
}

/// Something that can turn a [`Chart`] into an artifact.
pub trait ChartRenderer {
    /// Render `chart` into `out`.
    fn render(&self, chart: &Chart, out: &mut dyn Write) -> Result<()>;
}

/// Writes the chart document as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ChartRenderer for JsonRenderer {
    fn render(&self, chart: &Chart, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, chart)?;
        } else {
            serde_json::to_writer(&mut *out, chart)?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }
}
