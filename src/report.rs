//! Textual performance summary for a fetched series.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::candles::CandleSeries;
use crate::types::quote::Quote;

/// Period performance of a symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Performance {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Open of the first candle.
    pub first_open: f64,
    /// Close of the last candle.
    pub last_close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    /// Latest quote, when one was fetched.
    pub quote: Option<Quote>,
}

impl Performance {
    /// Summarise `series`; `None` if it is empty.
    pub fn from_series(series: &CandleSeries, quote: Option<&Quote>) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        let (high, low, volume) = series.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY, 0.0),
            |(high, low, volume), c| (high.max(c.high), low.min(c.low), volume + c.volume),
        );

        Some(Self {
            start: first.time,
            end: last.time,
            first_open: first.open,
            last_close: last.close,
            high,
            low,
            volume,
            quote: quote.copied(),
        })
    }

    /// Absolute change over the period.
    pub fn change(&self) -> f64 {
        self.last_close - self.first_open
    }

    /// Percent change over the period, `None` if the first open is zero.
    pub fn change_percent(&self) -> Option<f64> {
        (self.first_open != 0.0).then(|| self.change() / self.first_open * 100.0)
    }
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |p| format!("{p:+.2}%"))
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = |t: &NaiveDateTime| t.format("%Y-%m-%d %H:%M").to_string();

        writeln!(f, "{:<12} {} .. {}", "Period", time(&self.start), time(&self.end))?;
        writeln!(f, "{:<12} {:>12.2}", "Open", self.first_open)?;
        writeln!(f, "{:<12} {:>12.2}", "Close", self.last_close)?;
        writeln!(
            f,
            "{:<12} {:>+12.2} {:>9}",
            "Change",
            self.change(),
            percent(self.change_percent())
        )?;
        writeln!(f, "{:<12} {:>12.2}", "High", self.high)?;
        writeln!(f, "{:<12} {:>12.2}", "Low", self.low)?;
        writeln!(f, "{:<12} {:>12.0}", "Volume", self.volume)?;

        if let Some(quote) = &self.quote {
            writeln!(f, "{:<12} {:>12.2}", "Last", quote.current)?;
            writeln!(
                f,
                "{:<12} {:>+12.2} {:>9}",
                "Day change",
                quote.change(),
                percent(quote.change_percent())
            )?;
        }
        Ok(())
    }
}
