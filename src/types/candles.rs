#![allow(missing_docs)]
//! Candle types: the provider's parallel-array payload and the ordered
//! per-interval series built from it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StockError};

// ---------------------------------------------------------------------------
// Candle Response
// ---------------------------------------------------------------------------

/// OHLCV payload returned by `GET /stock/candle`.
///
/// Each field is a parallel array: index `i` across all arrays corresponds
/// to the same candle. `status` is `"ok"` or `"no_data"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandleResponse {
    #[serde(rename = "o", default)]
    pub open: Vec<f64>,
    #[serde(rename = "h", default)]
    pub high: Vec<f64>,
    #[serde(rename = "l", default)]
    pub low: Vec<f64>,
    #[serde(rename = "c", default)]
    pub close: Vec<f64>,
    #[serde(rename = "v", default)]
    pub volume: Vec<f64>,
    /// Epoch timestamps (seconds).
    #[serde(rename = "t", default)]
    pub timestamp: Vec<i64>,
    #[serde(rename = "s")]
    pub status: String,
}

impl CandleResponse {
    /// `true` when the provider had nothing for the requested window.
    pub fn is_no_data(&self) -> bool {
        self.status == "no_data"
    }
}

// ---------------------------------------------------------------------------
// Candle Series
// ---------------------------------------------------------------------------

/// One sampled interval, timestamped in market-local time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Candles ordered by time ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Build a series, sorting the candles by time.
    pub fn new(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.time);
        Self { candles }
    }

    /// Zip the provider's parallel arrays into candles.
    ///
    /// `to_local` converts epoch seconds into market-local time.
    pub fn from_response<F>(resp: CandleResponse, to_local: F) -> Result<Self>
    where
        F: Fn(i64) -> Option<NaiveDateTime>,
    {
        if resp.is_no_data() {
            return Ok(Self::default());
        }

        let len = resp.timestamp.len();
        let lengths = [
            resp.open.len(),
            resp.high.len(),
            resp.low.len(),
            resp.close.len(),
            resp.volume.len(),
        ];
        if lengths.iter().any(|&l| l != len) {
            return Err(StockError::MalformedResponse(format!(
                "candle arrays have mismatched lengths: t={len}, o/h/l/c/v={lengths:?}"
            )));
        }

        let candles = (0..len)
            .map(|i| {
                let secs = resp.timestamp[i];
                let time = to_local(secs).ok_or_else(|| {
                    StockError::MalformedResponse(format!("timestamp {secs} out of range"))
                })?;
                Ok(Candle {
                    time,
                    open: resp.open[i],
                    high: resp.high[i],
                    low: resp.low[i],
                    close: resp.close[i],
                    volume: resp.volume[i],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(candles))
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    /// Candle timestamps, in order.
    pub fn times(&self) -> Vec<NaiveDateTime> {
        self.candles.iter().map(|c| c.time).collect()
    }

    /// Opening prices, in order.
    pub fn opens(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.open).collect()
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
