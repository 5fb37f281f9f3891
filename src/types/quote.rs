#![allow(missing_docs)]
//! Real-time quote types.

use serde::{Deserialize, Serialize};

/// Latest quote from `GET /quote`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "o", default)]
    pub open: f64,
    #[serde(rename = "h", default)]
    pub high: f64,
    #[serde(rename = "l", default)]
    pub low: f64,
    #[serde(rename = "c", default)]
    pub current: f64,
    #[serde(rename = "pc", default)]
    pub previous_close: f64,
    /// Quote time (epoch seconds).
    #[serde(rename = "t", default)]
    pub timestamp: i64,
}

impl Quote {
    /// Change against the previous close.
    pub fn change(&self) -> f64 {
        self.current - self.previous_close
    }

    /// Percent change against the previous close, `None` without a previous
    /// close.
    pub fn change_percent(&self) -> Option<f64> {
        (self.previous_close != 0.0).then(|| self.change() / self.previous_close * 100.0)
    }
}
