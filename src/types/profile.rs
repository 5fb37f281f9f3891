#![allow(missing_docs)]
//! Company profile types.

use serde::{Deserialize, Serialize};

/// Company profile from `GET /stock/profile2`.
///
/// Finnhub answers an unknown symbol with an empty object, so every field
/// defaults; use [`CompanyProfile::is_empty`] to detect that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    pub ticker: String,
    pub country: String,
    pub currency: String,
    pub exchange: String,
    /// Industry classification.
    pub finnhub_industry: String,
    /// IPO date (YYYY-MM-DD).
    pub ipo: Option<String>,
    /// Market capitalization in millions of `currency`.
    pub market_capitalization: Option<f64>,
    /// Shares outstanding in millions.
    pub share_outstanding: Option<f64>,
    pub weburl: Option<String>,
    pub logo: Option<String>,
    pub phone: Option<String>,
}

impl CompanyProfile {
    /// `true` when the provider returned no data for the symbol.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.ticker.is_empty()
    }
}
