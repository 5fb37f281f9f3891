//! Real-time quote endpoint.

use crate::client::FinnhubClient;
use crate::error::Result;
use crate::types::quote::Quote;

impl FinnhubClient {
    /// Retrieve the latest quote for a symbol.
    ///
    /// **Endpoint:** `GET /quote?symbol={symbol}`
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        self.get("/quote", &[("symbol", symbol.to_owned())]).await
    }
}
