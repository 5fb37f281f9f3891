//! Company profile endpoint.

use crate::client::FinnhubClient;
use crate::error::Result;
use crate::types::profile::CompanyProfile;

impl FinnhubClient {
    /// Retrieve the company profile for a symbol.
    ///
    /// An unknown symbol yields an empty profile rather than an error; check
    /// [`CompanyProfile::is_empty`].
    ///
    /// **Endpoint:** `GET /stock/profile2?symbol={symbol}`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stockalyzer::client::FinnhubClient;
    /// # #[tokio::main]
    /// # async fn main() -> stockalyzer::error::Result<()> {
    /// let client = FinnhubClient::new("your-api-token")?;
    /// let profile = client.fetch_profile("ADS.DE").await?;
    /// println!("{} trades in {}", profile.name, profile.currency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        self.get("/stock/profile2", &[("symbol", symbol.to_owned())])
            .await
    }
}
