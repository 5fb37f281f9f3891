//! Candle endpoint and the bucket-driven chart fetch.

use chrono::NaiveDateTime;

use crate::client::FinnhubClient;
use crate::error::Result;
use crate::types::candles::{CandleResponse, CandleSeries};
use crate::window::{DateRange, DateRangeResolver, DurationBucket, ResolutionKind, resolution_for};

impl FinnhubClient {
    /// Retrieve OHLCV candles for a symbol over a market-local range.
    ///
    /// The range is checked first: a single weekend day fails with
    /// [`WindowError::WeekendMarketClosed`](crate::window::WindowError::WeekendMarketClosed)
    /// without contacting the provider. A `no_data` answer yields an empty
    /// series.
    ///
    /// **Endpoint:** `GET /stock/candle?symbol=&resolution=&from=&to=`
    pub async fn fetch_candles(
        &self,
        symbol: &str,
        resolution: ResolutionKind,
        range: &DateRange,
    ) -> Result<CandleSeries> {
        range.ensure_tradable()?;

        let query = [
            ("symbol", symbol.to_owned()),
            ("resolution", resolution.provider_code().to_owned()),
            ("from", self.to_unix(range.from).to_string()),
            ("to", self.to_unix(range.to).to_string()),
        ];
        let resp: CandleResponse = self.get("/stock/candle", &query).await?;

        if resp.is_no_data() {
            tracing::warn!(symbol, %range, %resolution, "provider returned no candles");
        }

        CandleSeries::from_response(resp, |secs| self.from_unix(secs))
    }

    /// Resolve `bucket` against `now`, pick its resolution and fetch the
    /// candles.
    ///
    /// Returns the resolved range alongside the series so callers can label
    /// the chart with it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stockalyzer::client::FinnhubClient;
    /// # use stockalyzer::window::{DateRangeResolver, DurationBucket};
    /// # #[tokio::main]
    /// # async fn main() -> stockalyzer::error::Result<()> {
    /// let client = FinnhubClient::new("your-api-token")?;
    /// let now = chrono::Local::now().naive_local();
    /// let (range, series) = client
    ///     .fetch_chart_series("ADS.DE", DurationBucket::D5, now, &DateRangeResolver::default())
    ///     .await?;
    /// println!("{} candles in {range}", series.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_chart_series(
        &self,
        symbol: &str,
        bucket: DurationBucket,
        now: NaiveDateTime,
        resolver: &DateRangeResolver,
    ) -> Result<(DateRange, CandleSeries)> {
        let range = resolver.resolve(bucket, now)?;
        let resolution = resolution_for(bucket);
        tracing::debug!(symbol, %bucket, %resolution, %range, "fetching chart series");

        let series = self.fetch_candles(symbol, resolution, &range).await?;
        Ok((range, series))
    }
}
