//! Fetch a symbol's price history, write a chart document and print a
//! performance summary.
//!
//! # Usage
//!
//! ```sh
//! export FINNHUB_TOKEN="your-api-token"
//! cargo run --bin stockalyzer --features cli -- ADS.DE --duration 5d
//! cargo run --bin stockalyzer --features cli -- AAPL --from 2020-01-02 --to 2020-03-02
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use stockalyzer::chart::{Chart, ChartRenderer, JsonRenderer};
use stockalyzer::config::Config;
use stockalyzer::report::Performance;
use stockalyzer::window::{DateRange, DurationBucket, classify, resolution_for};
use stockalyzer::{Result, StockError};

#[derive(Parser)]
#[command(name = "stockalyzer")]
#[command(about = "Chart a stock's price history from Finnhub")]
#[command(version)]
struct Cli {
    /// Ticker symbol (e.g. AAPL, ADS.DE)
    symbol: String,

    /// Chart duration: 1d, 5d, 10d, 1m, 3m, 6m, 1y, 3y, 5y or max
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    duration: Option<DurationBucket>,

    /// First day of a literal range (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day of a literal range (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Where to write the chart document
    #[arg(short, long, default_value = "chart.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_market_closed() => {
            eprintln!("{e}. Try a weekday or a longer duration.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;

    let client = config.client()?;
    let resolver = config.resolver()?;
    let session = resolver.session();

    let profile = client.fetch_profile(&cli.symbol).await?;
    if profile.is_empty() {
        return Err(StockError::InvalidArgument(format!(
            "unknown symbol {:?}",
            cli.symbol
        )));
    }
    let quote = client.fetch_quote(&cli.symbol).await?;

    let (bucket, range, series) = match (cli.from, cli.to) {
        (Some(from), Some(to)) => {
            let range = DateRange::new(from.and_time(session.open()), to.and_time(session.close()))?;
            let bucket = classify(range.from, range.to);
            let series = client
                .fetch_candles(&cli.symbol, resolution_for(bucket), &range)
                .await?;
            (bucket, range, series)
        }
        _ => {
            let bucket = cli.duration.unwrap_or(DurationBucket::Intraday);
            let now = Utc::now().with_timezone(&client.timezone()).naive_local();
            let (range, series) = client
                .fetch_chart_series(&cli.symbol, bucket, now, &resolver)
                .await?;
            (bucket, range, series)
        }
    };

    tracing::info!(symbol = %cli.symbol, %bucket, %range, candles = series.len(), "fetched series");

    println!("{} ({}) - {} [{}]", profile.name, profile.ticker, profile.exchange, profile.currency);
    if let Some(performance) = Performance::from_series(&series, Some(&quote)) {
        print!("{performance}");
    }

    let chart = Chart::build(&profile.name, &series, bucket, config.chart_size())?;
    let mut out = BufWriter::new(File::create(&cli.output)?);
    JsonRenderer { pretty: true }.render(&chart, &mut out)?;
    out.flush()?;
    tracing::info!(path = %cli.output.display(), "chart written");
    println!("{}", chart.tick_labels().collect::<Vec<_>>().join("  "));

    Ok(())
}
