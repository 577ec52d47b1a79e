// =============================================================================
// Yahoo Finance Chart Client — External market-data collaborator
// =============================================================================
//
// Fetches historical OHLCV bars from the public Yahoo Finance chart API
// (`/v8/finance/chart/{symbol}`). This is the only blocking operation in the
// system; the analysis core never performs I/O and always receives a fully
// materialized `BarSeries`.
//
// An empty result, an unknown symbol, or a provider-reported error all
// surface as `DataUnavailable` — the core treats these as terminal input
// conditions and never accepts a partial series.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::series::{Bar, BarSeries};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Thin client over the Yahoo Finance chart endpoint.
#[derive(Clone)]
pub struct YahooClient {
    http: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Construct against an alternate base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            // Yahoo rejects requests without a browser-ish user agent.
            .user_agent("Mozilla/5.0 (compatible; helios-analyst/1.0)")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch `range` of bars at `interval` granularity for `symbol`.
    ///
    /// # Errors
    /// - `Provider` on transport failure.
    /// - `DataUnavailable` when the provider reports an error, returns no
    ///   rows, or every row is null-padded.
    /// - `InvalidInput` when the returned rows violate the series invariants.
    pub async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<BarSeries, AnalysisError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        debug!(symbol, range, interval, "fetching bars");

        let response: ChartResponse = self
            .http
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.chart.error {
            warn!(symbol, code = %err.code, "provider returned error");
            return Err(AnalysisError::DataUnavailable(format!(
                "{}: {}",
                symbol, err.description
            )));
        }

        let result = response
            .chart
            .result
            .and_then(|mut r| (!r.is_empty()).then(|| r.remove(0)))
            .ok_or_else(|| {
                AnalysisError::DataUnavailable(format!("no chart data for {symbol}"))
            })?;

        let quote = result.indicators.quote.into_iter().next().ok_or_else(|| {
            AnalysisError::DataUnavailable(format!("no quote data for {symbol}"))
        })?;

        let mut bars: Vec<Bar> = Vec::with_capacity(result.timestamp.len());
        for (i, &ts) in result.timestamp.iter().enumerate() {
            // Rows with null fields (halts, partial sessions) are skipped.
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
                field(&quote.open, i),
                field(&quote.high, i),
                field(&quote.low, i),
                field(&quote.close, i),
                field(&quote.volume, i),
            ) else {
                continue;
            };

            let date = chrono::DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| {
                    AnalysisError::InvalidInput(format!("bad timestamp {ts} for {symbol}"))
                })?
                .date_naive();

            // The live session can repeat the last calendar date; keep the
            // most recent row for it.
            if bars.last().map(|b: &Bar| b.date) == Some(date) {
                bars.pop();
            }

            bars.push(Bar { date, open, high, low, close, volume });
        }

        if bars.is_empty() {
            return Err(AnalysisError::DataUnavailable(format!(
                "provider returned no usable bars for {symbol}"
            )));
        }

        BarSeries::new(bars)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

fn field(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_payload() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704205800, 1704292200],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, 101.0],
                            "high": [102.0, 103.0],
                            "low": [99.0, 100.0],
                            "close": [101.5, 102.5],
                            "volume": [1000000, 1200000]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let parsed: ChartResponse = serde_json::from_str(payload).unwrap();
        let result = &parsed.chart.result.as_ref().unwrap()[0];
        assert_eq!(result.timestamp.len(), 2);
        assert_eq!(result.indicators.quote[0].close[1], Some(102.5));
    }

    #[test]
    fn parses_provider_error() {
        let payload = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;
        let parsed: ChartResponse = serde_json::from_str(payload).unwrap();
        let err = parsed.chart.error.unwrap();
        assert_eq!(err.code, "Not Found");
    }

    #[test]
    fn null_rows_are_skipped() {
        let quote = Quote {
            open: vec![Some(1.0), None],
            high: vec![Some(1.0), Some(2.0)],
            low: vec![Some(1.0), Some(2.0)],
            close: vec![Some(1.0), Some(2.0)],
            volume: vec![Some(10.0), Some(20.0)],
        };
        assert_eq!(field(&quote.open, 0), Some(1.0));
        assert_eq!(field(&quote.open, 1), None);
        assert_eq!(field(&quote.open, 2), None);
    }
}
