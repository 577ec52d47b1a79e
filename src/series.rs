// =============================================================================
// Bar Series — Validated OHLCV data model
// =============================================================================
//
// `BarSeries` is the single validation gate of the pipeline: construction
// rejects empty input, non-chronological or duplicated dates, and negative
// volume. Everything downstream (the indicator engine, the evaluator, the
// scorer) can therefore assume a well-formed, strictly ascending series and
// stay total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One period's open/high/low/close price and traded volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Ordered, validated sequence of bars.
///
/// Invariant: at least one bar, dates strictly increasing (no duplicates),
/// volume non-negative and finite. Enforced by [`BarSeries::new`]; the inner
/// vector is never exposed mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validate and wrap a raw bar vector.
    ///
    /// # Errors
    /// - `DataUnavailable` when `bars` is empty.
    /// - `InvalidInput` when dates are not strictly increasing (out of order
    ///   or duplicated) or any volume is negative or non-finite.
    pub fn new(bars: Vec<Bar>) -> Result<Self, AnalysisError> {
        if bars.is_empty() {
            return Err(AnalysisError::DataUnavailable("empty bar series".into()));
        }

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AnalysisError::InvalidInput(format!(
                    "bar dates must be strictly increasing: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        for bar in &bars {
            if !bar.volume.is_finite() || bar.volume < 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "negative or non-finite volume {} on {}",
                    bar.volume, bar.date
                )));
            }
        }

        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar. Total because the series is non-empty by construction.
    pub fn latest(&self) -> &Bar {
        self.bars.last().expect("BarSeries is non-empty by construction")
    }

    /// Closing prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Traded volumes in chronological order.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

/// Indicator values derived for a single bar.
///
/// Every field is `None` until its lookback window is fully populated; a
/// short series yields sparse points rather than meaningless numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema20: Option<f64>,
    pub volume_avg20: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
}

/// A bar series augmented with one [`IndicatorPoint`] per bar.
///
/// Produced by [`crate::engine::enrich`]; `points.len() == series.len()`
/// always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSeries {
    pub series: BarSeries,
    pub points: Vec<IndicatorPoint>,
}

impl EnrichedSeries {
    /// The most recent bar together with its derived indicator values.
    pub fn latest(&self) -> (&Bar, &IndicatorPoint) {
        (
            self.series.latest(),
            self.points.last().expect("points match series length"),
        )
    }
}
