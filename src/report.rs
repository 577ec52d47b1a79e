// =============================================================================
// Analysis Report — Transport-independent response schema
// =============================================================================
//
// Assembles the wire-facing view of an enriched series: latest price, one
// block per indicator family with value(s) + qualitative state, and the
// final recommendation. Numeric fields are rounded here at the boundary
// only (2 decimals, 4 for MACD); internal computation stays full precision.
// Indicators left undefined by the engine serialize as `null`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::series::EnrichedSeries;
use crate::signals::{
    evaluate, recommend, BollingerVerdict, MacdVerdict, Recommendation, RsiVerdict,
    TrendVerdict, VolumeVerdict,
};

/// Round to 2 decimal places — prices, averages, volumes, RSI.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to 4 decimal places — MACD and its signal line, which live on a
/// much smaller scale than prices.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[derive(Debug, Clone, Serialize)]
pub struct RsiBlock {
    pub value: Option<f64>,
    pub state: RsiVerdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct MacdBlock {
    pub value: Option<f64>,
    pub signal: Option<f64>,
    pub state: MacdVerdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendBlock {
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema20: Option<f64>,
    pub state: TrendVerdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolumeBlock {
    pub current: f64,
    pub avg20: Option<f64>,
    pub state: VolumeVerdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct BollingerBlock {
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    pub state: BollingerVerdict,
}

/// Full analysis response for a single evaluated instrument.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub date: NaiveDate,
    pub price: f64,
    pub rsi: RsiBlock,
    pub macd: MacdBlock,
    pub trend: TrendBlock,
    pub volume: VolumeBlock,
    pub bollinger: BollingerBlock,
    pub recommendation: Recommendation,
}

/// Build the full report from the latest point of an enriched series.
pub fn analysis_report(ticker: &str, enriched: &EnrichedSeries) -> AnalysisReport {
    let (bar, point) = enriched.latest();
    let verdicts = evaluate(bar, point);
    let recommendation = recommend(bar, point);

    AnalysisReport {
        ticker: ticker.to_string(),
        date: bar.date,
        price: round2(bar.close),
        rsi: RsiBlock {
            value: point.rsi.map(round2),
            state: verdicts.rsi,
        },
        macd: MacdBlock {
            value: point.macd.map(round4),
            signal: point.macd_signal.map(round4),
            state: verdicts.macd,
        },
        trend: TrendBlock {
            sma50: point.sma50.map(round2),
            sma200: point.sma200.map(round2),
            ema20: point.ema20.map(round2),
            state: verdicts.trend,
        },
        volume: VolumeBlock {
            current: bar.volume,
            avg20: point.volume_avg20.map(round2),
            state: verdicts.volume,
        },
        bollinger: BollingerBlock {
            upper: point.bollinger_upper.map(round2),
            lower: point.bollinger_lower.map(round2),
            state: verdicts.bollinger,
        },
        recommendation,
    }
}

/// Price-only view (the original quote endpoint).
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub ticker: String,
    pub date: NaiveDate,
    pub price: f64,
}

pub fn price_report(ticker: &str, enriched: &EnrichedSeries) -> PriceReport {
    let (bar, _) = enriched.latest();
    PriceReport {
        ticker: ticker.to_string(),
        date: bar.date,
        price: round2(bar.close),
    }
}

/// Day-over-day change view. `change` fields are `null` when the series
/// holds a single bar.
#[derive(Debug, Clone, Serialize)]
pub struct RateReport {
    pub ticker: String,
    pub date: NaiveDate,
    pub price: f64,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
}

pub fn rate_report(ticker: &str, enriched: &EnrichedSeries) -> RateReport {
    let bars = enriched.series.bars();
    let last = enriched.series.latest();
    let previous = bars.len().checked_sub(2).map(|i| &bars[i]);

    let change = previous.map(|prev| last.close - prev.close);
    let change_percent = previous.and_then(|prev| {
        (prev.close != 0.0).then(|| (last.close - prev.close) / prev.close * 100.0)
    });

    RateReport {
        ticker: ticker.to_string(),
        date: last.date,
        price: round2(last.close),
        change: change.map(round2),
        change_percent: change_percent.map(round2),
    }
}

/// RSI-only view.
#[derive(Debug, Clone, Serialize)]
pub struct RsiReport {
    pub ticker: String,
    pub date: NaiveDate,
    pub price: f64,
    pub rsi: RsiBlock,
}

pub fn rsi_report(ticker: &str, enriched: &EnrichedSeries) -> RsiReport {
    let (bar, point) = enriched.latest();
    let verdicts = evaluate(bar, point);
    RsiReport {
        ticker: ticker.to_string(),
        date: bar.date,
        price: round2(bar.close),
        rsi: RsiBlock {
            value: point.rsi.map(round2),
            state: verdicts.rsi,
        },
    }
}
