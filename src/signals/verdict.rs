// =============================================================================
// Signal Evaluator — Qualitative verdicts from the latest indicator point
// =============================================================================
//
// Maps each derived indicator value into a fixed qualitative state:
//
//   RSI          > 70 / < 30 / else        => overbought / oversold / neutral
//   MACD         macd > signal / else      => bullish-cross / bearish-cross
//   Price vs EMA20 / SMA50 / SMA200        => above / below
//   Trend        above SMA50 AND SMA200    => bullish, else bearish
//   Volume       > avg*1.2 / < avg*0.8     => high / low / else normal
//   Bollinger    close > upper / < lower   => breakout-above / breakout-below
//                                             / else within-band
//
// An indicator left undefined by the engine propagates as `Unavailable`.
// Undefined values are never coerced to a numeric default — that would
// silently corrupt the downstream score.

use serde::Serialize;

use crate::series::{Bar, IndicatorPoint};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const VOLUME_HIGH_RATIO: f64 = 1.2;
pub const VOLUME_LOW_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsiVerdict {
    Overbought,
    Oversold,
    Neutral,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacdVerdict {
    BullishCross,
    BearishCross,
    Unavailable,
}

/// Position of the close relative to a moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceVerdict {
    Above,
    Below,
    Unavailable,
}

/// Overall trend, defined by the close sitting above both SMA50 and SMA200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendVerdict {
    Bullish,
    Bearish,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeVerdict {
    High,
    Low,
    Normal,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BollingerVerdict {
    BreakoutAbove,
    BreakoutBelow,
    WithinBand,
    Unavailable,
}

/// One verdict per indicator, derived from the latest bar. Pure data,
/// never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdicts {
    pub rsi: RsiVerdict,
    pub macd: MacdVerdict,
    pub vs_ema20: PriceVerdict,
    pub vs_sma50: PriceVerdict,
    pub vs_sma200: PriceVerdict,
    pub trend: TrendVerdict,
    pub volume: VolumeVerdict,
    pub bollinger: BollingerVerdict,
}

/// Evaluate the most recent bar and its indicator point into verdicts.
pub fn evaluate(bar: &Bar, point: &IndicatorPoint) -> Verdicts {
    let rsi = match point.rsi {
        Some(v) if v > RSI_OVERBOUGHT => RsiVerdict::Overbought,
        Some(v) if v < RSI_OVERSOLD => RsiVerdict::Oversold,
        Some(_) => RsiVerdict::Neutral,
        None => RsiVerdict::Unavailable,
    };

    let macd = match (point.macd, point.macd_signal) {
        (Some(m), Some(s)) if m > s => MacdVerdict::BullishCross,
        (Some(_), Some(_)) => MacdVerdict::BearishCross,
        _ => MacdVerdict::Unavailable,
    };

    let vs_ema20 = price_vs(bar.close, point.ema20);
    let vs_sma50 = price_vs(bar.close, point.sma50);
    let vs_sma200 = price_vs(bar.close, point.sma200);

    let trend = match (vs_sma50, vs_sma200) {
        (PriceVerdict::Unavailable, _) | (_, PriceVerdict::Unavailable) => {
            TrendVerdict::Unavailable
        }
        (PriceVerdict::Above, PriceVerdict::Above) => TrendVerdict::Bullish,
        _ => TrendVerdict::Bearish,
    };

    let volume = match point.volume_avg20 {
        Some(avg) if bar.volume > avg * VOLUME_HIGH_RATIO => VolumeVerdict::High,
        Some(avg) if bar.volume < avg * VOLUME_LOW_RATIO => VolumeVerdict::Low,
        Some(_) => VolumeVerdict::Normal,
        None => VolumeVerdict::Unavailable,
    };

    let bollinger = match (point.bollinger_upper, point.bollinger_lower) {
        (Some(upper), Some(_)) if bar.close > upper => BollingerVerdict::BreakoutAbove,
        (Some(_), Some(lower)) if bar.close < lower => BollingerVerdict::BreakoutBelow,
        (Some(_), Some(_)) => BollingerVerdict::WithinBand,
        _ => BollingerVerdict::Unavailable,
    };

    Verdicts {
        rsi,
        macd,
        vs_ema20,
        vs_sma50,
        vs_sma200,
        trend,
        volume,
        bollinger,
    }
}

fn price_vs(close: f64, average: Option<f64>) -> PriceVerdict {
    match average {
        Some(avg) if close > avg => PriceVerdict::Above,
        Some(_) => PriceVerdict::Below,
        None => PriceVerdict::Unavailable,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(close: f64, volume: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }

    fn full_point() -> IndicatorPoint {
        IndicatorPoint {
            rsi: Some(50.0),
            macd: Some(1.0),
            macd_signal: Some(0.5),
            sma50: Some(95.0),
            sma200: Some(90.0),
            ema20: Some(98.0),
            volume_avg20: Some(1_000.0),
            bollinger_upper: Some(110.0),
            bollinger_lower: Some(85.0),
        }
    }

    // ---- per-indicator rules --------------------------------------------

    #[test]
    fn rsi_thresholds() {
        let b = bar(100.0, 1_000.0);
        let mut p = full_point();
        p.rsi = Some(75.0);
        assert_eq!(evaluate(&b, &p).rsi, RsiVerdict::Overbought);
        p.rsi = Some(25.0);
        assert_eq!(evaluate(&b, &p).rsi, RsiVerdict::Oversold);
        p.rsi = Some(70.0); // boundary is neutral, rule is strict
        assert_eq!(evaluate(&b, &p).rsi, RsiVerdict::Neutral);
    }

    #[test]
    fn macd_cross_direction() {
        let b = bar(100.0, 1_000.0);
        let mut p = full_point();
        assert_eq!(evaluate(&b, &p).macd, MacdVerdict::BullishCross);
        p.macd = Some(0.2);
        p.macd_signal = Some(0.4);
        assert_eq!(evaluate(&b, &p).macd, MacdVerdict::BearishCross);
    }

    #[test]
    fn trend_requires_both_averages() {
        let p = full_point();
        let above_both = bar(100.0, 1_000.0);
        assert_eq!(evaluate(&above_both, &p).trend, TrendVerdict::Bullish);
        // Above SMA200 (90) but below SMA50 (95) => bearish.
        let mixed = bar(92.0, 1_000.0);
        assert_eq!(evaluate(&mixed, &p).trend, TrendVerdict::Bearish);
    }

    #[test]
    fn volume_bands() {
        let p = full_point();
        assert_eq!(evaluate(&bar(100.0, 1_300.0), &p).volume, VolumeVerdict::High);
        assert_eq!(evaluate(&bar(100.0, 700.0), &p).volume, VolumeVerdict::Low);
        assert_eq!(evaluate(&bar(100.0, 1_000.0), &p).volume, VolumeVerdict::Normal);
    }

    #[test]
    fn bollinger_breakouts() {
        let p = full_point();
        assert_eq!(
            evaluate(&bar(111.0, 1_000.0), &p).bollinger,
            BollingerVerdict::BreakoutAbove
        );
        assert_eq!(
            evaluate(&bar(84.0, 1_000.0), &p).bollinger,
            BollingerVerdict::BreakoutBelow
        );
        assert_eq!(
            evaluate(&bar(100.0, 1_000.0), &p).bollinger,
            BollingerVerdict::WithinBand
        );
    }

    // ---- unavailable propagation ----------------------------------------

    #[test]
    fn undefined_indicators_propagate_as_unavailable() {
        let b = bar(100.0, 1_000.0);
        let v = evaluate(&b, &IndicatorPoint::default());
        assert_eq!(v.rsi, RsiVerdict::Unavailable);
        assert_eq!(v.macd, MacdVerdict::Unavailable);
        assert_eq!(v.vs_ema20, PriceVerdict::Unavailable);
        assert_eq!(v.vs_sma50, PriceVerdict::Unavailable);
        assert_eq!(v.vs_sma200, PriceVerdict::Unavailable);
        assert_eq!(v.trend, TrendVerdict::Unavailable);
        assert_eq!(v.volume, VolumeVerdict::Unavailable);
        assert_eq!(v.bollinger, BollingerVerdict::Unavailable);
    }

    #[test]
    fn missing_sma200_makes_trend_unavailable() {
        let b = bar(100.0, 1_000.0);
        let mut p = full_point();
        p.sma200 = None;
        let v = evaluate(&b, &p);
        assert_eq!(v.vs_sma50, PriceVerdict::Above);
        assert_eq!(v.trend, TrendVerdict::Unavailable);
    }

    #[test]
    fn verdict_labels_serialize_kebab_case() {
        let json = serde_json::to_string(&MacdVerdict::BullishCross).unwrap();
        assert_eq!(json, "\"bullish-cross\"");
        let json = serde_json::to_string(&BollingerVerdict::BreakoutAbove).unwrap();
        assert_eq!(json, "\"breakout-above\"");
        let json = serde_json::to_string(&RsiVerdict::Unavailable).unwrap();
        assert_eq!(json, "\"unavailable\"");
    }
}
