// =============================================================================
// Indicator Engine — Series enrichment
// =============================================================================
//
// Derives RSI(14), MACD(12,26,9) + signal, SMA(50), SMA(200), EMA(20), the
// 20-day volume average and Bollinger(20, k=2) for every bar of a validated
// series. Pure function of its input: same series in, byte-identical points
// out, no shared state, no I/O.
//
// Validation (ordering, duplicates, emptiness) happens at `BarSeries`
// construction, so enrichment itself is total.

use crate::indicators::{bollinger_series, ema_series, macd_series, rsi_series, sma_series};
use crate::series::{BarSeries, EnrichedSeries, IndicatorPoint};

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const SMA_SHORT: usize = 50;
pub const SMA_LONG: usize = 200;
pub const EMA_PERIOD: usize = 20;
pub const VOLUME_PERIOD: usize = 20;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_K: f64 = 2.0;

/// Attach an [`IndicatorPoint`] to every bar of `series`.
///
/// Each indicator is `None` until its lookback window is fully populated; a
/// 10-bar series still enriches fine, it just carries sparse points.
pub fn enrich(series: &BarSeries) -> EnrichedSeries {
    let closes = series.closes();
    let volumes = series.volumes();

    let rsi = rsi_series(&closes, RSI_PERIOD);
    let macd = macd_series(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
    let sma50 = sma_series(&closes, SMA_SHORT);
    let sma200 = sma_series(&closes, SMA_LONG);
    let ema20 = ema_series(&closes, EMA_PERIOD);
    let volume_avg = sma_series(&volumes, VOLUME_PERIOD);
    let bollinger = bollinger_series(&closes, BOLLINGER_PERIOD, BOLLINGER_K);

    let points = (0..series.len())
        .map(|t| IndicatorPoint {
            rsi: rsi[t],
            macd: macd.macd[t],
            macd_signal: macd.signal[t],
            sma50: sma50[t],
            sma200: sma200[t],
            // The EMA recursion runs from bar 0 (first-value seeding) but the
            // indicator is only reported once its nominal window has passed.
            ema20: (t >= EMA_PERIOD - 1).then(|| ema20[t]),
            volume_avg20: volume_avg[t],
            bollinger_upper: bollinger[t].map(|b| b.upper),
            bollinger_lower: bollinger[t].map(|b| b.lower),
        })
        .collect();

    EnrichedSeries { series: series.clone(), points }
}
