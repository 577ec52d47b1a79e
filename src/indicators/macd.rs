// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD = EMA(close, fast) - EMA(close, slow), tracked against its own
// smoothed signal line = EMA(MACD, signal). Both EMAs use first-value
// seeding (see the ema module), so the raw recursion runs from bar 0; the
// reported values are masked until the slow window (MACD) and the slow +
// signal windows (signal line) are populated.

use crate::indicators::ema::ema_series;

/// Per-bar MACD and signal-line values, `None` during warm-up.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// Compute MACD and its signal line over `closes`.
///
/// Slot `t` of `macd` is `Some` from index `slow - 1`; slot `t` of `signal`
/// from index `slow + signal - 2`.
///
/// # Edge cases
/// - Any zero period or empty input => all slots `None`.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let none = vec![None; closes.len()];
    if fast == 0 || slow == 0 || signal == 0 || closes.is_empty() {
        return MacdSeries { macd: none.clone(), signal: none };
    }

    let fast_ema = ema_series(closes, fast);
    let slow_ema = ema_series(closes, slow);

    let raw_macd: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let raw_signal = ema_series(&raw_macd, signal);

    let macd_from = slow - 1;
    let signal_from = slow + signal - 2;

    let macd = raw_macd
        .iter()
        .enumerate()
        .map(|(t, &v)| (t >= macd_from).then_some(v))
        .collect();
    let signal = raw_signal
        .iter()
        .enumerate()
        .map(|(t, &v)| (t >= signal_from).then_some(v))
        .collect();

    MacdSeries { macd, signal }
}
