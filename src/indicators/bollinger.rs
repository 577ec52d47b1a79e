// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Volatility envelope around a moving average: middle band = SMA(period),
// upper/lower = middle ± k * σ, where σ is the POPULATION standard deviation
// of the same `period`-close window (divisor = period, matching the middle
// band's window exactly). A zero σ (flat window) collapses both bands onto
// the middle band — a defined outcome, not an error.

use crate::indicators::sma::sma_series;

/// Bands for a single bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerPoint {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Compute Bollinger Bands over `closes`.
///
/// Returns one slot per close; slot `t` is `Some` from index `period - 1`
/// onward.
pub fn bollinger_series(closes: &[f64], period: usize, k: f64) -> Vec<Option<BollingerPoint>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return result;
    }

    let middles = sma_series(closes, period);

    for t in (period - 1)..closes.len() {
        let middle = middles[t].expect("SMA defined from period - 1");
        let window = &closes[t + 1 - period..=t];
        let variance =
            window.iter().map(|x| (x - middle).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();
        result[t] = Some(BollingerPoint {
            upper: middle + k * std_dev,
            middle,
            lower: middle - k * std_dev,
        });
    }

    result
}
