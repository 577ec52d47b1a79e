// =============================================================================
// Relative Strength Index (RSI) — Simple Rolling Mean
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an instrument is overbought or oversold.
//
// Step 1 — Compute price deltas from consecutive closes.
//          gain = max(delta, 0), loss = max(-delta, 0)
// Step 2 — Average gain / average loss = simple rolling mean over the
//          trailing `period` deltas (not Wilder's smoothing).
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Edge cases are defined outcomes, not arithmetic faults:
//   avg_loss == 0, avg_gain > 0  => RSI = 100
//   avg_gain == 0, avg_loss > 0  => RSI = 0
//   both zero (flat window)      => undefined (no movement to rank)
//
// Thresholds: RSI > 70 => overbought, RSI < 30 => oversold.

/// Compute the RSI over `closes` for the given `period`.
///
/// Returns one slot per close; slot `t` is `Some` from index `period`
/// onward (a full window of `period` deltas exists) except where the window
/// is completely flat, which yields `None`.
///
/// # Edge cases
/// - `period == 0` => all slots `None`.
/// - `closes.len() < period + 1` => all slots `None`.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return result;
    }

    let gains: Vec<f64> = closes.windows(2).map(|w| (w[1] - w[0]).max(0.0)).collect();
    let losses: Vec<f64> = closes.windows(2).map(|w| (w[0] - w[1]).max(0.0)).collect();

    let period_f = period as f64;
    let mut gain_sum: f64 = gains[..period].iter().sum();
    let mut loss_sum: f64 = losses[..period].iter().sum();

    for t in period..closes.len() {
        // Window of deltas ending at close t is gains[t-period..t].
        if t > period {
            gain_sum += gains[t - 1] - gains[t - 1 - period];
            loss_sum += losses[t - 1] - losses[t - 1 - period];
        }
        result[t] = rsi_from_averages(gain_sum / period_f, loss_sum / period_f);
    }

    result
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// Returns `None` when both averages are zero (flat window — there is no
/// movement to rank).
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return None;
    }
    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- rsi_series ------------------------------------------------------

    #[test]
    fn rsi_empty_input() {
        assert!(rsi_series(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        assert_eq!(rsi_series(&[1.0, 2.0, 3.0], 0), vec![None; 3]);
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes give only 13 deltas — not enough for RSI(14).
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert_eq!(rsi_series(&closes, 14), vec![None; 14]);
    }

    #[test]
    fn rsi_all_gains_is_100() {
        // Strictly increasing closes 100..129 => avg_loss = 0 => RSI = 100.
        let closes: Vec<f64> = (100..130).map(|x| x as f64).collect();
        let rsi = rsi_series(&closes, 14);
        let last = rsi.last().unwrap().unwrap();
        assert!((last - 100.0).abs() < 1e-9);
        for slot in &rsi[14..] {
            assert!((slot.unwrap() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (100..130).rev().map(|x| x as f64).collect();
        let rsi = rsi_series(&closes, 14);
        assert!(rsi.last().unwrap().unwrap().abs() < 1e-9);
    }

    #[test]
    fn rsi_flat_market_is_undefined() {
        let closes = vec![100.0; 30];
        let rsi = rsi_series(&closes, 14);
        assert!(rsi.iter().all(Option::is_none));
    }

    #[test]
    fn rsi_defined_exactly_from_window() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let rsi = rsi_series(&closes, 14);
        assert!(rsi[13].is_none());
        assert!(rsi[14].is_some());
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for slot in rsi_series(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&slot), "RSI {slot} out of range");
        }
    }

    // ---- rsi_from_averages ----------------------------------------------

    #[test]
    fn averages_zero_loss_clamps_to_100() {
        assert_eq!(rsi_from_averages(1.5, 0.0), Some(100.0));
    }

    #[test]
    fn averages_zero_gain_is_0() {
        assert!(rsi_from_averages(0.0, 1.5).unwrap().abs() < 1e-9);
    }

    #[test]
    fn averages_both_zero_is_none() {
        assert_eq!(rsi_from_averages(0.0, 0.0), None);
    }

    #[test]
    fn averages_equal_gain_loss_is_50() {
        assert!((rsi_from_averages(1.0, 1.0).unwrap() - 50.0).abs() < 1e-9);
    }
}
