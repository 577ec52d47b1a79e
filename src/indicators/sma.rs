// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted arithmetic mean of the trailing `period` values. Used for the
// 50/200-day trend averages, the 20-day volume average, and as the Bollinger
// middle band.

/// Compute the SMA over `values` for the given `period`.
///
/// Returns one slot per input value; slot `t` is `Some` from index
/// `period - 1` onward (window fully populated) and `None` before that.
///
/// # Edge cases
/// - `period == 0` => all slots `None`.
/// - `values.len() < period` => all slots `None`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return result;
    }

    // Rolling sum: add the incoming value, drop the one leaving the window.
    let mut sum: f64 = values[..period].iter().sum();
    result[period - 1] = Some(sum / period as f64);

    for t in period..values.len() {
        sum += values[t] - values[t - period];
        result[t] = Some(sum / period as f64);
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_empty_input() {
        assert!(sma_series(&[], 3).is_empty());
    }

    #[test]
    fn sma_period_zero() {
        assert_eq!(sma_series(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn sma_insufficient_data() {
        assert_eq!(sma_series(&[1.0, 2.0], 3), vec![None, None]);
    }

    #[test]
    fn sma_matches_arithmetic_mean_exactly() {
        // Spec vector: closes [10,11,12,11,10], SMA(3) defined from index 2
        // with values [11, 11.333..., 11].
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0];
        let sma = sma_series(&closes, 3);
        assert_eq!(sma[0], None);
        assert_eq!(sma[1], None);
        assert!((sma[2].unwrap() - 11.0).abs() < 1e-9);
        assert!((sma[3].unwrap() - 34.0 / 3.0).abs() < 1e-9);
        assert!((sma[4].unwrap() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn sma_window_equals_length() {
        let sma = sma_series(&[2.0, 4.0, 6.0], 3);
        assert_eq!(sma[..2], [None, None]);
        assert!((sma[2].unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn sma_arbitrary_window_is_exact() {
        let values: Vec<f64> = (1..=50).map(|x| x as f64 * 1.37).collect();
        let period = 7;
        let sma = sma_series(&values, period);
        for t in (period - 1)..values.len() {
            let mean: f64 =
                values[t + 1 - period..=t].iter().sum::<f64>() / period as f64;
            assert!((sma[t].unwrap() - mean).abs() < 1e-9);
        }
    }
}
