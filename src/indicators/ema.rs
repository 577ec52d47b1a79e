// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent values, making it more responsive to new
// information than the SMA.
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The recursion is seeded with the first value of the input — no separate
// warm-up truncation. The raw series therefore carries a value at every
// index; consumers that report an EMA(n) indicator mask the first n-1 slots
// as unavailable (see the engine).

/// Compute the full EMA recursion over `values` for the given `period`.
///
/// Returns one value per input element, seeded with `values[0]`.
///
/// # Edge cases
/// - `period == 0` or empty input => empty vec.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.is_empty() {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    let mut result = Vec::with_capacity(values.len());
    let mut prev = values[0];
    result.push(prev);

    for &value in &values[1..] {
        let ema = value * multiplier + prev * (1.0 - multiplier);
        result.push(ema);
        prev = ema;
    }

    result
}
