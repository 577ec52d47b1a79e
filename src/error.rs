// =============================================================================
// Error Types — Typed failure kinds for the analysis pipeline
// =============================================================================
//
// Two conditions are genuine errors: malformed input (bad ticker, unordered
// or duplicated bar dates) and an empty result from the market-data provider.
// Insufficient history is NOT an error — indicators whose lookback window is
// not yet populated are represented as `None` values and flow through the
// pipeline as "unavailable" verdicts.

use thiserror::Error;

/// Failure kinds surfaced by the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing or malformed ticker, or a malformed bar series
    /// (non-chronological order, duplicate dates, negative volume).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provider returned no usable bars (empty result or unknown symbol).
    #[error("no data available: {0}")]
    DataUnavailable(String),

    /// Transport-level failure talking to the market-data provider.
    #[error("market data request failed: {0}")]
    Provider(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
