// =============================================================================
// Signals Module
// =============================================================================
//
// Qualitative layer on top of the indicator engine:
// - per-indicator verdicts from the latest enriched point
// - six-predicate recommendation scoring

pub mod recommendation;
pub mod verdict;

pub use recommendation::{recommend, Action, Recommendation};
pub use verdict::{
    evaluate, BollingerVerdict, MacdVerdict, PriceVerdict, RsiVerdict, TrendVerdict,
    Verdicts, VolumeVerdict,
};
