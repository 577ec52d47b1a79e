// =============================================================================
// Recommendation Scorer — Six-predicate action scoring
// =============================================================================
//
// Deterministic scoring over six boolean predicates evaluated against the
// latest bar and its indicator point, in this fixed order:
//
//   1. close  > EMA20
//   2. close  > SMA50
//   3. close  > SMA200
//   4. MACD   > signal line
//   5. RSI    < 30
//   6. volume > 20-day volume average
//
// score = count of true predicates (0..=6).
// Decision: score >= 4 => Buy, score <= 2 => Sell, else Hold.
//
// A predicate whose underlying indicator is undefined counts as false.
// Partial-history series are expected; this is documented behavior, not an
// error.

use serde::Serialize;

use crate::series::{Bar, IndicatorPoint};
use crate::signals::verdict::RSI_OVERSOLD;

pub const BUY_THRESHOLD: u8 = 4;
pub const SELL_THRESHOLD: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
            Self::Hold => write!(f, "Hold"),
        }
    }
}

/// Final verdict for an instrument: action, bounded score and the ordered
/// list of triggered conditions. Computed fresh per request, never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Score the latest bar and produce the final recommendation.
pub fn recommend(bar: &Bar, point: &IndicatorPoint) -> Recommendation {
    let predicates: [(bool, &str); 6] = [
        (
            point.ema20.is_some_and(|v| bar.close > v),
            "price above 20-day EMA",
        ),
        (
            point.sma50.is_some_and(|v| bar.close > v),
            "price above 50-day SMA",
        ),
        (
            point.sma200.is_some_and(|v| bar.close > v),
            "price above 200-day SMA",
        ),
        (
            matches!((point.macd, point.macd_signal), (Some(m), Some(s)) if m > s),
            "MACD above signal line",
        ),
        (
            point.rsi.is_some_and(|v| v < RSI_OVERSOLD),
            "RSI below 30 (oversold)",
        ),
        (
            point.volume_avg20.is_some_and(|avg| bar.volume > avg),
            "volume above 20-day average",
        ),
    ];

    let mut reasons: Vec<String> = predicates
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, description)| (*description).to_string())
        .collect();
    let score = reasons.len() as u8;

    if reasons.is_empty() {
        reasons.push("no clear condition met".to_string());
    }

    let action = if score >= BUY_THRESHOLD {
        Action::Buy
    } else if score <= SELL_THRESHOLD {
        Action::Sell
    } else {
        Action::Hold
    };

    Recommendation { action, score, reasons }
}
