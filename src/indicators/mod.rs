// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators used by the
// analysis engine. Every series function returns one slot per input value,
// with `None` wherever the lookback window is not yet populated, so callers
// never see a computed-but-meaningless number.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger_series, BollingerPoint};
pub use ema::ema_series;
pub use macd::{macd_series, MacdSeries};
pub use rsi::rsi_series;
pub use sma::sma_series;
