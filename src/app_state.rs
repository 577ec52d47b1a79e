// =============================================================================
// Application State — Shared, read-only service handles
// =============================================================================
//
// The analysis pipeline is pure, so the only state the HTTP layer carries is
// the market-data client and the resolved configuration. Nothing here is
// mutated after startup; concurrent requests share it behind an `Arc`.

use crate::config::Config;
use crate::market_data::YahooClient;

pub struct AppState {
    pub market: YahooClient,
    pub config: Config,
}

impl AppState {
    pub fn new(market: YahooClient, config: Config) -> Self {
        Self { market, config }
    }
}
