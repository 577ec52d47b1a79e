// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// Four read-only endpoints under `/api/v1/`, each taking a ticker path
// segment plus optional `range` / `interval` query parameters:
//
//   GET /api/v1/price/{ticker}      latest close only
//   GET /api/v1/rate/{ticker}       day-over-day change
//   GET /api/v1/rsi/{ticker}        RSI value + state
//   GET /api/v1/analysis/{ticker}   full indicator + recommendation report
//
// plus an unauthenticated `GET /api/v1/health` liveness probe.
//
// Errors surface as structured JSON `{"error": "..."}` with 400 for
// missing/invalid input, 404 when the provider has no data, and 500 for
// transport or unexpected failures. CORS is configured permissively for
// development.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::engine::enrich;
use crate::error::AnalysisError;
use crate::report::{analysis_report, price_report, rate_report, rsi_report};
use crate::series::EnrichedSeries;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/price/:ticker", get(price))
        .route("/api/v1/rate/:ticker", get(rate))
        .route("/api/v1/rsi/:ticker", get(rsi))
        .route("/api/v1/analysis/:ticker", get(analysis))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Error mapping
// =============================================================================

/// Transport-facing wrapper that turns `AnalysisError` into an HTTP status
/// and a `{"error": "..."}` body.
pub struct ApiError(AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AnalysisError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AnalysisError::DataUnavailable(_) => StatusCode::NOT_FOUND,
            AnalysisError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!(error = %self.0, "request failed");
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Request plumbing
// =============================================================================

#[derive(Debug, Deserialize)]
struct RangeQuery {
    range: Option<String>,
    interval: Option<String>,
}

/// Tickers are passed straight to the provider URL path; accept only the
/// character set real symbols use.
fn validate_ticker(raw: &str) -> Result<String, AnalysisError> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AnalysisError::InvalidInput("ticker must not be empty".into()));
    }
    if !ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
    {
        return Err(AnalysisError::InvalidInput(format!(
            "ticker '{raw}' contains invalid characters"
        )));
    }
    Ok(ticker)
}

/// Fetch, validate and enrich the series for one request.
async fn load(
    state: &AppState,
    raw_ticker: &str,
    query: &RangeQuery,
) -> Result<(String, EnrichedSeries), ApiError> {
    let ticker = validate_ticker(raw_ticker)?;
    let range = query.range.as_deref().unwrap_or(&state.config.default_range);
    let interval = query
        .interval
        .as_deref()
        .unwrap_or(&state.config.default_interval);

    let series = state.market.fetch(&ticker, range, interval).await?;
    info!(ticker = %ticker, bars = series.len(), "series loaded");
    Ok((ticker, enrich(&series)))
}

// =============================================================================
// Handlers
// =============================================================================

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "server_time": chrono::Utc::now().timestamp_millis(),
    }))
}

async fn price(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (ticker, enriched) = load(&state, &ticker, &query).await?;
    Ok(Json(price_report(&ticker, &enriched)))
}

async fn rate(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (ticker, enriched) = load(&state, &ticker, &query).await?;
    Ok(Json(rate_report(&ticker, &enriched)))
}

async fn rsi(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (ticker, enriched) = load(&state, &ticker, &query).await?;
    Ok(Json(rsi_report(&ticker, &enriched)))
}

async fn analysis(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (ticker, enriched) = load(&state, &ticker, &query).await?;
    Ok(Json(analysis_report(&ticker, &enriched)))
}
