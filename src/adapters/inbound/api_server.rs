//! Lookup API Server
//!
//! HTTP/JSON surface over the lookup service: run a lookup, fetch the
//! lookup history, and fetch a single domain in the nested detail shape.

use crate::application::LookupService;
use crate::domain::entities::LookupRecord;
use crate::domain::errors::LookupError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Lookup request body.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub domain: String,
}

/// History query parameters.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

/// History response wrapper.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<LookupRecord>,
}

/// Nested location block of the domain detail shape.
#[derive(Debug, Serialize)]
pub struct LocationBody {
    pub country: String,
    pub city: String,
    pub region: String,
}

/// Domain detail response - same underlying record as the flat lookup
/// shape, with the geo fields folded into a `location` sub-object.
#[derive(Debug, Serialize)]
pub struct DomainDetailResponse {
    pub domain: String,
    pub ip_address: String,
    pub ttl: u32,
    pub location: LocationBody,
    pub isp: String,
    pub lookup_time: String,
}

impl From<LookupRecord> for DomainDetailResponse {
    fn from(record: LookupRecord) -> Self {
        Self {
            domain: record.domain,
            ip_address: record.ip_address,
            ttl: record.ttl,
            location: LocationBody {
                country: record.country,
                city: record.city,
                region: record.region,
            },
            isp: record.isp,
            lookup_time: format!("{} UTC", record.lookup_time),
        }
    }
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API server state shared by all handlers.
#[derive(Clone)]
pub struct ApiState {
    pub lookups: Arc<LookupService>,
}

/// Build the router for the given state.
///
/// Separate from [`ApiServer::run`] so handler tests can drive it
/// without a listener.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/lookup", post(lookup_handler))
        .route("/api/history", get(history_handler))
        .route("/api/domain/:domain_name", get(domain_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API server for lookups and history.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, lookups: Arc<LookupService>) -> Self {
        Self {
            listen_addr,
            state: ApiState { lookups },
        }
    }

    /// Run the API server.
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("lookup API listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn lookup_handler(
    State(state): State<ApiState>,
    Json(req): Json<LookupRequest>,
) -> Response {
    match state.lookups.lookup(&req.domain).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => lookup_error_response(e),
    }
}

async fn history_handler(
    State(state): State<ApiState>,
    Query(params): Query<HistoryParams>,
) -> Response {
    let limit = params.limit.unwrap_or(50);

    match state.lookups.history(limit).await {
        Ok(history) => (StatusCode::OK, Json(HistoryResponse { history })).into_response(),
        Err(e) => {
            tracing::error!("history query failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to retrieve history: {e}")
                })),
            )
                .into_response()
        }
    }
}

async fn domain_handler(
    State(state): State<ApiState>,
    Path(domain_name): Path<String>,
) -> Response {
    match state.lookups.lookup(&domain_name).await {
        Ok(record) => {
            (StatusCode::OK, Json(DomainDetailResponse::from(record))).into_response()
        }
        Err(e) => lookup_error_response(e),
    }
}

/// Map the lookup error taxonomy onto HTTP statuses: validation and
/// resolution are user-correctable 400s, the rest is a 500.
fn lookup_error_response(err: LookupError) -> Response {
    match err {
        LookupError::Validation => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": err.to_string() })),
        )
            .into_response(),
        LookupError::Resolution { ref domain, .. } => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": err.to_string(),
                "domain": domain,
            })),
        )
            .into_response(),
        LookupError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
