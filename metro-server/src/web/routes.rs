//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, warn};

use crate::analysis::{NetworkSummary, summarize};
use crate::network::NetworkError;
use crate::planner::{bfs_path, dfs_path, dijkstra};

use super::dto::*;
use super::state::AppState;

/// Largest number of stations the analysis endpoint will rank.
const MAX_TOP: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(find_route))
        .route("/analysis", get(analysis))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station with its lines.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let network = &state.network;
    let stations = network
        .station_ids()
        .map(|id| {
            let station = network.station(id);
            StationResult {
                name: station.name.clone(),
                lines: station.lines.iter().cloned().collect(),
                degree: network.connections(id).len(),
            }
        })
        .collect();

    Json(StationsResponse { stations })
}

/// Find a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' are required".to_string(),
        });
    }

    let network = &state.network;
    let mode = req.mode.unwrap_or_default();

    let path = match mode {
        RouteMode::Fastest => {
            let tree = dijkstra(network, &req.from)?;
            tree.path_to(network.id(&req.to)?)
        }
        RouteMode::Bfs => bfs_path(network, &req.from, &req.to)?,
        RouteMode::Dfs => dfs_path(network, &req.from, &req.to)?,
    };

    let route = path
        .map(|p| RouteResult::from_path(&p, network))
        .transpose()?;

    debug!(
        from = %req.from,
        to = %req.to,
        ?mode,
        found = route.is_some(),
        "Route query"
    );

    Ok(Json(RouteResponse {
        from: req.from,
        to: req.to,
        mode,
        route,
    }))
}

/// Summarise the network's structure.
async fn analysis(
    State(state): State<AppState>,
    Query(req): Query<AnalysisRequest>,
) -> Json<NetworkSummary> {
    let top = req.top.unwrap_or(10).min(MAX_TOP);
    Json(summarize(&state.network, top))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        if e.is_not_found() {
            AppError::NotFound {
                message: e.to_string(),
            }
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
