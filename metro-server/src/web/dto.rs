//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Network, NetworkError};
use crate::planner::Path;

/// How a route should be chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    /// Least total travel time
    #[default]
    Fastest,
    /// Fewest connections
    Bfs,
    /// Any route, by depth-first search
    Dfs,
}

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Search mode (defaults to fastest)
    pub mode: Option<RouteMode>,
}

/// A route through the network.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Stations visited, origin first
    pub stations: Vec<String>,

    /// Number of connections travelled
    pub hops: usize,

    /// Total travel time in minutes
    pub total_mins: u64,

    /// Number of line changes
    pub changes: usize,
}

impl RouteResult {
    /// Summarise a path found in `network`.
    pub fn from_path(path: &Path, network: &Network) -> Result<Self, NetworkError> {
        Ok(Self {
            stations: path.names(network).into_iter().map(String::from).collect(),
            hops: path.hops(),
            total_mins: path.total_time(network)?,
            changes: path.line_changes(network),
        })
    }
}

/// Response for a route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Search mode used
    pub mode: RouteMode,

    /// The route, or null if the stations are not connected
    pub route: Option<RouteResult>,
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Lines calling at the station
    pub lines: Vec<String>,

    /// Number of connections
    pub degree: usize,
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Stations in network order
    pub stations: Vec<StationResult>,
}

/// Query for the network summary.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// Number of best-connected stations to list (default 10)
    pub top: Option<usize>,
}

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
