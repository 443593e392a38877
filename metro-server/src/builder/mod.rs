//! Network construction from route definitions.
//!
//! Each route contributes a hop connection between every pair of adjacent
//! stations, and each transfer contributes a connection weighted by the
//! (longer) line-change time. Stations are tagged with every route calling
//! at them.

mod config;
mod kyiv;
mod spec;

pub use config::NetworkConfig;
pub use kyiv::kyiv_metro;
pub use spec::{LoadError, NetworkSpec, RouteDef};

use tracing::{debug, warn};

use crate::network::{Network, NetworkError};

/// Errors from building a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A route must call at least at one station
    #[error("route {0} has no stations")]
    EmptyRoute(String),

    /// A transfer must join two distinct stations
    #[error("invalid transfer between {0} and {1}")]
    InvalidTransfer(String, String),

    /// Underlying graph constraint violated
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Build a network from route definitions.
///
/// Routes are applied in order, then transfers. Building the same spec twice
/// yields networks with identical stations, connections and times.
///
/// A transfer naming a station that no route calls at still creates that
/// station (with no lines).
pub fn build_network(spec: &NetworkSpec, config: &NetworkConfig) -> Result<Network, BuildError> {
    let mut network = Network::new();

    for route in &spec.routes {
        if route.stations.is_empty() {
            return Err(BuildError::EmptyRoute(route.name.clone()));
        }

        for station in &route.stations {
            network.tag(station, &route.name);
        }

        for pair in route.stations.windows(2) {
            network.add_edge(&pair[0], &pair[1], config.hop_mins)?;
        }

        debug!(
            route = %route.name,
            stations = route.stations.len(),
            "Added route"
        );
    }

    for (from, to) in &spec.transfers {
        if from == to {
            return Err(BuildError::InvalidTransfer(from.clone(), to.clone()));
        }
        for station in [from, to] {
            if !network.contains(station) {
                warn!(station = %station, "Transfer names a station on no route");
            }
        }
        network.add_edge(from, to, config.transfer_mins)?;
    }

    debug!(
        stations = network.len(),
        connections = network.edge_count(),
        "Network built"
    );

    Ok(network)
}
