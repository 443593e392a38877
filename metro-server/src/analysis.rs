//! Structural statistics for a network.
//!
//! Diameter, radius and betweenness count connections, not minutes.
//! Diameter and radius are only defined for a connected network.

use std::collections::VecDeque;

use serde::Serialize;

use crate::network::{Network, StationId};
use crate::planner::hop_counts;

/// A station and its number of connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDegree {
    pub station: String,
    pub degree: usize,
}

/// A station and a centrality score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationScore {
    pub station: String,
    pub score: f64,
}

/// Summary statistics for a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    /// Number of stations.
    pub stations: usize,

    /// Number of connections.
    pub connections: usize,

    /// Best-connected stations, highest degree first.
    pub busiest: Vec<StationDegree>,

    /// Stations lying on the most shortest routes, highest first.
    ///
    /// Scores are normalised by `(n - 1)(n - 2)`, the number of ordered pairs
    /// of other stations, so a star's centre scores 1.
    pub betweenness: Vec<StationScore>,

    /// Mean number of connections per station.
    pub average_degree: f64,

    /// Mean local clustering coefficient. Stations with fewer than two
    /// connections count as 0.
    pub average_clustering: f64,

    /// Share of possible station pairs that are directly connected.
    pub density: f64,

    /// Whether every station can reach every other.
    pub connected: bool,

    /// Largest hop eccentricity, if connected.
    pub diameter: Option<usize>,

    /// Smallest hop eccentricity, if connected.
    pub radius: Option<usize>,
}

/// Compute summary statistics, listing the `top` stations by degree and by
/// betweenness.
///
/// Stations with equal degree or equal score keep network order.
pub fn summarize(network: &Network, top: usize) -> NetworkSummary {
    let n = network.len();
    let edges = network.edge_count();

    let mut degrees: Vec<StationDegree> = network
        .station_ids()
        .map(|id| StationDegree {
            station: network.name(id).to_string(),
            degree: network.connections(id).len(),
        })
        .collect();
    degrees.sort_by(|a, b| b.degree.cmp(&a.degree));
    degrees.truncate(top);

    let mut betweenness: Vec<StationScore> = betweenness(network)
        .into_iter()
        .zip(network.station_ids())
        .map(|(score, id)| StationScore {
            station: network.name(id).to_string(),
            score,
        })
        .collect();
    betweenness.sort_by(|a, b| b.score.total_cmp(&a.score));
    betweenness.truncate(top);

    let average_clustering = if n == 0 {
        0.0
    } else {
        network
            .station_ids()
            .map(|id| clustering(network, id))
            .sum::<f64>()
            / n as f64
    };

    let average_degree = if n == 0 {
        0.0
    } else {
        2.0 * edges as f64 / n as f64
    };
    let density = if n < 2 {
        0.0
    } else {
        2.0 * edges as f64 / (n as f64 * (n as f64 - 1.0))
    };

    let eccentricities = eccentricities(network);

    NetworkSummary {
        stations: n,
        connections: edges,
        busiest: degrees,
        betweenness,
        average_degree,
        average_clustering,
        density,
        connected: eccentricities.is_some(),
        diameter: eccentricities.as_ref().and_then(|e| e.iter().max().copied()),
        radius: eccentricities.as_ref().and_then(|e| e.iter().min().copied()),
    }
}

/// Hop eccentricity of every station, or `None` if the network is
/// disconnected or empty.
fn eccentricities(network: &Network) -> Option<Vec<usize>> {
    if network.is_empty() {
        return None;
    }
    network
        .station_ids()
        .map(|id| {
            hop_counts(network, id)
                .into_iter()
                .try_fold(0, |max, hops| hops.map(|h| max.max(h)))
        })
        .collect()
}

/// Normalised betweenness centrality of every station, in network order.
///
/// Brandes' algorithm: one BFS per source counting shortest routes, then
/// dependencies accumulated in reverse discovery order.
fn betweenness(network: &Network) -> Vec<f64> {
    let n = network.len();
    let mut centrality = vec![0.0; n];

    for source in network.station_ids() {
        let mut order = Vec::with_capacity(n);
        let mut parents: Vec<Vec<StationId>> = vec![Vec::new(); n];
        let mut routes = vec![0.0f64; n];
        let mut depth: Vec<Option<usize>> = vec![None; n];
        routes[source.0] = 1.0;
        depth[source.0] = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(station) = queue.pop_front() {
            order.push(station);
            let Some(d) = depth[station.0] else {
                continue;
            };
            for &(next, _) in network.connections(station) {
                if depth[next.0].is_none() {
                    depth[next.0] = Some(d + 1);
                    queue.push_back(next);
                }
                if depth[next.0] == Some(d + 1) {
                    routes[next.0] += routes[station.0];
                    parents[next.0].push(station);
                }
            }
        }

        let mut dependency = vec![0.0f64; n];
        for &station in order.iter().rev() {
            for &parent in &parents[station.0] {
                dependency[parent.0] +=
                    routes[parent.0] / routes[station.0] * (1.0 + dependency[station.0]);
            }
            if station != source {
                centrality[station.0] += dependency[station.0];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for value in &mut centrality {
            *value *= scale;
        }
    }
    centrality
}

/// Share of a station's neighbour pairs that are themselves connected.
fn clustering(network: &Network, id: StationId) -> f64 {
    let neighbours: Vec<StationId> = network.connections(id).iter().map(|&(s, _)| s).collect();
    let k = neighbours.len();
    if k < 2 {
        return 0.0;
    }

    let linked = neighbours
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| neighbours[i + 1..].iter().map(move |&b| (a, b)))
        .filter(|&(a, b)| network.weight_between(a, b).is_some())
        .count();

    2.0 * linked as f64 / (k * (k - 1)) as f64
}
