//! Paths through the network and rebuilding them from predecessor links.

use crate::network::{Network, NetworkError, StationId};

use super::dijkstra::PredecessorMap;

/// An ordered, non-empty sequence of stations where each consecutive pair is
/// directly connected.
///
/// Searches return `Option<Path>`; `None` means no route exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    stations: Vec<StationId>,
}

impl Path {
    pub(crate) fn new(stations: Vec<StationId>) -> Self {
        debug_assert!(!stations.is_empty(), "a path visits at least one station");
        Self { stations }
    }

    /// A path that starts and ends at the same station.
    pub(crate) fn single(station: StationId) -> Self {
        Self::new(vec![station])
    }

    /// The stations visited, origin first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// First station.
    pub fn origin(&self) -> StationId {
        self.stations[0]
    }

    /// Last station.
    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Number of connections travelled.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Station names along the path.
    pub fn names<'n>(&self, network: &'n Network) -> Vec<&'n str> {
        self.stations.iter().map(|&id| network.name(id)).collect()
    }

    /// Sum of travel times along the path.
    ///
    /// Fails with [`NetworkError::NoEdge`] if two consecutive stations are not
    /// connected in `network`.
    pub fn total_time(&self, network: &Network) -> Result<u64, NetworkError> {
        self.stations
            .windows(2)
            .map(|pair| {
                network
                    .weight_between(pair[0], pair[1])
                    .map(u64::from)
                    .ok_or_else(|| NetworkError::NoEdge {
                        from: network.name(pair[0]).to_string(),
                        to: network.name(pair[1]).to_string(),
                    })
            })
            .sum()
    }

    /// Number of connections taken between stations sharing no line.
    ///
    /// This is judged from line tags, not from how a connection was built: a
    /// transfer between two stations of the same line is not a change.
    pub fn line_changes(&self, network: &Network) -> usize {
        self.stations
            .windows(2)
            .filter(|pair| {
                !network
                    .station(pair[0])
                    .shares_line_with(network.station(pair[1]))
            })
            .count()
    }

    /// Check that every consecutive pair is connected in `network`.
    pub fn is_valid(&self, network: &Network) -> bool {
        self.stations
            .windows(2)
            .all(|pair| network.weight_between(pair[0], pair[1]).is_some())
    }
}

/// Rebuild the path from `source` to `destination` by following predecessor
/// links back from the destination.
///
/// Returns `None` when the chain breaks before reaching `source`, which is
/// the case for every unreached destination. `source == destination` yields
/// the one-station path, provided the map covers that station.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: StationId,
    destination: StationId,
) -> Option<Path> {
    if destination.0 >= predecessors.len() {
        return None;
    }

    let mut stations = vec![destination];
    let mut current = destination;

    while current != source {
        current = predecessors.get(current)?;
        stations.push(current);

        // A well-formed map never revisits a station
        if stations.len() > predecessors.len() {
            return None;
        }
    }

    stations.reverse();
    Some(Path::new(stations))
}
