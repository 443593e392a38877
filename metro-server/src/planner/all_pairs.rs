//! All-pairs shortest travel times.
//!
//! Runs Dijkstra once per station. Each run only reads the network, so the
//! parallel driver hands every source to the rayon pool with no further
//! synchronisation.

use rayon::prelude::*;
use tracing::debug;

use crate::network::{Network, NetworkError, StationId};

use super::dijkstra::{Distance, DistanceMap, shortest_paths_from};
use super::path::Path;

/// Shortest distances and paths between every ordered pair of stations.
///
/// Rows and columns follow the network's station order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairs {
    stations: Vec<StationId>,
    distances: Vec<DistanceMap>,
    paths: Vec<Vec<Option<Path>>>,
}

impl AllPairs {
    /// Stations in row/column order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Shortest travel time from `from` to `to`.
    pub fn distance(&self, from: StationId, to: StationId) -> Distance {
        self.distances
            .get(from.0)
            .map_or(Distance::Infinite, |row| row.get(to))
    }

    /// Shortest path from `from` to `to`, or `None` if unreachable.
    pub fn path(&self, from: StationId, to: StationId) -> Option<&Path> {
        self.paths.get(from.0)?.get(to.0)?.as_ref()
    }

    /// Distances from `from` to every station.
    pub fn distances_from(&self, from: StationId) -> Option<&DistanceMap> {
        self.distances.get(from.0)
    }
}

type Row = (DistanceMap, Vec<Option<Path>>);

fn row(network: &Network, source: StationId) -> Result<Row, NetworkError> {
    let tree = shortest_paths_from(network, source)?;
    let paths = network.station_ids().map(|to| tree.path_to(to)).collect();
    Ok((tree.distances, paths))
}

fn assemble(network: &Network, rows: Vec<Row>) -> AllPairs {
    let (distances, paths): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    AllPairs {
        stations: network.station_ids().collect(),
        distances,
        paths,
    }
}

/// Shortest paths between every pair of stations, one source at a time.
pub fn all_pairs_shortest_paths(network: &Network) -> Result<AllPairs, NetworkError> {
    let rows = network
        .station_ids()
        .map(|source| row(network, source))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(stations = network.len(), "All-pairs shortest paths computed");
    Ok(assemble(network, rows))
}

/// Same result as [`all_pairs_shortest_paths`], with sources spread over the
/// rayon thread pool.
pub fn all_pairs_shortest_paths_par(network: &Network) -> Result<AllPairs, NetworkError> {
    let rows = (0..network.len())
        .into_par_iter()
        .map(|i| row(network, StationId(i)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        stations = network.len(),
        threads = rayon::current_num_threads(),
        "All-pairs shortest paths computed in parallel"
    );
    Ok(assemble(network, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Network {
        let mut n = Network::new();
        n.add_edge("A", "B", 3).unwrap();
        n.add_edge("B", "C", 3).unwrap();
        n.add_edge("C", "D", 3).unwrap();
        n.add_edge("D", "A", 4).unwrap();
        n.add_edge("X", "Y", 2).unwrap();
        n
    }

    fn id(n: &Network, name: &str) -> StationId {
        n.id(name).unwrap()
    }

    #[test]
    fn covers_every_pair() {
        let n = network();
        let all = all_pairs_shortest_paths(&n).unwrap();

        assert_eq!(all.stations().len(), 6);
        for &from in all.stations() {
            assert_eq!(all.distances_from(from).unwrap().len(), 6);
            assert_eq!(all.distance(from, from), Distance::Finite(0));
            assert_eq!(all.path(from, from).unwrap().stations(), &[from]);
        }
    }

    #[test]
    fn matches_square_distances() {
        let n = network();
        let all = all_pairs_shortest_paths(&n).unwrap();

        assert_eq!(all.distance(id(&n, "A"), id(&n, "C")), Distance::Finite(6));
        assert_eq!(all.distance(id(&n, "C"), id(&n, "A")), Distance::Finite(6));
        assert_eq!(all.distance(id(&n, "B"), id(&n, "D")), Distance::Finite(6));
        assert_eq!(
            all.path(id(&n, "A"), id(&n, "D")).unwrap().names(&n),
            vec!["A", "D"]
        );
    }

    #[test]
    fn disconnected_pairs() {
        let n = network();
        let all = all_pairs_shortest_paths(&n).unwrap();

        assert_eq!(all.distance(id(&n, "A"), id(&n, "X")), Distance::Infinite);
        assert_eq!(all.path(id(&n, "Y"), id(&n, "B")), None);
        assert_eq!(all.distance(StationId(40), id(&n, "A")), Distance::Infinite);
        assert_eq!(all.path(StationId(40), id(&n, "A")), None);
    }

    #[test]
    fn parallel_matches_sequential() {
        let n = network();
        assert_eq!(
            all_pairs_shortest_paths_par(&n).unwrap(),
            all_pairs_shortest_paths(&n).unwrap()
        );
    }

    #[test]
    fn empty_network() {
        let all = all_pairs_shortest_paths(&Network::new()).unwrap();
        assert!(all.stations().is_empty());
    }
}
