//! Single-source shortest travel times (Dijkstra).

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::trace;

use crate::network::{Network, NetworkError, StationId};

use super::path::{Path, reconstruct_path};

/// Shortest travel time to a station, in minutes.
///
/// `Finite` orders before `Infinite`, so unreachable stations compare
/// greater than any reachable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    /// Returns the distance in minutes, or `None` if unreachable.
    pub fn minutes(self) -> Option<u64> {
        match self {
            Distance::Finite(m) => Some(m),
            Distance::Infinite => None,
        }
    }

    /// Returns true if the station is reachable.
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(m) => write!(f, "{m}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Distance from a fixed source to every station, indexed by [`StationId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap(Vec<Distance>);

impl DistanceMap {
    /// A map with every station unreachable.
    pub(crate) fn unreachable(len: usize) -> Self {
        Self(vec![Distance::Infinite; len])
    }

    /// Distance to `station`; `Infinite` for ids outside the map.
    pub fn get(&self, station: StationId) -> Distance {
        self.0.get(station.0).copied().unwrap_or(Distance::Infinite)
    }

    pub(crate) fn set(&mut self, station: StationId, minutes: u64) {
        self.0[station.0] = Distance::Finite(minutes);
    }

    /// `(station, distance)` pairs in station order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, Distance)> + '_ {
        self.0.iter().enumerate().map(|(i, &d)| (StationId(i), d))
    }

    /// Returns the number of stations covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map covers no stations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The station preceding each station on its shortest path from a fixed
/// source. The source itself and unreached stations have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap(Vec<Option<StationId>>);

impl PredecessorMap {
    /// A map with no predecessors recorded.
    pub(crate) fn empty(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Predecessor of `station`, if any.
    pub fn get(&self, station: StationId) -> Option<StationId> {
        self.0.get(station.0).copied().flatten()
    }

    pub(crate) fn set(&mut self, station: StationId, previous: StationId) {
        self.0[station.0] = Some(previous);
    }

    /// Returns the number of stations covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map covers no stations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a single-source search: distances and the links to rebuild
/// every shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: StationId,
    pub distances: DistanceMap,
    pub predecessors: PredecessorMap,
}

impl ShortestPaths {
    /// Shortest travel time to `station`.
    pub fn distance_to(&self, station: StationId) -> Distance {
        self.distances.get(station)
    }

    /// Shortest path to `station`, or `None` if it is unreachable.
    pub fn path_to(&self, station: StationId) -> Option<Path> {
        reconstruct_path(&self.predecessors, self.source, station)
    }
}

/// Shortest travel times from the named station to every station.
pub fn dijkstra(network: &Network, source: &str) -> Result<ShortestPaths, NetworkError> {
    let source = network.id(source)?;
    shortest_paths_from(network, source)
}

/// Shortest travel times from `source` to every station.
///
/// The frontier is a binary heap that may hold several entries per station;
/// an entry whose distance exceeds the recorded best is stale and skipped.
/// Ties pop in station-id order, so results are reproducible for a given
/// network.
///
/// Fails with [`NetworkError::UnknownStation`] for an id this network did not
/// issue, and with [`NetworkError::InvalidWeight`] on a zero travel time.
pub fn shortest_paths_from(
    network: &Network,
    source: StationId,
) -> Result<ShortestPaths, NetworkError> {
    let len = network.len();
    if source.0 >= len {
        return Err(NetworkError::UnknownStation(source.to_string()));
    }

    let mut distances = DistanceMap::unreachable(len);
    let mut predecessors = PredecessorMap::empty(len);
    let mut frontier = BinaryHeap::new();

    distances.set(source, 0);
    frontier.push(Reverse((0u64, source)));

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(Reverse((dist, station))) = frontier.pop() {
        if Distance::Finite(dist) > distances.get(station) {
            stale += 1;
            continue;
        }
        settled += 1;

        for &(next, minutes) in network.connections(station) {
            if minutes == 0 {
                return Err(NetworkError::InvalidWeight {
                    from: network.name(station).to_string(),
                    to: network.name(next).to_string(),
                    minutes,
                });
            }

            let candidate = dist + u64::from(minutes);
            if Distance::Finite(candidate) < distances.get(next) {
                distances.set(next, candidate);
                predecessors.set(next, station);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    trace!(
        source = %network.name(source),
        settled,
        stale,
        "Dijkstra complete"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
