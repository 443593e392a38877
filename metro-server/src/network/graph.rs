//! Undirected, weighted station graph.

use std::collections::{BTreeSet, HashMap};

use super::error::NetworkError;
use super::station::{Station, StationId};

/// An undirected graph of stations connected by timed links.
///
/// Invariants enforced on insertion:
/// - no station is connected to itself
/// - at most one connection per pair of stations (re-adding overwrites the time)
/// - every travel time is strictly positive
///
/// Stations and each station's neighbours are enumerated in insertion order,
/// so two networks built from the same input enumerate identically.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<String, StationId>,
    /// Neighbours of each station with the travel time in minutes.
    /// Every connection is stored once in each direction.
    adjacency: Vec<Vec<(StationId, u32)>>,
    edge_count: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of the named station, inserting it if absent.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.stations.push(Station::new(name));
        self.adjacency.push(Vec::new());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Record that `line` calls at the named station, inserting the station if absent.
    pub fn tag(&mut self, name: &str, line: &str) -> StationId {
        let id = self.add_station(name);
        self.stations[id.0].lines.insert(line.to_string());
        id
    }

    /// Insert or update the connection between `from` and `to`.
    ///
    /// Missing stations are created. Connecting a station to itself is
    /// rejected with [`NetworkError::SelfLoop`] and a zero travel time with
    /// [`NetworkError::InvalidWeight`]; in both cases the network is unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, minutes: u32) -> Result<(), NetworkError> {
        if from == to {
            return Err(NetworkError::SelfLoop(from.to_string()));
        }
        if minutes == 0 {
            return Err(NetworkError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                minutes,
            });
        }

        let a = self.add_station(from);
        let b = self.add_station(to);
        let inserted = upsert(&mut self.adjacency[a.0], b, minutes);
        upsert(&mut self.adjacency[b.0], a, minutes);
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Look up a station id by name.
    pub fn id(&self, name: &str) -> Result<StationId, NetworkError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Check whether the named station exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a station by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// Get a station's name by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn name(&self, id: StationId) -> &str {
        &self.stations[id.0].name
    }

    /// All station names in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(|s| s.name.as_str())
    }

    /// All station ids in insertion order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> {
        (0..self.stations.len()).map(StationId)
    }

    /// Names of the stations directly connected to `name`.
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>, NetworkError> {
        let id = self.id(name)?;
        Ok(self
            .connections(id)
            .iter()
            .map(|&(next, _)| self.name(next))
            .collect())
    }

    /// Neighbours of a station with their travel times.
    ///
    /// Returns an empty slice for ids this network did not issue.
    pub fn connections(&self, id: StationId) -> &[(StationId, u32)] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Travel time of the connection between two named stations.
    pub fn edge_weight(&self, from: &str, to: &str) -> Result<u32, NetworkError> {
        let a = self.id(from)?;
        let b = self.id(to)?;
        self.weight_between(a, b).ok_or_else(|| NetworkError::NoEdge {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Travel time between two stations by id, if they are connected.
    pub fn weight_between(&self, a: StationId, b: StationId) -> Option<u32> {
        self.connections(a)
            .iter()
            .find(|&&(next, _)| next == b)
            .map(|&(_, minutes)| minutes)
    }

    /// Lines calling at the named station.
    pub fn lines(&self, name: &str) -> Result<&BTreeSet<String>, NetworkError> {
        let id = self.id(name)?;
        Ok(&self.stations[id.0].lines)
    }

    /// Number of connections at the named station.
    pub fn degree(&self, name: &str) -> Result<usize, NetworkError> {
        let id = self.id(name)?;
        Ok(self.connections(id).len())
    }

    /// Every connection exactly once, as `(lower id, higher id, minutes)`.
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            list.iter()
                .filter(move |(next, _)| next.0 > i)
                .map(move |&(next, minutes)| (StationId(i), next, minutes))
        })
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the number of connections (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Set the time to `to` in a neighbour list. Returns true if the entry is new.
fn upsert(list: &mut Vec<(StationId, u32)>, to: StationId, minutes: u32) -> bool {
    if let Some(entry) = list.iter_mut().find(|(next, _)| *next == to) {
        entry.1 = minutes;
        return false;
    }
    list.push((to, minutes));
    true
}
