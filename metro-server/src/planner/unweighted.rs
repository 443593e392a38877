//! Path finding that ignores travel times.
//!
//! Both searches allocate their own frontier and visited set per call, so
//! concurrent queries against one [`Network`] never share state.

use std::collections::VecDeque;

use tracing::trace;

use crate::network::{Network, NetworkError, StationId};

use super::dijkstra::PredecessorMap;
use super::path::{Path, reconstruct_path};

/// Breadth-first search for a path with the fewest connections.
///
/// Returns `Ok(None)` if `goal` is unreachable and
/// [`NetworkError::UnknownStation`] if either station is absent.
pub fn bfs_path(
    network: &Network,
    start: &str,
    goal: &str,
) -> Result<Option<Path>, NetworkError> {
    let start = network.id(start)?;
    let goal = network.id(goal)?;
    Ok(bfs_between(network, start, goal))
}

/// Depth-first search for any path.
///
/// The result is a valid path but not necessarily the shortest one; which
/// path is found depends on neighbour order. Returns `Ok(None)` if `goal` is
/// unreachable and [`NetworkError::UnknownStation`] if either station is absent.
pub fn dfs_path(
    network: &Network,
    start: &str,
    goal: &str,
) -> Result<Option<Path>, NetworkError> {
    let start = network.id(start)?;
    let goal = network.id(goal)?;
    Ok(dfs_between(network, start, goal))
}

/// BFS between two stations of `network`.
///
/// Stations are marked visited when discovered, so none is queued twice. The
/// search stops as soon as `goal` is discovered.
pub fn bfs_between(network: &Network, start: StationId, goal: StationId) -> Option<Path> {
    if !covers(network, start, goal) {
        return None;
    }
    if start == goal {
        return Some(Path::single(start));
    }

    let mut visited = vec![false; network.len()];
    let mut parents = PredecessorMap::empty(network.len());
    let mut queue = VecDeque::from([start]);
    visited[start.0] = true;

    while let Some(station) = queue.pop_front() {
        for &(next, _) in network.connections(station) {
            if visited[next.0] {
                continue;
            }
            visited[next.0] = true;
            parents.set(next, station);

            if next == goal {
                return reconstruct_path(&parents, start, goal);
            }
            queue.push_back(next);
        }
    }

    trace!(
        start = %network.name(start),
        goal = %network.name(goal),
        "BFS exhausted without reaching goal"
    );
    None
}

/// DFS between two stations of `network`.
///
/// Stations are marked visited only when popped, so a station may sit on the
/// stack several times; each entry remembers the station that pushed it and
/// the first entry popped fixes the station's parent.
pub fn dfs_between(network: &Network, start: StationId, goal: StationId) -> Option<Path> {
    if !covers(network, start, goal) {
        return None;
    }
    if start == goal {
        return Some(Path::single(start));
    }

    let mut visited = vec![false; network.len()];
    let mut parents = PredecessorMap::empty(network.len());
    let mut stack: Vec<(StationId, Option<StationId>)> = vec![(start, None)];

    while let Some((station, parent)) = stack.pop() {
        if visited[station.0] {
            continue;
        }
        visited[station.0] = true;

        if let Some(parent) = parent {
            parents.set(station, parent);
        }
        if station == goal {
            return reconstruct_path(&parents, start, goal);
        }

        for &(next, _) in network.connections(station) {
            if !visited[next.0] {
                stack.push((next, Some(station)));
            }
        }
    }

    trace!(
        start = %network.name(start),
        goal = %network.name(goal),
        "DFS exhausted without reaching goal"
    );
    None
}

/// Check that both ids were issued by `network`.
fn covers(network: &Network, a: StationId, b: StationId) -> bool {
    a.0 < network.len() && b.0 < network.len()
}

/// Number of connections from `source` to every station; `None` where
/// unreachable. Indexed by [`StationId`].
pub fn hop_counts(network: &Network, source: StationId) -> Vec<Option<usize>> {
    let mut hops = vec![None; network.len()];
    let Some(slot) = hops.get_mut(source.0) else {
        return hops;
    };
    *slot = Some(0);

    let mut queue = VecDeque::from([(source, 0usize)]);
    while let Some((station, depth)) = queue.pop_front() {
        for &(next, _) in network.connections(station) {
            if hops[next.0].is_none() {
                hops[next.0] = Some(depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }
    hops
}
