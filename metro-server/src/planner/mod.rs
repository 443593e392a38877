//! Route finding over a built [`Network`](crate::network::Network).
//!
//! Three searches are provided:
//! - breadth-first search, for the route with the fewest connections
//! - depth-first search, for any route
//! - Dijkstra, for the quickest route by travel time (single source or all pairs)
//!
//! Every search allocates its own working state, so queries can run
//! concurrently against one shared network.

mod all_pairs;
mod dijkstra;
mod path;
mod unweighted;

#[cfg(test)]
mod search_tests;

pub use all_pairs::{AllPairs, all_pairs_shortest_paths, all_pairs_shortest_paths_par};
pub use dijkstra::{
    Distance, DistanceMap, PredecessorMap, ShortestPaths, dijkstra, shortest_paths_from,
};
pub use path::{Path, reconstruct_path};
pub use unweighted::{bfs_between, bfs_path, dfs_between, dfs_path, hop_counts};
