//! The transit network graph.
//!
//! Stations are nodes, connections between them are undirected edges
//! weighted by travel time in minutes. The graph is assembled once (see
//! [`crate::builder`]) and only read afterwards, so a built [`Network`] can be
//! shared freely between threads.

mod error;
mod graph;
mod station;

pub use error::NetworkError;
pub use graph::Network;
pub use station::{Station, StationId};
