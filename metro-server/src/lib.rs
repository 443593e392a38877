//! Metro route planner.
//!
//! Models a metro network as an undirected graph of stations weighted by
//! travel time and answers: "how do I get from here to there?", either by
//! fewest connections or by least travel time.

pub mod analysis;
pub mod builder;
pub mod config;
pub mod network;
pub mod planner;
pub mod web;
