//! Station identifiers and metadata.

use std::collections::BTreeSet;
use std::fmt;

/// Index of a station within a [`Network`](super::Network).
///
/// Indices are handed out in insertion order and are only meaningful for the
/// network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station and the set of lines calling at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub lines: BTreeSet<String>,
}

impl Station {
    /// Create a station served by no lines yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: BTreeSet::new(),
        }
    }

    /// Check whether the given line calls here.
    pub fn serves(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Check whether some line calls at both stations.
    ///
    /// A connection between two stations that share no line is a transfer.
    pub fn shares_line_with(&self, other: &Station) -> bool {
        !self.lines.is_disjoint(&other.lines)
    }
}
