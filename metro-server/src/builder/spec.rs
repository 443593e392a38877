//! Route definitions and loading them from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A named line and the stations it calls at, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub name: String,
    pub stations: Vec<String>,
}

impl RouteDef {
    /// Create a route from a name and station labels.
    pub fn new<S: Into<String>>(name: &str, stations: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.to_string(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything needed to build a [`Network`](crate::network::Network).
///
/// Serialized form:
///
/// ```json
/// {
///   "routes": [{ "name": "M1", "stations": ["A", "B"] }],
///   "transfers": [["B", "C"]]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Lines, in the order they are added to the network.
    pub routes: Vec<RouteDef>,

    /// Pairs of stations joined by a walking transfer.
    #[serde(default)]
    pub transfers: Vec<(String, String)>,
}

/// Errors that can occur when loading a network definition.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid network definition
    #[error("invalid network definition in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl NetworkSpec {
    /// Add a route.
    pub fn route<S: Into<String>>(
        mut self,
        name: &str,
        stations: impl IntoIterator<Item = S>,
    ) -> Self {
        self.routes.push(RouteDef::new(name, stations));
        self
    }

    /// Add a transfer between two stations.
    pub fn transfer(mut self, from: &str, to: &str) -> Self {
        self.transfers.push((from.to_string(), to.to_string()));
        self
    }

    /// Parse a network definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a network definition from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
