//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is built before the server starts and never changes, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The network routes are planned over
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
