//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::builder::NetworkConfig;

/// Default listen port on localhost.
const DEFAULT_PORT: u16 = 3000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`METRO_BIND`).
    pub bind: SocketAddr,

    /// JSON network definition to load (`METRO_NETWORK`); the built-in
    /// network is used when unset.
    pub network_path: Option<PathBuf>,

    /// Travel times (`METRO_HOP_MINUTES`, `METRO_TRANSFER_MINUTES`).
    pub network: NetworkConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = NetworkConfig::default();

        let bind = parse_or(&lookup, "METRO_BIND", || {
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        })?;
        let hop_mins = parse_or(&lookup, "METRO_HOP_MINUTES", || defaults.hop_mins)?;
        let transfer_mins = parse_or(&lookup, "METRO_TRANSFER_MINUTES", || {
            defaults.transfer_mins
        })?;
        let network_path = lookup("METRO_NETWORK")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind,
            network_path,
            network: NetworkConfig::new(hop_mins, transfer_mins),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default()),
    }
}
