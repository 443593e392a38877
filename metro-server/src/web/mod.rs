//! Web layer for the metro planner.
//!
//! Provides JSON endpoints for listing stations, finding routes and
//! summarising the network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
