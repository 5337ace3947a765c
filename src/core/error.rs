//! Unified error type for the transit graph core.
//!
//! All failure conditions are local and caller-correctable; they are signaled
//! synchronously to the operation's caller and never retried internally.
//! An unreachable shortest-path query is NOT an error (see
//! `services::algorithm::dijkstra::PathResult`).

use thiserror::Error;

/// Unified error type for graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("station '{0}' is already in the network")]
    DuplicateStation(String),

    #[error("no station named '{0}' in the network")]
    UnknownStation(String),

    #[error("route {origin} -> {destination} (weight {weight}) is already in the network")]
    DuplicateRoute {
        origin: String,
        destination: String,
        weight: f64,
    },

    #[error("no route {origin} -> {destination} in the network")]
    RouteNotFound {
        origin: String,
        destination: String,
    },

    #[error("invalid route weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Unified result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
