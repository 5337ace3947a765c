//! Core data model: stations, routes and the network graph.

pub mod error;
pub mod graph;
pub mod route;
pub mod station;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use route::{Route, DEFAULT_WEIGHT};
pub use station::Station;
