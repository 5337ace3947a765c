//! Storage layer: snapshot interchange for the transit graph.

pub mod snapshot;

pub use snapshot::{load_json, save_json, NetworkSnapshot, RouteRecord};
