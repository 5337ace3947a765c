//! Service layer: query algorithms and the session-facing network context.

pub mod algorithm;
pub mod context;

pub use algorithm::*;
pub use context::NetworkContext;
