//! Query algorithms over the transit graph.

pub mod connectivity;
pub mod cycle_detection;
pub mod dijkstra;
pub mod suggestions;

pub use connectivity::Connectivity;
pub use cycle_detection::CycleDetection;
pub use dijkstra::{Dijkstra, PathResult};
pub use suggestions::{ConnectionAdvisor, Suggestion};
