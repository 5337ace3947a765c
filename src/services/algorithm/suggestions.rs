//! Route-addition suggestions for pairs whose detour cost exceeds a budget.

use log::debug;

use crate::core::{Graph, GraphError, GraphResult, Route, Station};

use super::dijkstra::Dijkstra;

/// A proposed direct connection, with the travel time the pair currently
/// pays (infinite when the destination is unreachable today).
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub origin: Station,
    pub destination: Station,
    pub current_time: f64,
}

/// Connection suggestion algorithm namespace
pub struct ConnectionAdvisor;

impl ConnectionAdvisor {
    /// Propose direct routes for every ordered station pair without one whose
    /// current shortest travel time exceeds `budget`.
    ///
    /// Each candidate is verified by provisionally inserting a direct route
    /// of weight = budget, recomputing the shortest time and keeping the
    /// suggestion only on strict improvement. The provisional route is
    /// removed before the keep/drop decision, so it never leaks into the
    /// graph even when the recomputation fails.
    ///
    /// Pairs are evaluated in station insertion order, and each direction is
    /// judged independently, so both (a, b) and (b, a) can appear. The whole
    /// scan costs O(V^2) shortest-path runs, a deliberate ceiling for the
    /// target scale; larger networks need batching or precomputation.
    pub fn suggest(graph: &mut Graph, budget: f64) -> GraphResult<Vec<Suggestion>> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(GraphError::InvalidWeight(budget));
        }

        let stations = graph.stations().to_vec();
        let mut suggestions = Vec::new();

        for origin in &stations {
            for destination in &stations {
                if origin == destination || graph.has_direct_route(origin, destination) {
                    continue;
                }

                let current_time =
                    Dijkstra::shortest_path(graph, origin, destination)?.total_time();
                if current_time <= budget {
                    continue;
                }

                graph.add_route(origin.name(), destination.name(), budget)?;
                let revised = Dijkstra::shortest_path(graph, origin, destination);
                graph.remove_route(&Route::new(origin.clone(), destination.clone(), budget))?;

                if revised?.total_time() < current_time {
                    suggestions.push(Suggestion {
                        origin: origin.clone(),
                        destination: destination.clone(),
                        current_time,
                    });
                }
            }
        }

        debug!(
            "suggested {} connection(s) over budget {}",
            suggestions.len(),
            budget
        );
        Ok(suggestions)
    }
}
