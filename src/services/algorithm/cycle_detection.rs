//! Directed-cycle detection over the transit graph.

use std::collections::HashSet;

use crate::core::{Graph, Station};

/// Cycle detection algorithm namespace
pub struct CycleDetection;

impl CycleDetection {
    /// Whether the graph contains at least one directed cycle.
    ///
    /// Depth-first traversal from every unvisited station, with a global
    /// visited set and a per-traversal on-path set: a route back to a station
    /// still on the current path is a back edge and answers true immediately.
    /// The DFS runs on an explicit stack of (station, next-route-index)
    /// frames, so arbitrarily long chains cannot overflow the call stack.
    /// An empty graph has no cycle.
    pub fn has_cycle(graph: &Graph) -> bool {
        let mut visited: HashSet<&Station> = HashSet::new();
        let mut on_path: HashSet<&Station> = HashSet::new();

        for start in graph.stations() {
            if visited.contains(start) {
                continue;
            }

            let mut stack: Vec<(&Station, usize)> = vec![(start, 0)];
            visited.insert(start);
            on_path.insert(start);

            while let Some(frame) = stack.last_mut() {
                let station = frame.0;
                let routes = graph.outgoing(station);

                if frame.1 < routes.len() {
                    let next = routes[frame.1].destination();
                    frame.1 += 1;

                    if on_path.contains(next) {
                        return true;
                    }
                    if !visited.contains(next) {
                        visited.insert(next);
                        on_path.insert(next);
                        stack.push((next, 0));
                    }
                } else {
                    // Unwind: the station leaves the current path but stays
                    // globally visited.
                    on_path.remove(station);
                    stack.pop();
                }
            }
        }

        false
    }
}
