//! Strong-connectivity check over the transit graph.

use std::collections::HashSet;

use crate::core::{Graph, Station};

/// Connectivity algorithm namespace
pub struct Connectivity;

impl Connectivity {
    /// Whether every station can reach every other station along directed
    /// routes.
    ///
    /// Computes the forward-reachable set of each station in turn and
    /// compares its size against the station count, so the cost is
    /// O(V * (V + E)). That is fine at the target scale of tens to low
    /// hundreds of stations. Empty and single-station graphs are strongly
    /// connected vacuously.
    pub fn is_strongly_connected(graph: &Graph) -> bool {
        let total = graph.station_count();
        if total <= 1 {
            return true;
        }

        graph
            .stations()
            .iter()
            .all(|station| Self::reachable_from(graph, station).len() == total)
    }

    fn reachable_from<'a>(graph: &'a Graph, start: &'a Station) -> HashSet<&'a Station> {
        let mut visited: HashSet<&Station> = HashSet::new();
        let mut stack: Vec<&Station> = vec![start];

        while let Some(current) = stack.pop() {
            if visited.insert(current) {
                for route in graph.outgoing(current) {
                    stack.push(route.destination());
                }
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_station("A").expect("add station in test");
        graph.add_station("B").expect("add station in test");
        graph.add_station("C").expect("add station in test");
        graph.add_route("A", "B", 5.0).expect("add route in test");
        graph.add_route("B", "C", 7.0).expect("add route in test");
        graph
    }

    #[test]
    fn test_chain_is_not_strongly_connected() {
        let graph = simple_graph();
        assert!(!Connectivity::is_strongly_connected(&graph));
    }

    #[test]
    fn test_back_routes_make_strongly_connected() {
        let mut graph = simple_graph();
        graph.add_route("C", "A", 1.0).expect("add route in test");
        graph.add_route("B", "A", 1.0).expect("add route in test");
        assert!(Connectivity::is_strongly_connected(&graph));
    }

    #[test]
    fn test_single_cycle_is_strongly_connected() {
        let mut graph = simple_graph();
        graph.add_route("C", "A", 2.0).expect("add route in test");
        assert!(Connectivity::is_strongly_connected(&graph));
    }

    #[test]
    fn test_empty_graph_is_strongly_connected() {
        assert!(Connectivity::is_strongly_connected(&Graph::new()));
    }

    #[test]
    fn test_single_station_is_strongly_connected() {
        let mut graph = Graph::new();
        graph.add_station("A").expect("add station in test");
        assert!(Connectivity::is_strongly_connected(&graph));
    }

    #[test]
    fn test_isolated_station_breaks_connectivity() {
        let mut graph = simple_graph();
        graph.add_route("C", "A", 2.0).expect("add route in test");
        graph.add_station("X").expect("add station in test");
        assert!(!Connectivity::is_strongly_connected(&graph));
    }
}
