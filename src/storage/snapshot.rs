//! JSON snapshot interchange for the transit network.
//!
//! The wire shape is a list of station names plus a list of routes whose
//! endpoints must reference names in that list:
//!
//! ```json
//! {
//!   "stations": ["A", "B"],
//!   "routes": [{ "origin": "A", "destination": "B", "weight": 5.0 }]
//! }
//! ```
//!
//! Loading applies `add_station`/`add_route` in order and surfaces the same
//! failure conditions as the graph operations themselves; exporting reflects
//! current stations and routes in iteration order.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Graph, GraphError, GraphResult, DEFAULT_WEIGHT};

fn default_route_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// One route entry in a snapshot. An omitted weight reads as the default
/// travel time of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    #[serde(default = "default_route_weight")]
    pub weight: f64,
}

/// Serializable snapshot of a transit network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub stations: Vec<String>,
    pub routes: Vec<RouteRecord>,
}

impl NetworkSnapshot {
    /// Export the current graph in iteration order.
    pub fn capture(graph: &Graph) -> Self {
        let stations: Vec<String> = graph
            .stations()
            .iter()
            .map(|station| station.name().to_string())
            .collect();

        let mut routes = Vec::new();
        for station in graph.stations() {
            for route in graph.outgoing(station) {
                routes.push(RouteRecord {
                    origin: route.origin().name().to_string(),
                    destination: route.destination().name().to_string(),
                    weight: route.weight(),
                });
            }
        }

        Self { stations, routes }
    }

    /// Build a graph from the snapshot, applying stations then routes in
    /// order. A route referencing a name missing from `stations` fails with
    /// `UnknownStation`, exactly as a direct `add_route` call would.
    pub fn build_graph(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for name in &self.stations {
            graph.add_station(name.clone())?;
        }
        for record in &self.routes {
            graph.add_route(&record.origin, &record.destination, record.weight)?;
        }
        Ok(graph)
    }
}

/// Load a graph from a JSON snapshot file.
pub fn load_json(path: impl AsRef<Path>) -> GraphResult<Graph> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let snapshot: NetworkSnapshot =
        serde_json::from_str(&content).map_err(|e| GraphError::Serialization(e.to_string()))?;
    let graph = snapshot.build_graph()?;

    info!(
        "loaded network from {}: {} station(s), {} route(s)",
        path.display(),
        graph.station_count(),
        graph.route_count()
    );
    Ok(graph)
}

/// Save the graph to a JSON snapshot file.
pub fn save_json(graph: &Graph, path: impl AsRef<Path>) -> GraphResult<()> {
    let path = path.as_ref();
    let snapshot = NetworkSnapshot::capture(graph);
    let content = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| GraphError::Serialization(e.to_string()))?;
    fs::write(path, content)?;

    info!("saved network to {}", path.display());
    Ok(())
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
    fn test_capture_preserves_iteration_order() {
        let snapshot = NetworkSnapshot::capture(&simple_graph());

        assert_eq!(snapshot.stations, vec!["A", "B", "C"]);
        assert_eq!(
            snapshot.routes,
            vec![
                RouteRecord {
                    origin: "A".to_string(),
                    destination: "B".to_string(),
                    weight: 5.0,
                },
                RouteRecord {
                    origin: "B".to_string(),
                    destination: "C".to_string(),
                    weight: 7.0,
                },
            ]
        );
    }

    #[test]
    fn test_build_graph_round_trip() {
        let original = simple_graph();
        let rebuilt = NetworkSnapshot::capture(&original)
            .build_graph()
            .expect("build in test");

        assert_eq!(rebuilt.station_count(), original.station_count());
        assert_eq!(rebuilt.route_count(), original.route_count());
        assert_eq!(
            NetworkSnapshot::capture(&rebuilt),
            NetworkSnapshot::capture(&original)
        );
    }

    #[test]
    fn test_build_graph_unknown_route_endpoint() {
        let snapshot = NetworkSnapshot {
            stations: vec!["A".to_string()],
            routes: vec![RouteRecord {
                origin: "A".to_string(),
                destination: "Z".to_string(),
                weight: 1.0,
            }],
        };

        assert!(matches!(
            snapshot.build_graph(),
            Err(GraphError::UnknownStation(name)) if name == "Z"
        ));
    }

    #[test]
    fn test_build_graph_duplicate_station() {
        let snapshot = NetworkSnapshot {
            stations: vec!["A".to_string(), "A".to_string()],
            routes: vec![],
        };

        assert!(matches!(
            snapshot.build_graph(),
            Err(GraphError::DuplicateStation(_))
        ));
    }

    #[test]
    fn test_omitted_weight_defaults_to_one() {
        let json = r#"{
            "stations": ["A", "B"],
            "routes": [{ "origin": "A", "destination": "B" }]
        }"#;
        let snapshot: NetworkSnapshot =
            serde_json::from_str(json).expect("deserialize in test");

        assert_eq!(snapshot.routes[0].weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_json_field_names() {
        let snapshot = NetworkSnapshot::capture(&simple_graph());
        let json = serde_json::to_string(&snapshot).expect("serialize in test");

        assert!(json.contains("\"stations\""));
        assert!(json.contains("\"routes\""));
        assert!(json.contains("\"origin\""));
        assert!(json.contains("\"destination\""));
        assert!(json.contains("\"weight\""));
    }
}
