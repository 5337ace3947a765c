//! Directed weighted graph over stations and routes.
//!
//! The graph owns its stations and routes: an adjacency map from each station
//! to its outgoing routes (insertion order preserved) plus a name index for
//! O(1) lookup by station name. All mutations go through the operations here
//! so the structural invariants hold at every step:
//!
//! - every indexed station appears exactly once as an adjacency key
//! - every route's endpoints are registered stations
//! - no two routes with identical (origin, destination, weight) coexist
//!   under the same origin
//! - removing a station strips every route pointing at it

use std::collections::HashMap;

use log::debug;

use super::error::{GraphError, GraphResult};
use super::route::Route;
use super::station::Station;

/// Directed weighted graph for the transit network.
///
/// Not internally thread-safe: a single logical owner performs reads and
/// writes without interleaving. Wrap it in a
/// [`NetworkContext`](crate::services::context::NetworkContext) when sharing
/// across a concurrent boundary.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    /// Adjacency list: station -> outgoing routes, insertion order preserved.
    adjacency: HashMap<Station, Vec<Route>>,
    /// Name -> station index for O(1) lookup.
    name_index: HashMap<String, Station>,
    /// Station insertion order, backing `stations()` and deterministic
    /// iteration (the adjacency HashMap has no usable order of its own).
    order: Vec<Station>,
}

fn validate_weight(weight: f64) -> GraphResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::InvalidWeight(weight));
    }
    Ok(())
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station. Fails with `DuplicateStation` if the name is
    /// already indexed.
    pub fn add_station(&mut self, name: impl Into<String>) -> GraphResult<Station> {
        let name = name.into();
        if self.name_index.contains_key(&name) {
            return Err(GraphError::DuplicateStation(name));
        }

        let station = Station::new(name);
        self.adjacency.insert(station.clone(), Vec::new());
        self.name_index
            .insert(station.name().to_string(), station.clone());
        self.order.push(station.clone());

        debug!("added station {}", station);
        Ok(station)
    }

    /// Add a directed route between two registered stations.
    ///
    /// Fails with `InvalidWeight` for a negative or non-finite weight,
    /// `UnknownStation` if either endpoint is not indexed, and
    /// `DuplicateRoute` if an equal (origin, destination, weight) route
    /// already exists under the origin.
    pub fn add_route(&mut self, origin: &str, destination: &str, weight: f64) -> GraphResult<()> {
        validate_weight(weight)?;
        let origin = self.find_station(origin)?.clone();
        let destination = self.find_station(destination)?.clone();

        let route = Route::new(origin.clone(), destination, weight);
        let outgoing = self
            .adjacency
            .get_mut(&origin)
            .ok_or_else(|| GraphError::UnknownStation(origin.name().to_string()))?;
        if outgoing.contains(&route) {
            return Err(GraphError::DuplicateRoute {
                origin: route.origin().name().to_string(),
                destination: route.destination().name().to_string(),
                weight,
            });
        }

        debug!("added route {}", route);
        outgoing.push(route);
        Ok(())
    }

    /// Remove a station and every route touching it.
    ///
    /// Routes leaving the station go away with its adjacency entry; routes
    /// arriving at it are stripped from every other adjacency list so no
    /// dangling edge survives.
    pub fn remove_station(&mut self, name: &str) -> GraphResult<()> {
        let station = self.find_station(name)?.clone();

        for outgoing in self.adjacency.values_mut() {
            outgoing.retain(|route| route.destination() != &station);
        }
        self.adjacency.remove(&station);
        self.name_index.remove(station.name());
        self.order.retain(|s| s != &station);

        debug!("removed station {}", station);
        Ok(())
    }

    /// Remove the first route matching the exact (origin, destination,
    /// weight) triple. Fails with `RouteNotFound` if no exact match exists.
    pub fn remove_route(&mut self, route: &Route) -> GraphResult<()> {
        let outgoing = self
            .adjacency
            .get_mut(route.origin())
            .ok_or_else(|| GraphError::UnknownStation(route.origin().name().to_string()))?;

        match outgoing.iter().position(|candidate| candidate == route) {
            Some(index) => {
                outgoing.remove(index);
                debug!("removed route {}", route);
                Ok(())
            }
            None => Err(GraphError::RouteNotFound {
                origin: route.origin().name().to_string(),
                destination: route.destination().name().to_string(),
            }),
        }
    }

    /// Remove every route between the endpoints regardless of weight.
    /// Returns how many routes were removed.
    pub fn remove_routes_between(&mut self, origin: &str, destination: &str) -> GraphResult<usize> {
        let origin = self.find_station(origin)?.clone();
        let destination = self.find_station(destination)?.clone();

        let outgoing = self
            .adjacency
            .get_mut(&origin)
            .ok_or_else(|| GraphError::UnknownStation(origin.name().to_string()))?;
        let before = outgoing.len();
        outgoing.retain(|route| route.destination() != &destination);
        let removed = before - outgoing.len();

        debug!("removed {} route(s) {} -> {}", removed, origin, destination);
        Ok(removed)
    }

    /// Look up a station by name. Fails with `UnknownStation` if absent.
    pub fn find_station(&self, name: &str) -> GraphResult<&Station> {
        self.name_index
            .get(name)
            .ok_or_else(|| GraphError::UnknownStation(name.to_string()))
    }

    /// All stations, in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.order
    }

    /// Outgoing routes of a station, in insertion order.
    ///
    /// Fails with `UnknownStation` when the station is not a member, which
    /// keeps "no outgoing routes" distinguishable from "not in the graph".
    pub fn neighbors(&self, station: &Station) -> GraphResult<&[Route]> {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownStation(station.name().to_string()))
    }

    /// Infallible adjacency access for traversal code that already holds a
    /// member station; unknown stations read as no outgoing routes.
    pub(crate) fn outgoing(&self, station: &Station) -> &[Route] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any direct route origin -> destination exists, at any weight.
    pub fn has_direct_route(&self, origin: &Station, destination: &Station) -> bool {
        self.outgoing(origin)
            .iter()
            .any(|route| route.destination() == destination)
    }

    /// Update the weight of the first route between the endpoints, ignoring
    /// its current weight. Returns whether a matching route was found.
    ///
    /// This is the only sanctioned mutation of an existing route: congestion
    /// collaborators change travel times through it without ever changing
    /// which (origin, destination) pairs exist.
    pub fn update_route_weight(
        &mut self,
        origin: &str,
        destination: &str,
        new_weight: f64,
    ) -> GraphResult<bool> {
        validate_weight(new_weight)?;
        let origin = self.find_station(origin)?.clone();
        let destination = self.find_station(destination)?.clone();

        let outgoing = self
            .adjacency
            .get_mut(&origin)
            .ok_or_else(|| GraphError::UnknownStation(origin.name().to_string()))?;
        for route in outgoing.iter_mut() {
            if route.destination() == &destination {
                route.set_weight(new_weight);
                debug!("updated route {}", route);
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn station_count(&self) -> usize {
        self.order.len()
    }

    pub fn route_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
