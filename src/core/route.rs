//! Route type: a directed, weighted edge between two stations.

use std::fmt;

use super::station::Station;

/// Travel time assigned to a route when the caller does not supply one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed, timed connection between two stations.
///
/// Direction matters: a route covers origin -> destination only, and a return
/// trip needs a separate route. Equality is by the full (origin, destination,
/// weight) triple, so two routes between the same pair with different weights
/// are distinct entries.
///
/// The weight is mutable in place through `Graph::update_route_weight`, which
/// makes route equality unstable under mutation. `Route` deliberately does
/// not implement `Hash`: containers that need a route index must key on the
/// stable (origin name, destination name) pair instead of the route value.
#[derive(Debug, Clone)]
pub struct Route {
    origin: Station,
    destination: Station,
    weight: f64,
}

impl Route {
    pub fn new(origin: Station, destination: Station, weight: f64) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    pub fn origin(&self) -> &Station {
        &self.origin
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.weight == other.weight
    }
}

// Weights are validated finite and non-negative by the graph, so the
// reflexivity `Eq` requires holds (no NaN weights reach a stored route).
impl Eq for Route {}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.weight)
    }
}
