//! Dijkstra shortest path over the transit graph.
//!
//! Single-source single-target shortest path by cumulative travel time.
//! Weights must be non-negative; the graph enforces that on every insert and
//! update, so the precondition holds for any graph built through its API.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::trace;

use crate::core::{Graph, GraphResult, Station};

/// Outcome of a shortest-path query.
///
/// An unreachable destination is a regular result, not an error: only
/// malformed input (an unknown station) fails the query itself.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    /// Stations from origin to destination inclusive, plus the summed travel
    /// time along them.
    Reached {
        stations: Vec<Station>,
        total_time: f64,
    },
    /// No directed path connects the pair.
    Unreachable,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Reached { .. })
    }

    /// Travel time of the path, or infinity when unreachable.
    pub fn total_time(&self) -> f64 {
        match self {
            PathResult::Reached { total_time, .. } => *total_time,
            PathResult::Unreachable => f64::INFINITY,
        }
    }

    pub fn stations(&self) -> Option<&[Station]> {
        match self {
            PathResult::Reached { stations, .. } => Some(stations),
            PathResult::Unreachable => None,
        }
    }
}

/// Priority-queue entry: station keyed by its tentative travel time, with the
/// station name as tie-breaker so equal times pop in deterministic order.
#[derive(Debug, Clone)]
struct HeapEntry {
    time: f64,
    station: Station,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and we want the
        // smallest time (then lexicographically first name) popped first.
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path algorithm namespace
pub struct Dijkstra;

impl Dijkstra {
    /// Compute the minimum-total-time path from `origin` to `destination`.
    ///
    /// Fails with `UnknownStation` when either endpoint is not a member of
    /// the graph. Origin equal to destination yields the single-station path
    /// with time 0. Stale heap entries superseded by a better relaxation are
    /// discarded lazily on pop via the visited set, and the search stops as
    /// soon as the destination pops.
    pub fn shortest_path(
        graph: &Graph,
        origin: &Station,
        destination: &Station,
    ) -> GraphResult<PathResult> {
        // Membership check up front; also surfaces UnknownStation for the
        // destination before any work happens.
        graph.neighbors(origin)?;
        graph.neighbors(destination)?;

        let mut times: HashMap<&Station, f64> = graph
            .stations()
            .iter()
            .map(|station| (station, f64::INFINITY))
            .collect();
        let mut predecessors: HashMap<&Station, &Station> = HashMap::new();
        let mut visited: HashSet<&Station> = HashSet::new();
        let mut to_visit: BinaryHeap<HeapEntry> = BinaryHeap::new();

        times.insert(origin, 0.0);
        to_visit.push(HeapEntry {
            time: 0.0,
            station: origin.clone(),
        });

        while let Some(HeapEntry { time, station }) = to_visit.pop() {
            if visited.contains(&station) {
                continue;
            }
            // Reborrow from the graph so the key outlives the popped entry.
            let current = graph.find_station(station.name())?;
            visited.insert(current);

            if current == destination {
                break;
            }

            for route in graph.outgoing(current) {
                let neighbor = route.destination();
                let tentative = time + route.weight();
                let known = times
                    .get(neighbor)
                    .copied()
                    .unwrap_or(f64::INFINITY);
                if tentative < known {
                    let neighbor = graph.find_station(neighbor.name())?;
                    times.insert(neighbor, tentative);
                    predecessors.insert(neighbor, current);
                    to_visit.push(HeapEntry {
                        time: tentative,
                        station: neighbor.clone(),
                    });
                }
            }
        }

        let total_time = times.get(destination).copied().unwrap_or(f64::INFINITY);
        if total_time.is_infinite() {
            trace!("no path {} -> {}", origin, destination);
            return Ok(PathResult::Unreachable);
        }

        // Walk predecessors backward from the destination.
        let mut stations = vec![destination.clone()];
        let mut current = destination;
        while let Some(&predecessor) = predecessors.get(current) {
            stations.push(predecessor.clone());
            current = predecessor;
        }
        stations.reverse();

        trace!(
            "path {} -> {}: {} stop(s), time {}",
            origin,
            destination,
            stations.len(),
            total_time
        );
        Ok(PathResult::Reached {
            stations,
            total_time,
        })
    }
}
