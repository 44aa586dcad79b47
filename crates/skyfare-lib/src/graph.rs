use std::collections::HashMap;
use std::sync::Arc;

use crate::flight::{AirportCode, Flight, FlightId};

/// Outgoing edge within the route graph.
///
/// Each edge carries the identity of the flight that produced it: multiple
/// flights between the same pair of airports stay distinct edges, and the
/// solver reports which one it chose.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub flight: FlightId,
    pub target: AirportCode,
    pub cost: f64,
}

/// Immutable adjacency structure used by the route solver.
///
/// The adjacency map is behind an `Arc`, so a built graph is cheap to clone
/// and safe to share read-only across concurrent queries; a caller that
/// caches one can refresh it by swapping in a whole new `FlightGraph`.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    adjacency: Arc<HashMap<AirportCode, Vec<Edge>>>,
}

impl FlightGraph {
    /// Return the outgoing edges for a given airport.
    pub fn neighbours(&self, airport: &str) -> &[Edge] {
        self.adjacency
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the airport appears in the graph at all.
    pub fn contains(&self, airport: &str) -> bool {
        self.adjacency.contains_key(airport)
    }

    /// Number of airports in the graph.
    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }
}

/// Build the route graph from a snapshot of flights.
///
/// Pure and side-effect-free: the builder never touches the ledger beyond
/// the slice passed in. Soft-deleted flights are skipped even if a caller
/// hands over an unfiltered snapshot, and multi-edges are all retained.
/// Every airport that appears as a destination also gets an (initially
/// empty) adjacency entry, so reachability checks see it as a known node.
pub fn build_graph(flights: &[Flight]) -> FlightGraph {
    let mut adjacency: HashMap<AirportCode, Vec<Edge>> = HashMap::new();

    for flight in flights.iter().filter(|flight| flight.is_active()) {
        adjacency
            .entry(flight.origin.clone())
            .or_default()
            .push(Edge {
                flight: flight.id,
                target: flight.destination.clone(),
                cost: flight.cost,
            });
        adjacency.entry(flight.destination.clone()).or_default();
    }

    FlightGraph {
        adjacency: Arc::new(adjacency),
    }
}
