use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::flight::{AirportCode, Flight};
use crate::graph::build_graph;
use crate::ledger::FlightLedger;
use crate::path::find_cheapest_path;

/// Cheapest route between two airports, resolved against one snapshot.
///
/// A plan is a transient computed value: it is never persisted and is
/// recomputed on every query against the then-current flights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub flights: Vec<Flight>,
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn leg_count(&self) -> usize {
        self.flights.len()
    }
}

/// Find the cheapest route between two airports.
///
/// The single entry point for route queries: validates the endpoints, takes
/// a snapshot from the ledger, builds the graph, runs the solver, and
/// assembles the flight records for the winning path.
///
/// Errors are typed by fault domain: blank endpoints are a validation
/// failure, an unreachable destination (or a degenerate `origin ==
/// destination` query) is [`Error::RouteNotFound`], and ledger failures
/// propagate unchanged so callers never mistake a storage fault for a
/// missing route.
pub fn find_cheapest_route(
    ledger: &dyn FlightLedger,
    origin: &str,
    destination: &str,
) -> Result<RoutePlan> {
    // Validate before touching the ledger: bad input must never surface as
    // an infrastructure failure.
    validate_endpoints(origin, destination)?;

    let snapshot = ledger.active_flights()?;
    find_cheapest_route_in(&snapshot, origin, destination)
}

/// Resolve the cheapest route within an already-fetched snapshot.
///
/// Useful when a caller batches several queries against one consistent view
/// of the flights.
pub fn find_cheapest_route_in(
    snapshot: &[Flight],
    origin: &str,
    destination: &str,
) -> Result<RoutePlan> {
    validate_endpoints(origin, destination)?;

    let graph = build_graph(snapshot);
    let Some(path) = find_cheapest_path(&graph, origin, destination) else {
        return Err(Error::RouteNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    };

    let by_id: HashMap<_, _> = snapshot.iter().map(|flight| (flight.id, flight)).collect();
    let mut flights = Vec::with_capacity(path.legs.len());
    for id in &path.legs {
        let flight = by_id.get(id).ok_or(Error::FlightNotFound { id: *id })?;
        flights.push((*flight).clone());
    }

    debug!(
        origin,
        destination,
        legs = flights.len(),
        total_cost = path.total_cost,
        "route resolved"
    );

    Ok(RoutePlan {
        origin: origin.to_string(),
        destination: destination.to_string(),
        flights,
        total_cost: path.total_cost,
    })
}

fn validate_endpoints(origin: &str, destination: &str) -> Result<()> {
    if origin.trim().is_empty() {
        return Err(Error::MissingAirport { field: "origin" });
    }
    if destination.trim().is_empty() {
        return Err(Error::MissingAirport {
            field: "destination",
        });
    }
    Ok(())
}
