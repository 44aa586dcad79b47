//! skyfare library entry points.
//!
//! This crate exposes the flight ledger boundary, graph construction over a
//! snapshot of active flights, and cheapest-route search between airports.
//! Higher-level consumers (CLI, resource layers) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod flight;
pub mod graph;
pub mod ledger;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{Error, ErrorKind, Result};
pub use flight::{AirportCode, Flight, FlightId};
pub use graph::{build_graph, Edge, FlightGraph};
pub use ledger::{FlightLedger, MemoryLedger, SqliteLedger};
pub use output::{RouteLeg, RouteSummary};
pub use path::{find_cheapest_path, CheapestPath};
pub use routing::{find_cheapest_route, find_cheapest_route_in, RoutePlan};
