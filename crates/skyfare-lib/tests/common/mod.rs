//! Shared fixture helpers for integration tests.

use chrono::Utc;
use skyfare_lib::Flight;

/// Build an active flight with a generated id.
pub fn flight(name: &str, origin: &str, destination: &str, cost: f64) -> Flight {
    Flight::new(None, name, origin, destination, cost).expect("valid fixture flight")
}

/// Build a flight that is already soft-deleted.
#[allow(dead_code)]
pub fn deleted_flight(name: &str, origin: &str, destination: &str, cost: f64) -> Flight {
    let mut flight = flight(name, origin, destination, cost);
    flight.deleted_at = Some(Utc::now());
    flight
}
