// Test-only helpers for `skyfare-lib` unit tests
#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use crate::flight::Flight;

/// Builder to create `Flight` instances in tests with sensible defaults.
pub struct FlightBuilder {
    flight: Flight,
}

impl FlightBuilder {
    #[must_use]
    pub fn new(origin: &str, destination: &str, cost: f64) -> Self {
        Self {
            flight: Flight {
                id: Uuid::new_v4(),
                flight_name: format!("{origin}-{destination}"),
                origin: origin.to_string(),
                destination: destination.to_string(),
                cost,
                created_at: Some(Utc::now()),
                deleted_at: None,
            },
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.flight.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.flight.flight_name = name.to_string();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.flight.deleted_at = Some(Utc::now());
        self
    }

    pub fn build(self) -> Flight {
        self.flight
    }
}
