use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Unique identifier for a flight record.
pub type FlightId = Uuid;

/// String identifier for an airport node, derived from flight endpoints.
///
/// Codes are opaque: the ledger only requires them to be non-blank.
pub type AirportCode = String;

/// A single flight record: one directed, weighted edge in the route graph.
///
/// Flights are never hard-deleted; a populated `deleted_at` marks the record
/// as logically absent from every snapshot the graph builder sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: FlightId,
    pub flight_name: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Flight {
    /// Validate and assemble a new flight record, generating an id when the
    /// caller does not supply one.
    pub fn new(
        id: Option<FlightId>,
        flight_name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: f64,
    ) -> Result<Self> {
        let flight_name = non_blank(flight_name.into(), "name")?;
        let origin = non_blank(origin.into(), "origin")?;
        let destination = non_blank(destination.into(), "destination")?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::InvalidCost { cost });
        }

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            flight_name,
            origin,
            destination,
            cost,
            created_at: Some(Utc::now()),
            deleted_at: None,
        })
    }

    /// Whether this flight participates in route graphs.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

fn non_blank(value: String, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MissingFlightField { field });
    }
    Ok(value)
}
