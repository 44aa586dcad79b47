use std::fmt::Write;

use serde::Serialize;

use crate::flight::{AirportCode, FlightId};
use crate::routing::RoutePlan;

/// One leg of a resolved route, annotated for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub flight: FlightId,
    pub flight_name: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub cost: f64,
}

/// Structured representation of a resolved route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub legs: Vec<RouteLeg>,
    pub total_cost: f64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with one entry per flight leg.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let legs = plan
            .flights
            .iter()
            .enumerate()
            .map(|(index, flight)| RouteLeg {
                index: index + 1,
                flight: flight.id,
                flight_name: flight.flight_name.clone(),
                origin: flight.origin.clone(),
                destination: flight.destination.clone(),
                cost: flight.cost,
            })
            .collect();

        Self {
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            legs,
            total_cost: plan.total_cost,
        }
    }

    /// Render the summary as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the summary as plain text, one line per leg.
    pub fn render_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Cheapest route {} -> {} ({} legs)",
            self.origin,
            self.destination,
            self.legs.len()
        );
        for leg in &self.legs {
            let _ = writeln!(
                out,
                "{:>3}. {} {} -> {} ({:.2})",
                leg.index, leg.flight_name, leg.origin, leg.destination, leg.cost
            );
        }
        let _ = writeln!(out, "Total cost: {:.2}", self.total_cost);
        out
    }
}
