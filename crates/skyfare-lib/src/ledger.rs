use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::flight::{Flight, FlightId};

/// Read boundary the route core depends on.
///
/// A snapshot must be a consistent point-in-time read of the active (not
/// soft-deleted) flights; implementations must never return a partial read
/// mixing two underlying states. This is the only place the core touches IO.
pub trait FlightLedger {
    /// Return a snapshot of all active flights.
    fn active_flights(&self) -> Result<Vec<Flight>>;
}

/// SQLite-backed flight ledger.
///
/// Owns the flight lifecycle: create, soft-delete, restore. Records are never
/// hard-deleted.
#[derive(Debug)]
pub struct SqliteLedger {
    connection: Connection,
}

impl SqliteLedger {
    /// Open (creating if necessary) a ledger database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let connection = Connection::open(path)?;
        Self::with_connection(connection)
    }

    /// Open an in-process, non-persistent ledger. Useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS flights (
                id TEXT PRIMARY KEY,
                flight_name TEXT NOT NULL,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL,
                cost REAL NOT NULL,
                created_at TEXT,
                deleted_at TEXT
            )",
            [],
        )?;
        Ok(Self { connection })
    }

    /// Insert a new flight record.
    pub fn create(&self, flight: &Flight) -> Result<()> {
        self.connection.execute(
            "INSERT INTO flights (id, flight_name, origin, destination, cost, created_at, deleted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                flight.id.to_string(),
                &flight.flight_name,
                &flight.origin,
                &flight.destination,
                flight.cost,
                flight.created_at.map(|ts| ts.to_rfc3339()),
                flight.deleted_at.map(|ts| ts.to_rfc3339()),
            ),
        )?;
        debug!(id = %flight.id, origin = %flight.origin, destination = %flight.destination, "flight created");
        Ok(())
    }

    /// Fetch a single flight by identifier, soft-deleted or not.
    pub fn get(&self, id: FlightId) -> Result<Flight> {
        let mut stmt = self.connection.prepare(
            "SELECT id, flight_name, origin, destination, cost, created_at, deleted_at
             FROM flights WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map([id.to_string()], row_to_flight)?;
        match rows.next() {
            Some(flight) => Ok(flight?),
            None => Err(Error::FlightNotFound { id }),
        }
    }

    /// List every flight record, including soft-deleted ones.
    pub fn all_flights(&self) -> Result<Vec<Flight>> {
        self.query_flights(
            "SELECT id, flight_name, origin, destination, cost, created_at, deleted_at
             FROM flights ORDER BY created_at, id",
        )
    }

    /// Mark a flight as deleted without removing the record. Idempotent.
    pub fn soft_delete(&self, id: FlightId) -> Result<()> {
        let changed = self.connection.execute(
            "UPDATE flights SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
            (Utc::now().to_rfc3339(), id.to_string()),
        )?;
        if changed == 0 {
            // Either the flight is unknown or it was already deleted.
            self.get(id)?;
            debug!(%id, "flight already soft-deleted");
        } else {
            debug!(%id, "flight soft-deleted");
        }
        Ok(())
    }

    /// Clear the deletion marker on a soft-deleted flight.
    pub fn restore(&self, id: FlightId) -> Result<()> {
        let flight = self.get(id)?;
        if flight.is_active() {
            return Err(Error::FlightNotDeleted { id });
        }
        self.connection.execute(
            "UPDATE flights SET deleted_at = NULL WHERE id = ?1",
            [id.to_string()],
        )?;
        debug!(%id, "flight restored");
        Ok(())
    }

    fn query_flights(&self, sql: &str) -> Result<Vec<Flight>> {
        let mut stmt = self.connection.prepare(sql)?;
        let rows = stmt.query_map([], row_to_flight)?;

        let mut flights = Vec::new();
        for entry in rows {
            flights.push(entry?);
        }
        Ok(flights)
    }
}

impl FlightLedger for SqliteLedger {
    /// Single-statement read, so the snapshot reflects exactly one database
    /// state.
    fn active_flights(&self) -> Result<Vec<Flight>> {
        self.query_flights(
            "SELECT id, flight_name, origin, destination, cost, created_at, deleted_at
             FROM flights WHERE deleted_at IS NULL ORDER BY created_at, id",
        )
    }
}

/// In-memory flight ledger for tests, demos, and benchmarks.
#[derive(Default)]
pub struct MemoryLedger {
    flights: Mutex<Vec<Flight>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger pre-populated with the given flights.
    pub fn with_flights(flights: impl IntoIterator<Item = Flight>) -> Self {
        Self {
            flights: Mutex::new(flights.into_iter().collect()),
        }
    }

    pub fn create(&self, flight: Flight) {
        self.lock().push(flight);
    }

    pub fn soft_delete(&self, id: FlightId) -> Result<()> {
        let mut flights = self.lock();
        let flight = flights
            .iter_mut()
            .find(|flight| flight.id == id)
            .ok_or(Error::FlightNotFound { id })?;
        if flight.is_active() {
            flight.deleted_at = Some(Utc::now());
        }
        Ok(())
    }

    pub fn restore(&self, id: FlightId) -> Result<()> {
        let mut flights = self.lock();
        let flight = flights
            .iter_mut()
            .find(|flight| flight.id == id)
            .ok_or(Error::FlightNotFound { id })?;
        if flight.is_active() {
            return Err(Error::FlightNotDeleted { id });
        }
        flight.deleted_at = None;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Flight>> {
        match self.flights.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl FlightLedger for MemoryLedger {
    /// Clones the active records under a single lock acquisition.
    fn active_flights(&self) -> Result<Vec<Flight>> {
        Ok(self
            .lock()
            .iter()
            .filter(|flight| flight.is_active())
            .cloned()
            .collect())
    }
}

fn row_to_flight(row: &Row<'_>) -> rusqlite::Result<Flight> {
    let id: String = row.get(0)?;
    let id = Uuid::parse_str(&id).map_err(|err| column_error(0, err))?;
    let created_at = parse_timestamp(row.get(5)?, 5)?;
    let deleted_at = parse_timestamp(row.get(6)?, 6)?;

    Ok(Flight {
        id,
        flight_name: row.get(1)?,
        origin: row.get(2)?,
        destination: row.get(3)?,
        cost: row.get(4)?,
        created_at,
        deleted_at,
    })
}

fn parse_timestamp(
    value: Option<String>,
    index: usize,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|err| column_error(index, err)),
    }
}

fn column_error(
    index: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(err))
}
