use thiserror::Error;

use crate::flight::FlightId;

/// Convenient result alias for the skyfare library.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by resource layers to map errors onto
/// user-visible responses (bad request, not found, internal failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed input; retrying unchanged cannot succeed.
    Validation,
    /// The query was well-formed but nothing matched; a normal outcome.
    NotFound,
    /// The ledger or its storage failed; the caller may retry with backoff.
    Infrastructure,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a route query names a blank or missing airport code.
    #[error("airport code for {field} is required")]
    MissingAirport { field: &'static str },

    /// Raised when a flight is created with a cost the solver cannot accept.
    #[error("flight cost must be a finite, non-negative number (got {cost})")]
    InvalidCost { cost: f64 },

    /// Raised when a flight is created without a name, origin, or destination.
    #[error("flight {field} is required")]
    MissingFlightField { field: &'static str },

    /// Raised when no sequence of active flights connects two airports.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when a ledger operation references an unknown flight.
    #[error("flight {id} not found")]
    FlightNotFound { id: FlightId },

    /// Raised when restoring a flight that was never soft-deleted.
    #[error("flight {id} is not deleted")]
    FlightNotDeleted { id: FlightId },

    /// Wrapper for malformed flight identifiers.
    #[error(transparent)]
    InvalidFlightId(#[from] uuid::Error),

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify this error for response mapping.
    ///
    /// Graph building and route solving never produce errors themselves; the
    /// only [`ErrorKind::Infrastructure`] sources are the ledger boundary
    /// wrappers, which must not be conflated with "no route".
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingAirport { .. }
            | Error::InvalidCost { .. }
            | Error::MissingFlightField { .. }
            | Error::FlightNotDeleted { .. }
            | Error::InvalidFlightId(_) => ErrorKind::Validation,
            Error::RouteNotFound { .. } | Error::FlightNotFound { .. } => ErrorKind::NotFound,
            Error::Sqlite(_) | Error::Io(_) => ErrorKind::Infrastructure,
        }
    }
}
