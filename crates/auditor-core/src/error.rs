//! Crate error type for reference-data and flight-context validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors raised while loading reference data or building a flight context.
///
/// Table integrity errors carry the zero-based index of the offending
/// record so a loader can point back at the source row.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("row {row}: expected 8 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}: unknown category {value:?}")]
    UnknownCategory { row: usize, value: String },
    #[error("row {row}: unknown sky condition {value:?}")]
    UnknownCondition { row: usize, value: String },
    #[error("row {row}: unknown area {value:?}")]
    UnknownArea { row: usize, value: String },
    #[error("row {row}: unknown time of day {value:?}")]
    UnknownTimeOfDay { row: usize, value: String },
    #[error("row {row}: {column} must be a non-negative number, got {value:?}")]
    BadNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("flight at {takeoff} predates the school record of pilot {pilot_id}")]
    FlightBeforeJoining {
        pilot_id: String,
        takeoff: DateTime<Utc>,
    },
}
