pub mod error;
pub mod minimums;
pub mod models;
pub mod pilots;

pub use error::{AuditError, Result};
pub use minimums::{compute_minimums, MinimumsRow, MinimumsTable, RowCategory};
pub use models::{
    Certification, FlightArea, FlightContext, FlightRules, Minimums, RowArea, SkyCondition,
    TimeOfDay,
};
pub use pilots::PilotRecord;
