//! The weather minimums table and the matcher/reducer over it.
//!
//! The table is immutable reference data, validated once at load time.
//! Matching a flight against it is a pure filter-and-reduce: collect every
//! row whose four categorical columns admit the flight, then keep the most
//! permissive numeric value per column.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::models::{
    Certification, FlightArea, FlightContext, FlightRules, Minimums, RowArea, SkyCondition,
    TimeOfDay,
};

/// CATEGORY column of the minimums table: the least qualification a row
/// demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowCategory {
    /// Any pilot who has soloed
    Student,
    /// Any licensed pilot
    Certified,
    /// Exactly the 50-hours rank, not licensed pilots below it
    #[serde(rename = "50 Hours")]
    FiftyHours,
    /// Instructor on board, regardless of rank
    Dual,
}

/// One entry of the minimums reference table.
///
/// CEILING is in ft and VISIBILITY in statute miles; WIND and CROSSWIND
/// are speeds in knots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumsRow {
    pub category: RowCategory,
    pub condition: SkyCondition,
    pub area: RowArea,
    pub time: TimeOfDay,
    pub ceiling: f64,
    pub visibility: f64,
    pub wind: f64,
    pub crosswind: f64,
}

const COLUMNS: usize = 8;

impl MinimumsRow {
    /// Parse one record of eight string cells, as handed over by an
    /// external loader. `row` is the zero-based record index, used only
    /// for error reporting.
    ///
    /// Unrecognized categorical values and malformed or negative numeric
    /// cells are integrity errors; they are rejected here rather than
    /// tolerated at match time.
    pub fn from_record(row: usize, cells: &[&str]) -> Result<Self> {
        if cells.len() != COLUMNS {
            return Err(AuditError::ColumnCount {
                row,
                found: cells.len(),
            });
        }

        Ok(Self {
            category: parse_category(row, cells[0])?,
            condition: parse_condition(row, cells[1])?,
            area: parse_area(row, cells[2])?,
            time: parse_time(row, cells[3])?,
            ceiling: parse_number(row, "CEILING", cells[4])?,
            visibility: parse_number(row, "VISIBILITY", cells[5])?,
            wind: parse_number(row, "WIND", cells[6])?,
            crosswind: parse_number(row, "CROSSWIND", cells[7])?,
        })
    }

    /// Whether every one of the four categorical columns admits the flight.
    pub fn matches(&self, context: &FlightContext) -> bool {
        self.category_matches(context)
            && self.condition_matches(context)
            && self.area_matches(context)
            && self.time_matches(context)
    }

    fn category_matches(&self, context: &FlightContext) -> bool {
        match self.category {
            RowCategory::Student => context.certification >= Certification::Student,
            RowCategory::Certified => context.certification >= Certification::Certified,
            RowCategory::FiftyHours => context.certification == Certification::FiftyHours,
            RowCategory::Dual => context.instructed,
        }
    }

    fn condition_matches(&self, context: &FlightContext) -> bool {
        match self.condition {
            SkyCondition::Vmc => true,
            SkyCondition::Imc => context.rules == FlightRules::Ifr,
        }
    }

    fn area_matches(&self, context: &FlightContext) -> bool {
        match self.area {
            RowArea::Any => true,
            RowArea::CrossCountry => context.area == FlightArea::CrossCountry,
            // Pattern, practice area, and local flights all count as local
            // flying, so these three row values admit any of them.
            RowArea::Pattern | RowArea::PracticeArea | RowArea::Local => matches!(
                context.area,
                FlightArea::Pattern | FlightArea::PracticeArea | FlightArea::Local
            ),
        }
    }

    fn time_matches(&self, context: &FlightContext) -> bool {
        match self.time {
            TimeOfDay::Day => context.daytime,
            TimeOfDay::Night => !context.daytime,
        }
    }
}

fn parse_category(row: usize, cell: &str) -> Result<RowCategory> {
    match cell.trim() {
        "Student" => Ok(RowCategory::Student),
        "Certified" => Ok(RowCategory::Certified),
        "50 Hours" => Ok(RowCategory::FiftyHours),
        "Dual" => Ok(RowCategory::Dual),
        other => Err(AuditError::UnknownCategory {
            row,
            value: other.to_string(),
        }),
    }
}

fn parse_condition(row: usize, cell: &str) -> Result<SkyCondition> {
    match cell.trim() {
        "VMC" => Ok(SkyCondition::Vmc),
        "IMC" => Ok(SkyCondition::Imc),
        other => Err(AuditError::UnknownCondition {
            row,
            value: other.to_string(),
        }),
    }
}

fn parse_area(row: usize, cell: &str) -> Result<RowArea> {
    match cell.trim() {
        "Pattern" => Ok(RowArea::Pattern),
        "Practice Area" => Ok(RowArea::PracticeArea),
        "Local" => Ok(RowArea::Local),
        "Cross Country" => Ok(RowArea::CrossCountry),
        "Any" => Ok(RowArea::Any),
        other => Err(AuditError::UnknownArea {
            row,
            value: other.to_string(),
        }),
    }
}

fn parse_time(row: usize, cell: &str) -> Result<TimeOfDay> {
    match cell.trim() {
        "Day" => Ok(TimeOfDay::Day),
        "Night" => Ok(TimeOfDay::Night),
        other => Err(AuditError::UnknownTimeOfDay {
            row,
            value: other.to_string(),
        }),
    }
}

fn parse_number(row: usize, column: &'static str, cell: &str) -> Result<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| AuditError::BadNumeric {
            row,
            column,
            value: cell.to_string(),
        })
}

/// Immutable, ordered weather-minimums reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumsTable {
    rows: Vec<MinimumsRow>,
}

impl MinimumsTable {
    /// Wrap already-validated rows.
    pub fn new(rows: Vec<MinimumsRow>) -> Self {
        Self { rows }
    }

    /// Parse a full record set of string cells (data rows only, without
    /// the header). Fails on the first malformed record.
    pub fn from_records(records: &[Vec<String>]) -> Result<Self> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
                MinimumsRow::from_record(row, &cells)
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(rows = rows.len(), "loaded minimums table");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[MinimumsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for MinimumsTable {
    /// The school's standard minimums, as published in its operations
    /// manual.
    fn default() -> Self {
        Self::new(vec![
            row(RowCategory::Student, SkyCondition::Vmc, RowArea::Pattern, TimeOfDay::Day, 2000.0, 5.0, 20.0, 8.0),
            row(RowCategory::Student, SkyCondition::Vmc, RowArea::PracticeArea, TimeOfDay::Day, 3000.0, 10.0, 20.0, 8.0),
            row(RowCategory::Certified, SkyCondition::Vmc, RowArea::Local, TimeOfDay::Day, 3000.0, 5.0, 20.0, 20.0),
            row(RowCategory::Certified, SkyCondition::Vmc, RowArea::PracticeArea, TimeOfDay::Night, 3000.0, 10.0, 20.0, 10.0),
            row(RowCategory::FiftyHours, SkyCondition::Vmc, RowArea::Local, TimeOfDay::Day, 3000.0, 10.0, 20.0, 10.0),
            row(RowCategory::Dual, SkyCondition::Vmc, RowArea::Any, TimeOfDay::Day, 2000.0, 10.0, 30.0, 10.0),
            row(RowCategory::Dual, SkyCondition::Imc, RowArea::Any, TimeOfDay::Day, 500.0, 0.75, 30.0, 20.0),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    category: RowCategory,
    condition: SkyCondition,
    area: RowArea,
    time: TimeOfDay,
    ceiling: f64,
    visibility: f64,
    wind: f64,
    crosswind: f64,
) -> MinimumsRow {
    MinimumsRow {
        category,
        condition,
        area,
        time,
        ceiling,
        visibility,
        wind,
        crosswind,
    }
}

/// Most permissive minimums among all table rows matching the flight.
///
/// Lower ceiling and visibility values are more permissive, higher wind
/// and crosswind values are. Returns `None` when no row matches (for
/// example an uninstructed novice): the flight simply has no sanctioned
/// minimums, which is absence rather than an error.
pub fn compute_minimums(context: &FlightContext, table: &MinimumsTable) -> Option<Minimums> {
    let mut result: Option<Minimums> = None;
    for row in table.rows().iter().filter(|row| row.matches(context)) {
        result = Some(match result {
            None => Minimums {
                ceiling: row.ceiling,
                visibility: row.visibility,
                wind: row.wind,
                crosswind: row.crosswind,
            },
            Some(best) => Minimums {
                ceiling: best.ceiling.min(row.ceiling),
                visibility: best.visibility.min(row.visibility),
                wind: best.wind.max(row.wind),
                crosswind: best.crosswind.max(row.crosswind),
            },
        });
    }
    if result.is_none() {
        tracing::debug!(?context, "no minimums row matches this flight");
    }
    result
}
