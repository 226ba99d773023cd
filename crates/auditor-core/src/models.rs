//! Core data models for the audit: pilot ranks and flight contexts.

use serde::{Deserialize, Serialize};

/// Pilot certification rank at a point in time.
///
/// Ranks are ordered by qualification, so `>=` comparisons express
/// "at least this qualified". A flight that predates the pilot's school
/// record has no rank at all; that case is represented by absence, never
/// by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Certification {
    /// Joined the school but has not soloed
    Novice,
    /// Soloed but not yet licensed
    Student,
    /// Holds a private license, under 50 hours past it
    Certified,
    /// 50 or more hours past the license (insurance threshold)
    #[serde(rename = "50 Hours")]
    FiftyHours,
}

/// Sky condition a minimums row applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkyCondition {
    /// Visual meteorological conditions
    Vmc,
    /// Instrument meteorological conditions
    Imc,
}

/// Rule set a flight is filed under.
///
/// A VFR flight is subject to VMC minimums only; an IFR flight may use
/// IMC minimums as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightRules {
    Vfr,
    Ifr,
}

/// AREA column of the minimums table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowArea {
    /// Airport traffic pattern
    Pattern,
    #[serde(rename = "Practice Area")]
    PracticeArea,
    /// Local flying outside the pattern and practice area
    Local,
    #[serde(rename = "Cross Country")]
    CrossCountry,
    /// Applies everywhere
    Any,
}

/// Flight area declared in a flight plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightArea {
    Pattern,
    #[serde(rename = "Practice Area")]
    PracticeArea,
    Local,
    #[serde(rename = "Cross Country")]
    CrossCountry,
}

/// TIME column of the minimums table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Day,
    Night,
}

/// Everything about one flight that the minimums lookup needs.
///
/// Constructed fresh per audited flight and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightContext {
    pub certification: Certification,
    pub area: FlightArea,
    /// Whether an instructor is on board
    pub instructed: bool,
    pub rules: FlightRules,
    pub daytime: bool,
}

/// The most permissive minimums applying to a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minimums {
    /// Minimum cloud base in feet
    pub ceiling: f64,
    /// Minimum visibility in statute miles
    pub visibility: f64,
    /// Maximum total wind in knots
    pub wind: f64,
    /// Maximum crosswind component in knots
    pub crosswind: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_ranks_are_ordered() {
        assert!(Certification::Novice < Certification::Student);
        assert!(Certification::Student < Certification::Certified);
        assert!(Certification::Certified < Certification::FiftyHours);
    }

    #[test]
    fn table_spellings_round_trip() {
        // The serde form must use the table's canonical spellings.
        let json = serde_json::to_value(Certification::FiftyHours).unwrap();
        assert_eq!(json, "50 Hours");
        let json = serde_json::to_value(RowArea::PracticeArea).unwrap();
        assert_eq!(json, "Practice Area");
        let json = serde_json::to_value(SkyCondition::Imc).unwrap();
        assert_eq!(json, "IMC");

        let area: FlightArea = serde_json::from_str("\"Cross Country\"").unwrap();
        assert_eq!(area, FlightArea::CrossCountry);
    }
}
