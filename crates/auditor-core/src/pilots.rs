//! Pilot school records and "as of takeoff" qualification checks.
//!
//! The audit covers a whole year, so qualifications are never a fixed
//! property of a pilot: a pilot may be unlicensed for one flight and
//! licensed for the next. Every check here takes the takeoff time and
//! answers for that instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::models::{Certification, FlightArea, FlightContext, FlightRules};

/// One pilot's school record: identity plus the dates qualifications were
/// earned. A `None` milestone was never earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotRecord {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    /// Date the pilot joined the school
    pub joined: Option<DateTime<Utc>>,
    /// First solo
    pub solo: Option<DateTime<Utc>>,
    /// Private license
    pub license: Option<DateTime<Utc>>,
    /// 50 hours past the license
    pub fifty_hours: Option<DateTime<Utc>>,
    /// Instrument rating
    pub instrument: Option<DateTime<Utc>>,
    /// Advanced (retractable gear) endorsement
    pub advanced: Option<DateTime<Utc>>,
    /// Multiengine endorsement
    pub multiengine: Option<DateTime<Utc>>,
}

impl PilotRecord {
    /// Certification rank at takeoff: the highest milestone earned on or
    /// before that instant. `None` when the flight predates the pilot
    /// joining the school (or no join date is on record), which is an
    /// invalid audit input rather than a rank.
    pub fn certification_at(&self, takeoff: DateTime<Utc>) -> Option<Certification> {
        if !earned(self.joined, takeoff) {
            return None;
        }
        let rank = if earned(self.fifty_hours, takeoff) {
            Certification::FiftyHours
        } else if earned(self.license, takeoff) {
            Certification::Certified
        } else if earned(self.solo, takeoff) {
            Certification::Student
        } else {
            Certification::Novice
        };
        Some(rank)
    }

    /// Whether the pilot held an instrument rating at takeoff.
    ///
    /// Holding the rating lets the pilot choose to file IFR; it does not
    /// make every flight an IFR flight.
    pub fn has_instrument_rating_at(&self, takeoff: DateTime<Utc>) -> bool {
        earned(self.instrument, takeoff)
    }

    /// Whether the pilot could solo a plane with retractable gear at
    /// takeoff.
    pub fn has_advanced_endorsement_at(&self, takeoff: DateTime<Utc>) -> bool {
        earned(self.advanced, takeoff)
    }

    /// Whether the pilot could solo a multiengine plane at takeoff.
    pub fn has_multiengine_endorsement_at(&self, takeoff: DateTime<Utc>) -> bool {
        earned(self.multiengine, takeoff)
    }
}

fn earned(milestone: Option<DateTime<Utc>>, takeoff: DateTime<Utc>) -> bool {
    milestone.is_some_and(|earned_at| takeoff >= earned_at)
}

impl FlightContext {
    /// Build a validated context for one audited flight.
    ///
    /// A takeoff before the pilot's school record starts cannot be
    /// classified and is rejected before any matching happens.
    pub fn for_flight(
        pilot: &PilotRecord,
        takeoff: DateTime<Utc>,
        area: FlightArea,
        instructed: bool,
        rules: FlightRules,
        daytime: bool,
    ) -> Result<FlightContext> {
        let certification =
            pilot
                .certification_at(takeoff)
                .ok_or_else(|| AuditError::FlightBeforeJoining {
                    pilot_id: pilot.id.clone(),
                    takeoff,
                })?;
        Ok(FlightContext {
            certification,
            area,
            instructed,
            rules,
            daytime,
        })
    }
}
