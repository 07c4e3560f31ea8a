//! Snapshot value objects
//!
//! Denormalized copies of upstream entities, embedded into the competition
//! aggregate at write time. A snapshot is never dereferenced against its
//! source service again; it reflects the entity as observed when the owning
//! record was written.

use serde::{Deserialize, Serialize};

use super::enums::{SponsorTier, TeamLevel};

/// Team as observed from the team service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub team_id: String,
    pub team_name: String,
    pub coach_name: String,
    pub team_level: TeamLevel,
}

/// Sponsor as observed from the sponsor service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorSnapshot {
    pub sponsor_id: String,
    pub sponsor_name: String,
    pub sponsor_level: SponsorTier,
    pub sponsor_amount: f64,
}

/// Facility as observed from the facility service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySnapshot {
    pub facility_id: String,
    pub facility_name: String,
    pub capacity: i32,
    pub location: String,
}
