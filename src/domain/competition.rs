//! Competition aggregate
//!
//! The composed record persisted by the store: request fields plus the three
//! entity snapshots taken at write time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{CompetitionResult, CompetitionStatus};
use super::snapshot::{FacilitySnapshot, SponsorSnapshot, TeamSnapshot};

/// Generate a fresh globally-unique competition identifier.
///
/// Identifier generation lives in the domain, not the store, so the store
/// stays a dumb persistence layer.
pub fn new_competition_id() -> String {
    Uuid::new_v4().to_string()
}

/// The competition aggregate.
///
/// `record_id` is the storage-assigned key and is never exposed over the API;
/// `competition_id` is the externally visible identifier, assigned once at
/// creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRecord {
    #[serde(skip)]
    pub record_id: Option<Uuid>,

    pub competition_id: String,
    pub competition_name: String,
    pub competition_date: Option<NaiveDate>,
    pub competition_status: CompetitionStatus,
    pub competition_result: CompetitionResult,

    pub team: TeamSnapshot,
    pub sponsor: SponsorSnapshot,
    pub facility: FacilitySnapshot,
}
