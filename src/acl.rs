//! Anti-corruption translation
//!
//! The single choke point between upstream representations and the local
//! domain. Raw JSON payloads from the team, sponsor and facility services are
//! converted into locally-owned snapshot types here; enumerated fields are
//! case-normalized and re-validated against the local enums. A missing key or
//! an unrecognized enum value is a hard failure, never a default.
//!
//! This module is pure and performs no I/O.

use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    DomainError, FacilitySnapshot, SponsorSnapshot, TeamSnapshot, UnknownEnumValue,
};

/// Failure to translate an upstream payload into a local snapshot.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslationError {
    #[error("missing or malformed field '{0}' in upstream payload")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidEnum(#[from] UnknownEnumValue),
}

impl From<TranslationError> for DomainError {
    // Translation failures are not a caller problem and carry no downstream
    // status; they surface as Unexpected.
    fn from(err: TranslationError) -> Self {
        DomainError::unexpected(None, err.to_string())
    }
}

/// Translate a raw team-service payload.
pub fn team_snapshot_from_json(raw: &Value) -> Result<TeamSnapshot, TranslationError> {
    Ok(TeamSnapshot {
        team_id: str_field(raw, "teamId")?.to_string(),
        team_name: str_field(raw, "teamName")?.to_string(),
        coach_name: str_field(raw, "coachName")?.to_string(),
        team_level: str_field(raw, "teamLevel")?.to_uppercase().parse()?,
    })
}

/// Translate a raw sponsor-service payload.
pub fn sponsor_snapshot_from_json(raw: &Value) -> Result<SponsorSnapshot, TranslationError> {
    Ok(SponsorSnapshot {
        sponsor_id: str_field(raw, "sponsorId")?.to_string(),
        sponsor_name: str_field(raw, "sponsorName")?.to_string(),
        sponsor_level: str_field(raw, "sponsorLevel")?.to_uppercase().parse()?,
        sponsor_amount: num_field(raw, "sponsorAmount")?,
    })
}

/// Translate a raw facility-service payload. Structural copy, no enum fields.
pub fn facility_snapshot_from_json(raw: &Value) -> Result<FacilitySnapshot, TranslationError> {
    Ok(FacilitySnapshot {
        facility_id: str_field(raw, "facilityId")?.to_string(),
        facility_name: str_field(raw, "facilityName")?.to_string(),
        capacity: int_field(raw, "capacity")?,
        location: str_field(raw, "location")?.to_string(),
    })
}

fn str_field<'a>(raw: &'a Value, key: &'static str) -> Result<&'a str, TranslationError> {
    raw.get(key)
        .and_then(Value::as_str)
        .ok_or(TranslationError::MissingField(key))
}

fn num_field(raw: &Value, key: &'static str) -> Result<f64, TranslationError> {
    raw.get(key)
        .and_then(Value::as_f64)
        .ok_or(TranslationError::MissingField(key))
}

fn int_field(raw: &Value, key: &'static str) -> Result<i32, TranslationError> {
    raw.get(key)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(TranslationError::MissingField(key))
}
