//! API Routes
//!
//! HTTP endpoint definitions for the competition resource. The controller
//! validates only the shape of path identifiers; referential and business
//! validation belongs to the service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    CompetitionRecord, CompetitionResult, CompetitionStatus, DomainError, SponsorTier, TeamLevel,
};
use crate::error::AppResult;
use crate::service::{CompetitionRequest, CompetitionService};

/// Path identifiers are 36-character opaque tokens (UUID strings).
const UUID_LENGTH: usize = 36;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CompetitionService>,
}

/// Build the competition router. State is applied by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/teams/:team_id/competitions",
            get(get_all_competitions).post(create_competition),
        )
        .route(
            "/teams/:team_id/competitions/:competition_id",
            get(get_competition_by_id)
                .put(update_competition)
                .delete(delete_competition),
        )
}

// =========================================================================
// Response type
// =========================================================================

/// Flat wire representation of a competition: the record's own fields plus
/// the flattened snapshot fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResponse {
    pub competition_id: String,
    pub competition_name: String,
    pub competition_date: Option<NaiveDate>,
    pub competition_status: CompetitionStatus,
    pub competition_result: CompetitionResult,

    pub team_id: String,
    pub team_name: String,
    pub coach_name: String,
    pub team_level: TeamLevel,

    pub sponsor_id: String,
    pub sponsor_name: String,
    pub sponsor_level: SponsorTier,
    pub sponsor_amount: f64,

    pub facility_id: String,
    pub facility_name: String,
    pub capacity: i32,
    pub location: String,
}

impl From<CompetitionRecord> for CompetitionResponse {
    fn from(record: CompetitionRecord) -> Self {
        Self {
            competition_id: record.competition_id,
            competition_name: record.competition_name,
            competition_date: record.competition_date,
            competition_status: record.competition_status,
            competition_result: record.competition_result,
            team_id: record.team.team_id,
            team_name: record.team.team_name,
            coach_name: record.team.coach_name,
            team_level: record.team.team_level,
            sponsor_id: record.sponsor.sponsor_id,
            sponsor_name: record.sponsor.sponsor_name,
            sponsor_level: record.sponsor.sponsor_level,
            sponsor_amount: record.sponsor.sponsor_amount,
            facility_id: record.facility.facility_id,
            facility_name: record.facility.facility_name,
            capacity: record.facility.capacity,
            location: record.facility.location,
        }
    }
}

// =========================================================================
// Handlers
// =========================================================================

async fn get_all_competitions(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> AppResult<Json<Vec<CompetitionResponse>>> {
    require_team_id_shape(&team_id)?;

    let records = state.service.list_by_team(&team_id).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn get_competition_by_id(
    State(state): State<AppState>,
    Path((team_id, competition_id)): Path<(String, String)>,
) -> AppResult<Json<CompetitionResponse>> {
    require_both_id_shapes(&team_id, &competition_id)?;

    let record = state.service.get(&team_id, &competition_id).await?;
    Ok(Json(record.into()))
}

async fn create_competition(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<CompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    require_team_id_shape(&team_id)?;

    let record = state.service.create(&team_id, request).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

async fn update_competition(
    State(state): State<AppState>,
    Path((team_id, competition_id)): Path<(String, String)>,
    Json(request): Json<CompetitionRequest>,
) -> AppResult<Json<CompetitionResponse>> {
    require_both_id_shapes(&team_id, &competition_id)?;

    let record = state
        .service
        .update(&team_id, &competition_id, request)
        .await?;
    Ok(Json(record.into()))
}

async fn delete_competition(
    State(state): State<AppState>,
    Path((team_id, competition_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    require_both_id_shapes(&team_id, &competition_id)?;

    state.service.delete(&team_id, &competition_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Shape-only validation; fails fast before any network call.
fn require_team_id_shape(team_id: &str) -> Result<(), DomainError> {
    if team_id.len() != UUID_LENGTH {
        return Err(DomainError::InvalidInput(format!(
            "Invalid teamId provided: {}",
            team_id
        )));
    }
    Ok(())
}

fn require_both_id_shapes(team_id: &str, competition_id: &str) -> Result<(), DomainError> {
    if team_id.len() != UUID_LENGTH || competition_id.len() != UUID_LENGTH {
        return Err(DomainError::InvalidInput("Invalid ID provided".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape_validation() {
        let valid = "11111111-1111-1111-1111-111111111111";

        assert!(require_team_id_shape(valid).is_ok());
        assert!(require_team_id_shape("short").is_err());
        assert!(require_both_id_shapes(valid, valid).is_ok());
        assert!(require_both_id_shapes(valid, "x").is_err());
        assert!(require_both_id_shapes("x", valid).is_err());
    }

    #[test]
    fn test_shape_error_messages() {
        let err = require_team_id_shape("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid teamId provided: abc");

        let err = require_both_id_shapes("abc", "def").unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID provided");
    }
}
