//! Competition service
//!
//! The business layer: validates the date and referential rules, composes the
//! aggregate from the request plus the three upstream snapshots, persists it,
//! and drives the compensating sponsor-tier updates.
//!
//! The sponsor side effects are not transactional with the competition
//! write. The record is durable before the tier call is attempted, so a
//! failure between the two leaves a persisted competition with a stale
//! sponsor snapshot rather than an unpersisted competition.

use std::sync::Arc;

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clients::{FacilityClient, SponsorClient, TeamClient};
use crate::domain::{
    new_competition_id, CompetitionRecord, CompetitionResult, CompetitionStatus, DomainError,
    SponsorTier,
};
use crate::error::AppResult;
use crate::store::CompetitionStore;

/// Caller-supplied fields of a create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRequest {
    pub competition_name: String,
    #[serde(default)]
    pub competition_date: Option<NaiveDate>,
    pub competition_status: CompetitionStatus,
    pub competition_result: CompetitionResult,
    pub sponsor_id: String,
    pub facility_id: String,
}

/// Orchestrates competition reads and writes across the store and the three
/// upstream services.
pub struct CompetitionService {
    store: Arc<dyn CompetitionStore>,
    team_client: Arc<dyn TeamClient>,
    sponsor_client: Arc<dyn SponsorClient>,
    facility_client: Arc<dyn FacilityClient>,
}

impl CompetitionService {
    pub fn new(
        store: Arc<dyn CompetitionStore>,
        team_client: Arc<dyn TeamClient>,
        sponsor_client: Arc<dyn SponsorClient>,
        facility_client: Arc<dyn FacilityClient>,
    ) -> Self {
        Self {
            store,
            team_client,
            sponsor_client,
            facility_client,
        }
    }

    /// All competitions of a team. The team must exist upstream; a missing
    /// team propagates as the client classified it (NotFound).
    pub async fn list_by_team(&self, team_id: &str) -> AppResult<Vec<CompetitionRecord>> {
        self.team_client.get_team(team_id).await?;
        Ok(self.store.find_all_by_team_id(team_id).await?)
    }

    /// Single competition by `(team_id, competition_id)`.
    pub async fn get(&self, team_id: &str, competition_id: &str) -> AppResult<CompetitionRecord> {
        self.team_client.get_team(team_id).await?;

        self.store
            .find_one(team_id, competition_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Competition {} not found for team {}",
                    competition_id, team_id
                ))
                .into()
            })
    }

    pub async fn create(
        &self,
        team_id: &str,
        request: CompetitionRequest,
    ) -> AppResult<CompetitionRecord> {
        ensure_date_within_one_year(request.competition_date)?;

        let team = self.fetch_team_for_write(team_id).await?;
        let sponsor = self.fetch_sponsor_for_write(&request.sponsor_id).await?;
        let facility = self.fetch_facility_for_write(&request.facility_id).await?;

        let record = CompetitionRecord {
            record_id: None,
            competition_id: new_competition_id(),
            competition_name: request.competition_name,
            competition_date: request.competition_date,
            competition_status: request.competition_status,
            competition_result: request.competition_result,
            team,
            sponsor,
            facility,
        };

        let saved = self.store.save(record).await?;
        self.bump_sponsor_if_completed(saved).await
    }

    pub async fn update(
        &self,
        team_id: &str,
        competition_id: &str,
        request: CompetitionRequest,
    ) -> AppResult<CompetitionRecord> {
        ensure_date_within_one_year(request.competition_date)?;

        let team = self.fetch_team_for_write(team_id).await?;

        let existing = self
            .store
            .find_one(team_id, competition_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Competition {} not found for team {}",
                    competition_id, team_id
                ))
            })?;

        let sponsor = self.fetch_sponsor_for_write(&request.sponsor_id).await?;
        let facility = self.fetch_facility_for_write(&request.facility_id).await?;

        // The identifier and storage id survive the overwrite; everything
        // else comes from the request and the fresh snapshots.
        let record = CompetitionRecord {
            record_id: existing.record_id,
            competition_id: existing.competition_id,
            competition_name: request.competition_name,
            competition_date: request.competition_date,
            competition_status: request.competition_status,
            competition_result: request.competition_result,
            team,
            sponsor,
            facility,
        };

        let saved = self.store.save(record).await?;
        self.bump_sponsor_if_completed(saved).await
    }

    /// Soft delete: the record transitions to CANCELLED and stays in the
    /// store. A sponsor whose tier is already NONE is not touched, which
    /// makes repeated deletes safe and network-free.
    pub async fn delete(&self, team_id: &str, competition_id: &str) -> AppResult<()> {
        let existing = self
            .store
            .find_one(team_id, competition_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Competition {} not found for team {}",
                    competition_id, team_id
                ))
            })?;

        if existing.team.team_id != team_id {
            return Err(DomainError::InvalidInput(format!(
                "Competition {} does not belong to team {}",
                competition_id, team_id
            ))
            .into());
        }

        let cancelled = CompetitionRecord {
            competition_status: CompetitionStatus::Cancelled,
            ..existing
        };
        let saved = self.store.save(cancelled).await?;

        if saved.sponsor.sponsor_level != SponsorTier::None {
            tracing::debug!(
                "Resetting sponsor {} level after cancellation of competition {}",
                saved.sponsor.sponsor_id,
                saved.competition_id
            );
            let reset = self
                .sponsor_client
                .patch_tier(&saved.sponsor.sponsor_id, SponsorTier::None)
                .await?;
            self.store
                .save(CompetitionRecord {
                    sponsor: reset,
                    ..saved
                })
                .await?;
        }

        Ok(())
    }

    // A team that cannot be resolved during a write is a caller error: the
    // caller chose the id. The lookup paths keep the client's NotFound.
    async fn fetch_team_for_write(
        &self,
        team_id: &str,
    ) -> Result<crate::domain::TeamSnapshot, DomainError> {
        match self.team_client.get_team(team_id).await {
            Err(DomainError::NotFound(_)) => Err(DomainError::InvalidInput(format!(
                "unknown team id {}",
                team_id
            ))),
            other => other,
        }
    }

    async fn fetch_sponsor_for_write(
        &self,
        sponsor_id: &str,
    ) -> Result<crate::domain::SponsorSnapshot, DomainError> {
        match self.sponsor_client.get_sponsor(sponsor_id).await {
            Err(DomainError::NotFound(_)) => Err(DomainError::InvalidInput(format!(
                "unknown sponsor id {}",
                sponsor_id
            ))),
            other => other,
        }
    }

    async fn fetch_facility_for_write(
        &self,
        facility_id: &str,
    ) -> Result<crate::domain::FacilitySnapshot, DomainError> {
        match self.facility_client.get_facility(facility_id).await {
            Err(DomainError::NotFound(_)) => Err(DomainError::InvalidInput(format!(
                "unknown facility id {}",
                facility_id
            ))),
            other => other,
        }
    }

    /// A competition reaching COMPLETED always bumps its sponsor to PLATINUM
    /// and re-persists with the post-update snapshot.
    async fn bump_sponsor_if_completed(
        &self,
        saved: CompetitionRecord,
    ) -> AppResult<CompetitionRecord> {
        if saved.competition_status != CompetitionStatus::Completed {
            return Ok(saved);
        }

        tracing::debug!(
            "Bumping sponsor {} to PLATINUM for completed competition {}",
            saved.sponsor.sponsor_id,
            saved.competition_id
        );
        let bumped = self
            .sponsor_client
            .patch_tier(&saved.sponsor.sponsor_id, SponsorTier::Platinum)
            .await?;

        Ok(self
            .store
            .save(CompetitionRecord {
                sponsor: bumped,
                ..saved
            })
            .await?)
    }
}

fn ensure_date_within_one_year(date: Option<NaiveDate>) -> Result<(), DomainError> {
    if let Some(date) = date {
        let limit = Local::now()
            .date_naive()
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        if date > limit {
            return Err(DomainError::DateTooFar);
        }
    }
    Ok(())
}
