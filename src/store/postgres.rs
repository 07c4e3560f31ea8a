//! Postgres-backed competition store
//!
//! One row per competition. The three snapshots are stored as JSONB columns;
//! status and result are stored as their wire tokens. The `team_id` column is
//! denormalized out of the team snapshot so the per-team queries stay on an
//! index.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    CompetitionRecord, FacilitySnapshot, SponsorSnapshot, TeamSnapshot,
};

use super::{CompetitionStore, StoreError};

/// Production store over the `competitions` table.
#[derive(Clone)]
pub struct PgCompetitionStore {
    pool: PgPool,
}

impl PgCompetitionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompetitionStore for PgCompetitionStore {
    async fn save(&self, record: CompetitionRecord) -> Result<CompetitionRecord, StoreError> {
        let record_id = record.record_id.unwrap_or_else(Uuid::new_v4);

        let row = sqlx::query(
            r#"
            INSERT INTO competitions
                (id, competition_id, team_id, competition_name, competition_date,
                 competition_status, competition_result, team, sponsor, facility)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                competition_name   = EXCLUDED.competition_name,
                competition_date   = EXCLUDED.competition_date,
                competition_status = EXCLUDED.competition_status,
                competition_result = EXCLUDED.competition_result,
                team_id            = EXCLUDED.team_id,
                team               = EXCLUDED.team,
                sponsor            = EXCLUDED.sponsor,
                facility           = EXCLUDED.facility
            RETURNING id
            "#,
        )
        .bind(record_id)
        .bind(&record.competition_id)
        .bind(&record.team.team_id)
        .bind(&record.competition_name)
        .bind(record.competition_date)
        .bind(record.competition_status.to_string())
        .bind(record.competition_result.to_string())
        .bind(sqlx::types::Json(&record.team))
        .bind(sqlx::types::Json(&record.sponsor))
        .bind(sqlx::types::Json(&record.facility))
        .fetch_one(&self.pool)
        .await?;

        let id: Uuid = row.get("id");
        Ok(CompetitionRecord {
            record_id: Some(id),
            ..record
        })
    }

    async fn find_all_by_team_id(
        &self,
        team_id: &str,
    ) -> Result<Vec<CompetitionRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, competition_id, competition_name, competition_date,
                   competition_status, competition_result, team, sponsor, facility
            FROM competitions
            WHERE team_id = $1
            ORDER BY competition_date NULLS LAST, competition_id
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn find_one(
        &self,
        team_id: &str,
        competition_id: &str,
    ) -> Result<Option<CompetitionRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, competition_id, competition_name, competition_date,
                   competition_status, competition_result, team, sponsor, facility
            FROM competitions
            WHERE team_id = $1 AND competition_id = $2
            "#,
        )
        .bind(team_id)
        .bind(competition_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(record_from_row).transpose()
    }
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> Result<CompetitionRecord, StoreError> {
    let id: Uuid = row.get("id");
    let competition_id: String = row.get("competition_id");
    let competition_name: String = row.get("competition_name");
    let competition_date: Option<NaiveDate> = row.get("competition_date");
    let status_raw: String = row.get("competition_status");
    let result_raw: String = row.get("competition_result");
    let team: sqlx::types::Json<TeamSnapshot> = row.get("team");
    let sponsor: sqlx::types::Json<SponsorSnapshot> = row.get("sponsor");
    let facility: sqlx::types::Json<FacilitySnapshot> = row.get("facility");

    Ok(CompetitionRecord {
        record_id: Some(id),
        competition_id,
        competition_name,
        competition_date,
        competition_status: status_raw
            .parse()
            .map_err(|e: crate::domain::UnknownEnumValue| StoreError::Decode(e.to_string()))?,
        competition_result: result_raw
            .parse()
            .map_err(|e: crate::domain::UnknownEnumValue| StoreError::Decode(e.to_string()))?,
        team: team.0,
        sponsor: sponsor.0,
        facility: facility.0,
    })
}
