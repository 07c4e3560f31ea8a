//! In-memory competition store
//!
//! Implements the same contract as the Postgres store over a mutex-guarded
//! map. Used by the test suites; never touched by the production binary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::CompetitionRecord;

use super::{CompetitionStore, StoreError};

/// Map keyed by the storage id. The lock is never held across an await.
#[derive(Default)]
pub struct InMemoryCompetitionStore {
    records: Mutex<HashMap<Uuid, CompetitionRecord>>,
}

impl InMemoryCompetitionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompetitionStore for InMemoryCompetitionStore {
    async fn save(&self, record: CompetitionRecord) -> Result<CompetitionRecord, StoreError> {
        let record_id = record.record_id.unwrap_or_else(Uuid::new_v4);
        let saved = CompetitionRecord {
            record_id: Some(record_id),
            ..record
        };

        let mut records = self.records.lock().expect("store lock poisoned");
        records.insert(record_id, saved.clone());
        Ok(saved)
    }

    async fn find_all_by_team_id(
        &self,
        team_id: &str,
    ) -> Result<Vec<CompetitionRecord>, StoreError> {
        let records = self.records.lock().expect("store lock poisoned");
        let mut found: Vec<CompetitionRecord> = records
            .values()
            .filter(|r| r.team.team_id == team_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.competition_id.cmp(&b.competition_id));
        Ok(found)
    }

    async fn find_one(
        &self,
        team_id: &str,
        competition_id: &str,
    ) -> Result<Option<CompetitionRecord>, StoreError> {
        let records = self.records.lock().expect("store lock poisoned");
        Ok(records
            .values()
            .find(|r| r.team.team_id == team_id && r.competition_id == competition_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        new_competition_id, CompetitionResult, CompetitionStatus, FacilitySnapshot,
        SponsorSnapshot, SponsorTier, TeamLevel, TeamSnapshot,
    };

    fn record(team_id: &str) -> CompetitionRecord {
        CompetitionRecord {
            record_id: None,
            competition_id: new_competition_id(),
            competition_name: "Spring Invitational".to_string(),
            competition_date: None,
            competition_status: CompetitionStatus::Scheduled,
            competition_result: CompetitionResult::Draw,
            team: TeamSnapshot {
                team_id: team_id.to_string(),
                team_name: "Montreal Eagles".to_string(),
                coach_name: "John Smith".to_string(),
                team_level: TeamLevel::College,
            },
            sponsor: SponsorSnapshot {
                sponsor_id: "aaaaaaa1-1aaa-1aaa-1aaa-aaaaaaaaaaa1".to_string(),
                sponsor_name: "Nike".to_string(),
                sponsor_level: SponsorTier::Gold,
                sponsor_amount: 200_000.0,
            },
            facility: FacilitySnapshot {
                facility_id: "fac11111-1111-1111-1111-111111111111".to_string(),
                facility_name: "Olympic Stadium".to_string(),
                capacity: 70_000,
                location: "Montreal, QC".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_save_assigns_storage_id_once() {
        let store = InMemoryCompetitionStore::new();

        let saved = store.save(record("t1")).await.unwrap();
        let first_id = saved.record_id.expect("storage id assigned");

        let resaved = store.save(saved).await.unwrap();
        assert_eq!(resaved.record_id, Some(first_id));
    }

    #[tokio::test]
    async fn test_find_one_matches_team_and_competition() {
        let store = InMemoryCompetitionStore::new();
        let saved = store.save(record("t1")).await.unwrap();

        let found = store.find_one("t1", &saved.competition_id).await.unwrap();
        assert_eq!(found, Some(saved.clone()));

        let wrong_team = store
            .find_one("other", &saved.competition_id)
            .await
            .unwrap();
        assert_eq!(wrong_team, None);
    }

    #[tokio::test]
    async fn test_find_all_filters_by_team() {
        let store = InMemoryCompetitionStore::new();
        store.save(record("t1")).await.unwrap();
        store.save(record("t1")).await.unwrap();
        store.save(record("t2")).await.unwrap();

        assert_eq!(store.find_all_by_team_id("t1").await.unwrap().len(), 2);
        assert_eq!(store.find_all_by_team_id("t2").await.unwrap().len(), 1);
        assert!(store.find_all_by_team_id("t3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_fields() {
        let store = InMemoryCompetitionStore::new();
        let mut saved = store.save(record("t1")).await.unwrap();

        saved.competition_status = CompetitionStatus::Cancelled;
        let resaved = store.save(saved.clone()).await.unwrap();

        let found = store
            .find_one("t1", &resaved.competition_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.competition_status, CompetitionStatus::Cancelled);
    }
}
