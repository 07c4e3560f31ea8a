//! Competition store
//!
//! Persistence of the composed competition aggregate. The store is a dumb
//! persistence layer: identifier generation and all business decisions live
//! in the service above it.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::CompetitionRecord;

pub use memory::InMemoryCompetitionStore;
pub use postgres::PgCompetitionStore;

/// Errors that can occur in the competition store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be decoded into a competition record
    #[error("Corrupt competition record: {0}")]
    Decode(String),
}

/// Storage contract for competition records.
///
/// Every competition is owned by exactly one team for its lifetime, so no
/// query spans teams.
#[async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Upsert. Assigns the storage id on first insert, preserves it on update.
    async fn save(&self, record: CompetitionRecord) -> Result<CompetitionRecord, StoreError>;

    /// All records whose team snapshot carries the given team id.
    async fn find_all_by_team_id(
        &self,
        team_id: &str,
    ) -> Result<Vec<CompetitionRecord>, StoreError>;

    /// Look up by `(team_id, competition_id)`.
    async fn find_one(
        &self,
        team_id: &str,
        competition_id: &str,
    ) -> Result<Option<CompetitionRecord>, StoreError>;
}
