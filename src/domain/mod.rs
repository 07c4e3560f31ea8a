//! Domain module
//!
//! Core domain types: the competition aggregate, snapshot value objects,
//! closed enumerations and the failure taxonomy.

pub mod competition;
pub mod enums;
pub mod error;
pub mod snapshot;

pub use competition::{new_competition_id, CompetitionRecord};
pub use enums::{CompetitionResult, CompetitionStatus, SponsorTier, TeamLevel, UnknownEnumValue};
pub use error::DomainError;
pub use snapshot::{FacilitySnapshot, SponsorSnapshot, TeamSnapshot};
