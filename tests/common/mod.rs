//! Common test utilities
//!
//! Stub upstream clients with call recording, an in-memory store, and
//! builders for the service and the full router.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{middleware, Router};
use chrono::{Days, Local, NaiveDate};

use competition_service::api::{self, AppState};
use competition_service::clients::{FacilityClient, SponsorClient, TeamClient};
use competition_service::domain::{
    CompetitionResult, CompetitionStatus, DomainError, FacilitySnapshot, SponsorSnapshot,
    SponsorTier, TeamLevel, TeamSnapshot,
};
use competition_service::service::{CompetitionRequest, CompetitionService};
use competition_service::store::InMemoryCompetitionStore;

pub const TEAM_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const SPONSOR_ID: &str = "aaaaaaa1-1aaa-1aaa-1aaa-aaaaaaaaaaa1";
pub const FACILITY_ID: &str = "fac11111-1111-1111-1111-111111111111";
pub const OTHER_TEAM_ID: &str = "22222222-2222-2222-2222-222222222222";

pub fn team() -> TeamSnapshot {
    TeamSnapshot {
        team_id: TEAM_ID.to_string(),
        team_name: "Montreal Eagles".to_string(),
        coach_name: "John Smith".to_string(),
        team_level: TeamLevel::College,
    }
}

pub fn sponsor(level: SponsorTier) -> SponsorSnapshot {
    SponsorSnapshot {
        sponsor_id: SPONSOR_ID.to_string(),
        sponsor_name: "Nike".to_string(),
        sponsor_level: level,
        sponsor_amount: 200_000.0,
    }
}

pub fn facility() -> FacilitySnapshot {
    FacilitySnapshot {
        facility_id: FACILITY_ID.to_string(),
        facility_name: "Olympic Stadium".to_string(),
        capacity: 70_000,
        location: "Montreal, QC".to_string(),
    }
}

pub fn in_ten_days() -> NaiveDate {
    Local::now()
        .date_naive()
        .checked_add_days(Days::new(10))
        .unwrap()
}

pub fn valid_request(status: CompetitionStatus) -> CompetitionRequest {
    CompetitionRequest {
        competition_name: "Spring Invitational".to_string(),
        competition_date: Some(in_ten_days()),
        competition_status: status,
        competition_result: CompetitionResult::Draw,
        sponsor_id: SPONSOR_ID.to_string(),
        facility_id: FACILITY_ID.to_string(),
    }
}

// =========================================================================
// Stub clients
// =========================================================================

/// Team client over a fixed map, counting fetches.
pub struct StubTeamClient {
    teams: HashMap<String, TeamSnapshot>,
    fail_with: Option<DomainError>,
    pub calls: AtomicUsize,
}

impl StubTeamClient {
    pub fn with(teams: Vec<TeamSnapshot>) -> Self {
        Self {
            teams: teams.into_iter().map(|t| (t.team_id.clone(), t)).collect(),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A client whose every call fails with the given error.
    pub fn failing(err: DomainError) -> Self {
        Self {
            teams: HashMap::new(),
            fail_with: Some(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamClient for StubTeamClient {
    async fn get_team(&self, team_id: &str) -> Result<TeamSnapshot, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.teams
            .get(team_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Unknown teamId: {}", team_id)))
    }
}

/// Sponsor client over a mutable map, recording every tier patch.
pub struct StubSponsorClient {
    sponsors: Mutex<HashMap<String, SponsorSnapshot>>,
    patch_calls: Mutex<Vec<(String, SponsorTier)>>,
}

impl StubSponsorClient {
    pub fn with(sponsors: Vec<SponsorSnapshot>) -> Self {
        Self {
            sponsors: Mutex::new(
                sponsors
                    .into_iter()
                    .map(|s| (s.sponsor_id.clone(), s))
                    .collect(),
            ),
            patch_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn patch_calls(&self) -> Vec<(String, SponsorTier)> {
        self.patch_calls.lock().unwrap().clone()
    }

    pub fn patch_count(&self) -> usize {
        self.patch_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SponsorClient for StubSponsorClient {
    async fn get_sponsor(&self, sponsor_id: &str) -> Result<SponsorSnapshot, DomainError> {
        self.sponsors
            .lock()
            .unwrap()
            .get(sponsor_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Unknown sponsorId: {}", sponsor_id)))
    }

    async fn patch_tier(
        &self,
        sponsor_id: &str,
        new_tier: SponsorTier,
    ) -> Result<SponsorSnapshot, DomainError> {
        self.patch_calls
            .lock()
            .unwrap()
            .push((sponsor_id.to_string(), new_tier));

        let mut sponsors = self.sponsors.lock().unwrap();
        let sponsor = sponsors
            .get_mut(sponsor_id)
            .ok_or_else(|| DomainError::NotFound(format!("Unknown sponsorId: {}", sponsor_id)))?;
        sponsor.sponsor_level = new_tier;
        Ok(sponsor.clone())
    }
}

/// Facility client over a fixed map.
pub struct StubFacilityClient {
    facilities: HashMap<String, FacilitySnapshot>,
}

impl StubFacilityClient {
    pub fn with(facilities: Vec<FacilitySnapshot>) -> Self {
        Self {
            facilities: facilities
                .into_iter()
                .map(|f| (f.facility_id.clone(), f))
                .collect(),
        }
    }
}

#[async_trait]
impl FacilityClient for StubFacilityClient {
    async fn get_facility(&self, facility_id: &str) -> Result<FacilitySnapshot, DomainError> {
        self.facilities
            .get(facility_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Unknown facilityId: {}", facility_id)))
    }
}

// =========================================================================
// Harness
// =========================================================================

/// Fully wired service over stubs, with handles kept for assertions.
pub struct TestHarness {
    pub store: Arc<InMemoryCompetitionStore>,
    pub team_client: Arc<StubTeamClient>,
    pub sponsor_client: Arc<StubSponsorClient>,
    pub facility_client: Arc<StubFacilityClient>,
    pub service: Arc<CompetitionService>,
}

/// Harness with the standard fixtures and the given starting sponsor tier.
pub fn harness_with_tier(tier: SponsorTier) -> TestHarness {
    build_harness(
        StubTeamClient::with(vec![team()]),
        StubSponsorClient::with(vec![sponsor(tier)]),
        StubFacilityClient::with(vec![facility()]),
    )
}

/// Standard harness: known team/facility, GOLD sponsor.
pub fn harness() -> TestHarness {
    harness_with_tier(SponsorTier::Gold)
}

pub fn build_harness(
    team_client: StubTeamClient,
    sponsor_client: StubSponsorClient,
    facility_client: StubFacilityClient,
) -> TestHarness {
    let store = Arc::new(InMemoryCompetitionStore::new());
    let team_client = Arc::new(team_client);
    let sponsor_client = Arc::new(sponsor_client);
    let facility_client = Arc::new(facility_client);

    let service = Arc::new(CompetitionService::new(
        store.clone(),
        team_client.clone(),
        sponsor_client.clone(),
        facility_client.clone(),
    ));

    TestHarness {
        store,
        team_client,
        sponsor_client,
        facility_client,
        service,
    }
}

/// The application router as the binary wires it, minus the TraceLayer.
pub fn app(harness: &TestHarness) -> Router {
    let state = AppState {
        service: harness.service.clone(),
    };

    Router::new()
        .nest("/api/v1", api::create_router())
        .layer(middleware::from_fn(
            api::middleware::error_info_middleware,
        ))
        .with_state(state)
}
