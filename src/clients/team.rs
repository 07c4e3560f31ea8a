//! Team service client

use async_trait::async_trait;
use serde_json::Value;

use crate::acl;
use crate::domain::{DomainError, TeamSnapshot};

use super::{domain_error_from_response, domain_error_from_transport};

/// Fetch-by-id seam onto the team service.
#[async_trait]
pub trait TeamClient: Send + Sync {
    async fn get_team(&self, team_id: &str) -> Result<TeamSnapshot, DomainError>;
}

/// HTTP implementation against the real team service.
#[derive(Clone)]
pub struct HttpTeamClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTeamClient {
    /// `base_url` is the teams collection URL, e.g.
    /// `http://team-service:8080/api/v1/teams`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TeamClient for HttpTeamClient {
    async fn get_team(&self, team_id: &str) -> Result<TeamSnapshot, DomainError> {
        let url = format!("{}/{}", self.base_url, team_id);
        tracing::debug!("Team-Service URL is: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(domain_error_from_transport)?;

        if !response.status().is_success() {
            let err = domain_error_from_response(response).await;
            tracing::debug!("Error response received in get_team: {}", err);
            return Err(err);
        }

        let raw: Value = response.json().await.map_err(domain_error_from_transport)?;
        tracing::debug!("Successfully retrieved team JSON for id: {}", team_id);
        Ok(acl::team_snapshot_from_json(&raw)?)
    }
}
