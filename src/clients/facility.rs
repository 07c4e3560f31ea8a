//! Facility service client

use async_trait::async_trait;
use serde_json::Value;

use crate::acl;
use crate::domain::{DomainError, FacilitySnapshot};

use super::{domain_error_from_response, domain_error_from_transport};

/// Fetch-by-id seam onto the facility service.
#[async_trait]
pub trait FacilityClient: Send + Sync {
    async fn get_facility(&self, facility_id: &str) -> Result<FacilitySnapshot, DomainError>;
}

/// HTTP implementation against the real facility service.
#[derive(Clone)]
pub struct HttpFacilityClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFacilityClient {
    /// `base_url` is the facilities collection URL, e.g.
    /// `http://facility-service:8080/api/v1/facilities`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl FacilityClient for HttpFacilityClient {
    async fn get_facility(&self, facility_id: &str) -> Result<FacilitySnapshot, DomainError> {
        let url = format!("{}/{}", self.base_url, facility_id);
        tracing::debug!("Facility-Service URL is: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(domain_error_from_transport)?;

        if !response.status().is_success() {
            let err = domain_error_from_response(response).await;
            tracing::debug!("Error response received in get_facility: {}", err);
            return Err(err);
        }

        let raw: Value = response.json().await.map_err(domain_error_from_transport)?;
        tracing::debug!("Successfully retrieved facility with id: {}", facility_id);
        Ok(acl::facility_snapshot_from_json(&raw)?)
    }
}
