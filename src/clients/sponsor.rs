//! Sponsor service client
//!
//! Besides the fetch, this client owns the one write this service performs
//! against an upstream: the partial tier update used by the compensating
//! logic. The tier travels as a plain-text body; the response is the
//! sponsor's post-update representation.

use async_trait::async_trait;
use serde_json::Value;

use crate::acl;
use crate::domain::{DomainError, SponsorSnapshot, SponsorTier};

use super::{domain_error_from_response, domain_error_from_transport};

/// Fetch and tier-patch seam onto the sponsor service.
#[async_trait]
pub trait SponsorClient: Send + Sync {
    async fn get_sponsor(&self, sponsor_id: &str) -> Result<SponsorSnapshot, DomainError>;

    /// Partial update of only the tier field. Returns the upstream's
    /// post-update representation.
    async fn patch_tier(
        &self,
        sponsor_id: &str,
        new_tier: SponsorTier,
    ) -> Result<SponsorSnapshot, DomainError>;
}

/// HTTP implementation against the real sponsor service.
#[derive(Clone)]
pub struct HttpSponsorClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSponsorClient {
    /// `base_url` is the sponsors collection URL, e.g.
    /// `http://sponsor-service:8080/api/v1/sponsors`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn translate_success(
        response: reqwest::Response,
        context: &str,
    ) -> Result<SponsorSnapshot, DomainError> {
        if !response.status().is_success() {
            let err = domain_error_from_response(response).await;
            tracing::debug!("Error response received in {}: {}", context, err);
            return Err(err);
        }

        let raw: Value = response.json().await.map_err(domain_error_from_transport)?;
        Ok(acl::sponsor_snapshot_from_json(&raw)?)
    }
}

#[async_trait]
impl SponsorClient for HttpSponsorClient {
    async fn get_sponsor(&self, sponsor_id: &str) -> Result<SponsorSnapshot, DomainError> {
        let url = format!("{}/{}", self.base_url, sponsor_id);
        tracing::debug!("Sponsor-Service URL is: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(domain_error_from_transport)?;

        let sponsor = Self::translate_success(response, "get_sponsor").await?;
        tracing::debug!("Successfully retrieved sponsor JSON for id: {}", sponsor_id);
        Ok(sponsor)
    }

    async fn patch_tier(
        &self,
        sponsor_id: &str,
        new_tier: SponsorTier,
    ) -> Result<SponsorSnapshot, DomainError> {
        let url = format!("{}/{}/level", self.base_url, sponsor_id);
        tracing::debug!("Sponsor-Service URL is: {}", url);

        let response = self
            .http
            .patch(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(new_tier.to_string())
            .send()
            .await
            .map_err(domain_error_from_transport)?;

        let sponsor = Self::translate_success(response, "patch_tier").await?;
        tracing::debug!(
            "Successfully patched sponsor level for id: {} to {}",
            sponsor_id,
            new_tier
        );
        Ok(sponsor)
    }
}
