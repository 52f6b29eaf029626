use crate::{ClientError, Result};
use relay_core::{workloads_url, Workload};
use reqwest::{header, StatusCode};

/// Client for a tenant's remote config API.
///
/// Wraps a single `reqwest::Client`, so every submission handled by the
/// process shares one connection pool. No timeout is configured beyond the
/// transport defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigApiClient {
    http: reqwest::Client,
}

impl ConfigApiClient {
    pub fn new() -> Self {
        ConfigApiClient {
            http: reqwest::Client::new(),
        }
    }

    /// Create `workload` under `namespace` on the tenant at `tenant_url`.
    ///
    /// Exactly HTTP 200 counts as success. Any other remote status, and any
    /// transport or request-construction failure, is terminal for this
    /// submission; nothing is retried.
    pub async fn create_workload(
        &self,
        tenant_url: &str,
        namespace: &str,
        api_token: &str,
        workload: &Workload,
    ) -> Result<()> {
        let body = serde_json::to_vec(workload)?;
        let url = workloads_url(tenant_url, namespace);

        tracing::debug!(%url, namespace, "posting workload to remote config API");

        // A malformed tenant URL surfaces here as a builder error on send().
        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("APIToken {api_token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ClientError::RemoteStatus(status)),
        }
    }
}
