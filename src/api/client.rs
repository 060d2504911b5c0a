//! Honeybadger Data API client.
//!
//! One method per resource kind. Every call is a single authenticated GET;
//! there is no retry, and timeouts are whatever the underlying [`HttpClient`]
//! enforces.

use base64::Engine;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::models::*;
use crate::error::{server_message, ClientError};
use crate::traits::{Headers, HttpClient};

/// Page size used by the list screens that support `limit`.
pub const PAGE_LIMIT: usize = 25;

/// Authenticated Data API client shared by all views.
pub struct DataClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    headers: Headers,
}

impl std::fmt::Debug for DataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DataClient {
    /// Create a client. `base_url` is the Data API host (see
    /// [`data_api_base`](crate::api::data_api_base)); the token is sent as the
    /// basic-auth username.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>, auth_token: &str) -> Self {
        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:", auth_token));

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Basic {}", credentials));
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::trace!(%url, "GET");

        let response = self.http.get(&url, &self.headers).await?;
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                detail: server_message(&response.body),
            });
        }

        response
            .json()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let page: ListResponse<T> = self.get_json(path).await?;
        Ok(page.results)
    }

    pub async fn accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.list("/v2/accounts").await
    }

    pub async fn account_users(&self, account_id: &str) -> Result<Vec<AccountUser>, ClientError> {
        self.list(&format!("/v2/accounts/{}/users", account_id))
            .await
    }

    pub async fn account_invitations(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountInvitation>, ClientError> {
        self.list(&format!("/v2/accounts/{}/invitations", account_id))
            .await
    }

    /// Projects, optionally restricted to one account.
    pub async fn projects(&self, account_id: Option<&str>) -> Result<Vec<Project>, ClientError> {
        match account_id {
            Some(id) => self.list(&format!("/v2/projects?account_id={}", id)).await,
            None => self.list("/v2/projects").await,
        }
    }

    pub async fn integrations(&self, project_id: &str) -> Result<Vec<Integration>, ClientError> {
        self.list(&format!("/v2/projects/{}/integrations", project_id))
            .await
    }

    /// Most recent faults first.
    pub async fn faults(&self, project_id: &str) -> Result<Vec<Fault>, ClientError> {
        self.list(&format!(
            "/v2/projects/{}/faults?limit={}&order=recent",
            project_id, PAGE_LIMIT
        ))
        .await
    }

    pub async fn fault(&self, project_id: &str, fault_id: &str) -> Result<Fault, ClientError> {
        self.get_json(&format!("/v2/projects/{}/faults/{}", project_id, fault_id))
            .await
    }

    pub async fn notices(&self, project_id: &str, fault_id: &str) -> Result<Vec<Notice>, ClientError> {
        self.list(&format!(
            "/v2/projects/{}/faults/{}/notices?limit={}",
            project_id, fault_id, PAGE_LIMIT
        ))
        .await
    }

    pub async fn affected_users(
        &self,
        project_id: &str,
        fault_id: &str,
    ) -> Result<Vec<AffectedUser>, ClientError> {
        // This endpoint returns a bare array rather than a results envelope.
        self.get_json(&format!(
            "/v2/projects/{}/faults/{}/affected_users",
            project_id, fault_id
        ))
        .await
    }

    pub async fn deployments(&self, project_id: &str) -> Result<Vec<Deployment>, ClientError> {
        self.list(&format!(
            "/v2/projects/{}/deploys?limit={}",
            project_id, PAGE_LIMIT
        ))
        .await
    }

    pub async fn sites(&self, project_id: &str) -> Result<Vec<Site>, ClientError> {
        self.list(&format!("/v2/projects/{}/sites", project_id))
            .await
    }

    pub async fn site(&self, project_id: &str, site_id: &str) -> Result<Site, ClientError> {
        self.get_json(&format!("/v2/projects/{}/sites/{}", project_id, site_id))
            .await
    }

    pub async fn outages(&self, project_id: &str, site_id: &str) -> Result<Vec<Outage>, ClientError> {
        self.list(&format!(
            "/v2/projects/{}/sites/{}/outages?limit={}",
            project_id, site_id, PAGE_LIMIT
        ))
        .await
    }

    pub async fn uptime_checks(
        &self,
        project_id: &str,
        site_id: &str,
    ) -> Result<Vec<UptimeCheck>, ClientError> {
        self.list(&format!(
            "/v2/projects/{}/sites/{}/uptime_checks?limit={}",
            project_id, site_id, PAGE_LIMIT
        ))
        .await
    }

    pub async fn check_ins(&self, project_id: &str) -> Result<Vec<CheckIn>, ClientError> {
        self.list(&format!("/v2/projects/{}/check_ins", project_id))
            .await
    }

    pub async fn teams(&self, account_id: &str) -> Result<Vec<Team>, ClientError> {
        self.list(&format!("/v2/teams?account_id={}", account_id))
            .await
    }

    pub async fn team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, ClientError> {
        self.list(&format!("/v2/teams/{}/team_members", team_id))
            .await
    }

    pub async fn team_invitations(&self, team_id: &str) -> Result<Vec<TeamInvitation>, ClientError> {
        self.list(&format!("/v2/teams/{}/team_invitations", team_id))
            .await
    }

    pub async fn status_pages(&self, account_id: &str) -> Result<Vec<StatusPage>, ClientError> {
        self.list(&format!("/v2/accounts/{}/status_pages", account_id))
            .await
    }
}
