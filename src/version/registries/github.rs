//! GitHub Releases API source implementation

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;
use crate::version::registry::ReleaseSource;
use crate::version::types::ReleaseRecord;

/// Release source backed by the GitHub Releases API
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    repository: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Creates a source for `repository` ("owner/name") under `base_url`
    pub fn new(
        base_url: &str,
        repository: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token,
        })
    }

    fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.base_url, self.repository)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn fetch_releases(&self) -> Result<Vec<ReleaseRecord>, RegistryError> {
        let url = self.releases_url();
        debug!("Fetching releases from {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(self.repository.clone()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<ReleaseRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Fetched {} releases for {}", releases.len(), self.repository);

        Ok(releases)
    }
}
