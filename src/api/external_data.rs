//! Outbound aggregation for `/external-data`

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::api::server_config::{EXTERNAL_REQUEST_TIMEOUT, RANDOM_SAMPLE_DELAY};

/// GitHub repository response (only the field we read)
#[derive(Debug, Deserialize)]
struct RepoResponse {
    #[serde(default)]
    stargazers_count: u64,
}

/// One entry of the aggregated payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExternalItem {
    Github { github: u64 },
    Random { random: f64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalData {
    /// Unix seconds at the time the fan-out completed
    pub timestamp: i64,
    pub data: Vec<ExternalItem>,
}

/// Client for the external sources behind `/external-data`
#[derive(Debug, Clone)]
pub struct ExternalDataClient {
    client: Client,
    github_repo_url: String,
}

impl ExternalDataClient {
    pub fn new(github_repo_url: String) -> Result<Self, reqwest::Error> {
        Self::with_timeout(github_repo_url, EXTERNAL_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(github_repo_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            github_repo_url,
        })
    }

    pub fn github_repo_url(&self) -> &str {
        &self.github_repo_url
    }

    /// Run both sources concurrently. Neither source can fail the result.
    pub async fn fetch(&self) -> ExternalData {
        let (github, random) = tokio::join!(self.github_stars(), delayed_random());

        ExternalData {
            timestamp: chrono::Utc::now().timestamp(),
            data: vec![ExternalItem::Github { github }, ExternalItem::Random { random }],
        }
    }

    /// Star count of the configured repository, `0` on any failure.
    pub async fn github_stars(&self) -> u64 {
        match self.fetch_repo().await {
            Ok(repo) => repo.stargazers_count,
            Err(e) => {
                warn!(url = %self.github_repo_url, error = %e, "GitHub request failed");
                0
            }
        }
    }

    async fn fetch_repo(&self) -> Result<RepoResponse, reqwest::Error> {
        self.client
            .get(&self.github_repo_url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json::<RepoResponse>()
            .await
    }
}

/// A uniform sample in `[0, 1)`, produced after a short delay.
pub async fn delayed_random() -> f64 {
    tokio::time::sleep(RANDOM_SAMPLE_DELAY).await;
    rand::random::<f64>()
}
