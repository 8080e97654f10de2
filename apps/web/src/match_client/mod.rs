//! Match client, the only module that talks to the remote matching service.
//!
//! One `POST <base_url>/match` per call. No retries, no timeout override,
//! no de-duplication: failures are returned to the caller unchanged.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::candidate::CandidateMatch;
use crate::models::job::{Job, MatchRequest};

const MATCH_PATH: &str = "/match";

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("matching service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed match response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can rank candidates for a job.
///
/// Carried in `AppState` as `Arc<dyn CandidateMatcher>`.
#[async_trait]
pub trait CandidateMatcher: Send + Sync {
    async fn match_candidates(&self, job: &Job) -> Result<Vec<CandidateMatch>, MatchError>;
}

/// HTTP client for the matching service.
#[derive(Clone)]
pub struct MatchClient {
    client: Client,
    endpoint: String,
}

impl MatchClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), MATCH_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CandidateMatcher for MatchClient {
    async fn match_candidates(&self, job: &Job) -> Result<Vec<CandidateMatch>, MatchError> {
        debug!(endpoint = %self.endpoint, title = %job.title, "Requesting candidate matches");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&MatchRequest { job })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let matches: Vec<CandidateMatch> = serde_json::from_str(&body)?;

        debug!(count = matches.len(), "Matching service responded");
        Ok(matches)
    }
}
