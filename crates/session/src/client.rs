//! The network seam between the session and the backend, plus its
//! HTTP implementation.

use async_trait::async_trait;
use serde::Deserialize;

use filmduel_core::types::UserId;
use filmduel_db::models::film::Leaderboard;
use filmduel_db::models::matchup::Matchup;
use filmduel_db::models::vote::{RecordedVote, SubmitVote};

/// Failure modes of a backend call, from the client's point of view.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The user already judged this matchup. Expected, not a bug.
    #[error("This matchup was already judged")]
    DuplicateVote,

    /// The backend rejected the submission's shape or winner.
    #[error("Rejected by the backend: {0}")]
    Rejected(String),

    /// The referenced matchup does not exist.
    #[error("Matchup not found")]
    NotFound,

    /// Transport-level failure (connection, timeout, bad payload).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// The three backend calls a session ever makes.
#[async_trait]
pub trait ArenaClient: Send + Sync {
    /// Fetch a matchup this user has not judged. `None` means the
    /// eligible pool is exhausted — a defined outcome, not an error.
    async fn next_matchup(&self, user_id: UserId) -> Result<Option<Matchup>, ClientError>;

    /// Submit a judgment.
    async fn submit_vote(&self, vote: &SubmitVote) -> Result<RecordedVote, ClientError>;

    /// Fetch the leaderboard.
    async fn leaderboard(
        &self,
        limit: Option<i64>,
        min_comparisons: Option<i32>,
    ) -> Result<Leaderboard, ClientError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// `{ "data": ... }` envelope used by every API response.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error body shape: `{ "error": ..., "code": ... }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: String,
}

/// [`ArenaClient`] over the filmduel HTTP API.
#[derive(Debug, Clone)]
pub struct HttpArenaClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpArenaClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:3000`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    /// Decode a non-success response into the matching [`ClientError`].
    async fn decode_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body: Option<ErrorBody> = response.json().await.ok();
        let (message, code) = match body {
            Some(b) => (b.error, b.code),
            None => (format!("HTTP {status}"), String::new()),
        };

        match code.as_str() {
            "DUPLICATE_VOTE" => ClientError::DuplicateVote,
            "NOT_FOUND" => ClientError::NotFound,
            "INVALID_WINNER" | "VALIDATION_ERROR" => ClientError::Rejected(message),
            _ => ClientError::Transport(format!("HTTP {status}: {message}")),
        }
    }
}

#[async_trait]
impl ArenaClient for HttpArenaClient {
    async fn next_matchup(&self, user_id: UserId) -> Result<Option<Matchup>, ClientError> {
        let response = self
            .http
            .get(self.url("/matchups/next"))
            .query(&[("user_id", user_id.to_string())])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        let envelope: Envelope<Matchup> = response.json().await?;
        Ok(Some(envelope.data))
    }

    async fn submit_vote(&self, vote: &SubmitVote) -> Result<RecordedVote, ClientError> {
        let response = self.http.post(self.url("/votes")).json(vote).send().await?;

        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        let envelope: Envelope<RecordedVote> = response.json().await?;
        Ok(envelope.data)
    }

    async fn leaderboard(
        &self,
        limit: Option<i64>,
        min_comparisons: Option<i32>,
    ) -> Result<Leaderboard, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(min) = min_comparisons {
            query.push(("min_comparisons", min.to_string()));
        }

        let response = self
            .http
            .get(self.url("/leaderboard"))
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        let envelope: Envelope<Leaderboard> = response.json().await?;
        Ok(envelope.data)
    }
}
