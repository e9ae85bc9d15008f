use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors from the coaching backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoachError {
    /// The request never got a response (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    #[error("response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub user_id: &'a str,
}

/// Body of `POST /api/chat` as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponseBody {
    pub response: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A coach reply with the server's timestamp resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Accepts RFC 3339 or a naive ISO-8601 datetime, the latter read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Provider-neutral coaching API, mockable in tests.
#[async_trait::async_trait]
pub trait CoachApi: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`CoachError`] when the backend cannot be reached or its
    /// reply cannot be read.
    async fn login(&self, user_id: &str) -> Result<LoginResponse, CoachError>;

    /// # Errors
    ///
    /// Returns a [`CoachError`] on transport failure, non-2xx status or a
    /// malformed body.
    async fn chat(&self, message: &str, user_id: &str) -> Result<ChatReply, CoachError>;
}
