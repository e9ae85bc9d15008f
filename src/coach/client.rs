//! HTTP client for the coaching backend.
//!
//! Thin wrapper over `/api/login`, `/api/chat` and `/health`. Login bodies
//! are read whatever the status code, since the backend reports rejected
//! logins in the body.

use std::time::Duration;

use chrono::Utc;

use super::types::{
    parse_timestamp, ChatReply, ChatRequest, ChatResponseBody, CoachApi, CoachError,
    HealthStatus, LoginRequest, LoginResponse,
};
use crate::config::CoachConfig;

pub struct HttpCoachClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCoachClient {
    /// # Errors
    ///
    /// Returns [`CoachError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, CoachError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| CoachError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &CoachConfig) -> Result<Self, CoachError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads status and body; transport errors become [`CoachError::Request`].
    async fn read(response: reqwest::Response) -> Result<(u16, String), CoachError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CoachError::Request(e.to_string()))?;
        Ok((status, text))
    }

    pub async fn health(&self) -> Result<HealthStatus, CoachError> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| CoachError::Request(e.to_string()))?;
        let (status, text) = Self::read(response).await?;
        if !(200..300).contains(&status) {
            return Err(CoachError::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| CoachError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CoachApi for HttpCoachClient {
    async fn login(&self, user_id: &str) -> Result<LoginResponse, CoachError> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&LoginRequest { user_id })
            .send()
            .await
            .map_err(|e| CoachError::Request(e.to_string()))?;
        let (status, text) = Self::read(response).await?;

        match serde_json::from_str::<LoginResponse>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !(200..300).contains(&status) => {
                Err(CoachError::Status { status, body: text })
            }
            Err(e) => Err(CoachError::Parse(e.to_string())),
        }
    }

    async fn chat(&self, message: &str, user_id: &str) -> Result<ChatReply, CoachError> {
        let response = self
            .http
            .post(self.url("/api/chat"))
            .json(&ChatRequest { message, user_id })
            .send()
            .await
            .map_err(|e| CoachError::Request(e.to_string()))?;
        let (status, text) = Self::read(response).await?;

        if !(200..300).contains(&status) {
            return Err(CoachError::Status { status, body: text });
        }

        let body: ChatResponseBody =
            serde_json::from_str(&text).map_err(|e| CoachError::Parse(e.to_string()))?;
        let timestamp = match body.timestamp.as_deref().and_then(parse_timestamp) {
            Some(ts) => ts,
            None => {
                tracing::warn!(raw = ?body.timestamp, "unreadable reply timestamp, using local time");
                Utc::now()
            }
        };
        Ok(ChatReply {
            response: body.response,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> HttpCoachClient {
        HttpCoachClient::new(&server.uri(), Duration::from_secs(5), Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpCoachClient::new(
            "http://localhost:8000/",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/chat"), "http://localhost:8000/api/chat");
    }

    #[tokio::test]
    async fn test_login_wire_format() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"user_id": "alex"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Welcome back, Alex!",
                "user_data": {"name": "Alex", "fitness_level": "intermediate"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client(&server).login("alex").await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Welcome back, Alex!");
        assert_eq!(resp.user_data.unwrap()["name"], "Alex");
    }

    #[tokio::test]
    async fn test_login_rejection_body_read_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "message": "User not found"
            })))
            .mount(&server)
            .await;

        let resp = client(&server).login("nobody").await.unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "User not found");
    }

    #[tokio::test]
    async fn test_login_unparseable_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client(&server).login("alex").await.unwrap_err();
        assert!(matches!(err, CoachError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_chat_wire_format() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({"message": "Suggest a quick workout", "user_id": "alex"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Try 3 rounds of 10 squats.",
                "timestamp": "2024-06-01T08:30:00.000123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(&server)
            .chat("Suggest a quick workout", "alex")
            .await
            .unwrap();
        assert_eq!(reply.response, "Try 3 rounds of 10 squats.");
        assert_eq!((reply.timestamp.hour(), reply.timestamp.minute()), (8, 30));
    }

    #[tokio::test]
    async fn test_chat_missing_timestamp_uses_now() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
            .mount(&server)
            .await;

        let before = Utc::now();
        let reply = client(&server).chat("hi", "alex").await.unwrap();
        assert!(reply.timestamp >= before);
    }

    #[tokio::test]
    async fn test_chat_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let err = client(&server).chat("hi", "alex").await.unwrap_err();
        assert_eq!(
            err,
            CoachError::Status {
                status: 503,
                body: "busy".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_chat_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server).chat("hi", "alex").await.unwrap_err();
        assert!(matches!(err, CoachError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let client = HttpCoachClient::new(
            "http://127.0.0.1:1",
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = client.chat("hi", "alex").await.unwrap_err();
        assert!(matches!(err, CoachError::Request(_)));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "timestamp": "2024-06-01T08:30:00"
            })))
            .mount(&server)
            .await;

        let health = client(&server).health().await.unwrap();
        assert!(health.is_healthy());
    }
}
