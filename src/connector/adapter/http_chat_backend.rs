use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatBackend;
use crate::domain::{ChatAnswer, ChatError, ChatQuery, Source};

/// Default target: the clinic backend running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const QUERY_PATH: &str = "/langchain/query";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration for [`HttpChatBackend`].
///
/// Constructed explicitly and handed to the backend; there is no process-wide
/// client instance.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: Vec<(String, String)>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
        }
    }
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

/// Minimal subset of the backend's query response we care about.
///
/// `answer` is required for a usable response but modeled as optional so an
/// answer-less body classifies as `InvalidResponse` instead of a decode error.
#[derive(Deserialize)]
struct QueryResponse {
    answer: Option<String>,
    question: Option<String>,
    sources: Option<Vec<Source>>,
}

/// HTTP implementation of [`ChatBackend`] against the clinic backend's
/// `POST /langchain/query` endpoint.
///
/// Performs exactly one attempt per call and classifies each failure:
/// 404 means the chat service is unavailable, 500 is a server error, a
/// request that never produced a response is a network error, and a response
/// without an answer is invalid. Retry lives in
/// [`crate::application::AskQuestionUseCase`].
pub struct HttpChatBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpChatBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ChatError::unknown(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ChatError::unknown(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ChatError::unknown(format!("failed to build HTTP client: {e}")))?;

        let url = format!("{}{}", config.base_url.trim_end_matches('/'), QUERY_PATH);
        Ok(Self { client, url })
    }

    /// Convenience constructor reading configuration from the environment:
    /// `CLINICHAT_BASE_URL`, defaulting to `http://localhost:8000`.
    pub fn from_env() -> Result<Self, ChatError> {
        let base = std::env::var("CLINICHAT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(HttpBackendConfig::new(base))
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn query(&self, query: &ChatQuery) -> Result<ChatAnswer, ChatError> {
        debug!(
            "POST {} (language={}, enhance_retrieval={})",
            self.url,
            query.language(),
            query.enhance_retrieval()
        );

        // A send error means no response ever arrived (refused connection,
        // DNS failure, timeout): always a network error to the user.
        let response = match self.client.post(&self.url).json(query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("chat backend unreachable: {e}");
                return Err(ChatError::NetworkError);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("chat backend returned {status}: {body}");
            return Err(ChatError::from_status(status.as_u16()));
        }

        let payload: QueryResponse = response
            .json()
            .await
            .map_err(|e| ChatError::unknown(format!("failed to decode chat response: {e}")))?;

        let answer = match payload.answer {
            Some(answer) if !answer.is_empty() => answer,
            _ => return Err(ChatError::invalid_response("response is missing an answer")),
        };

        let mut chat_answer = ChatAnswer::new(answer);
        if let Some(question) = payload.question {
            chat_answer = chat_answer.with_question(question);
        }
        if let Some(sources) = payload.sources {
            chat_answer = chat_answer.with_sources(sources);
        }
        Ok(chat_answer)
    }
}
