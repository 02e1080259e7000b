use thiserror::Error;

/// Failure surfaced by a chat query, classified into the category shown to
/// clinic staff. Classification happens once per attempt; only the final
/// failure (or the eventual success) crosses the client boundary.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Backend answered 404: the chat service is not deployed or not routed.
    #[error("chat service is currently unavailable")]
    ServiceUnavailable,

    /// Backend answered 500.
    #[error("server error occurred, try again later")]
    ServerError,

    /// No HTTP response at all: connection refused, DNS failure, timeout.
    #[error("network error, check your connection")]
    NetworkError,

    /// A response arrived but carried no usable answer.
    #[error("invalid response from chat service: {0}")]
    InvalidResponse(String),

    /// Anything else, with the underlying failure's message passed through.
    #[error("{0}")]
    Unknown(String),
}

impl ChatError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Wrap an arbitrary failure message. Falls back to a generic message
    /// when the underlying failure carries none.
    pub fn unknown(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.is_empty() {
            Self::Unknown("something went wrong, please try again".to_string())
        } else {
            Self::Unknown(msg)
        }
    }

    /// Classify an HTTP status the backend answered with.
    ///
    /// 404 means the chat service itself is absent (the admin console and the
    /// assistant deploy separately), hence `ServiceUnavailable` rather than a
    /// generic not-found.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::ServiceUnavailable,
            500 => Self::ServerError,
            other => Self::unknown(format!("chat service returned unexpected status {other}")),
        }
    }

    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError)
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError)
    }

    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }
}
