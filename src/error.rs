//! Error types shared across the client, views and configuration

/// Failure of a GraphQL request.
///
/// `Transport` and `Status` are network-level failures, `Graphql` is an
/// application error reported in the response's `errors` array.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Graphql(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid GraphQL endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid request timeout '{0}': expected whole seconds")]
    InvalidTimeout(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}
