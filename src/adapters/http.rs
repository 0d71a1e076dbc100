//! HTTP transport for the GraphQL endpoint
//!
//! POSTs the request as JSON and decodes the `{data, errors?}` envelope.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::graphql::{join_error_messages, GraphqlRequest, GraphqlResponse, GraphqlTransport};
use crate::config::Config;
use crate::error::{ClientError, ConfigError};

/// Longest response body kept in a [`ClientError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Transport backed by a `reqwest` client
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
        })
    }

    /// Create a transport with an existing reqwest client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, ClientError> {
        debug!("GraphQL {} -> {}", request.operation_name, self.endpoint);

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("GraphQL {} failed with status {}", request.operation_name, status);

            // Validation and variable errors often arrive as a 4xx with a
            // regular `{errors}` envelope.
            if let Ok(envelope) = serde_json::from_str::<GraphqlResponse>(&body) {
                if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
                    return Err(ClientError::Graphql(join_error_messages(&errors)));
                }
            }

            return Err(ClientError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let bytes = resp.bytes().await?;
        let envelope: GraphqlResponse = serde_json::from_slice(&bytes)?;
        Ok(envelope)
    }
}

fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
