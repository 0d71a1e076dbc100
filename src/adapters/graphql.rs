//! GraphQL wire types
//!
//! Request body, response envelope and the transport seam used by the client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// Message used for a reported error that carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown GraphQL error";

/// Separator between messages when several errors are reported at once.
pub const ERROR_SEPARATOR: &str = ", ";

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

/// JSON body POSTed to the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    pub operation_name: String,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(operation: &Operation, variables: Value) -> Self {
        Self {
            query: operation.document.to_string(),
            operation_name: operation.name.to_string(),
            variables,
        }
    }
}

/// Response envelope `{data, errors?}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

impl GraphqlResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Unwrap the `data` member.
    ///
    /// A non-empty `errors` array wins over any partial data: the messages
    /// are joined into a single [`ClientError::Graphql`].
    pub fn into_data(self) -> Result<Value, ClientError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ClientError::Graphql(join_error_messages(&errors)));
        }

        match self.data {
            Some(Value::Null) | None => Err(ClientError::Decode(
                "response contained neither data nor errors".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }
}

pub fn join_error_messages(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(UNKNOWN_ERROR_MESSAGE)
        })
        .collect::<Vec<_>>()
        .join(ERROR_SEPARATOR)
}

/// Sends a GraphQL request and returns the decoded envelope.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, ClientError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport that replays scripted responses.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<GraphqlResponse, ClientError>>>,
        requests: Mutex<Vec<GraphqlRequest>>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Hold every request until the returned handle is notified.
        pub fn gated() -> (Self, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            let transport = Self {
                gate: Some(gate.clone()),
                ..Default::default()
            };
            (transport, gate)
        }

        pub fn push_data(&self, data: Value) -> &Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(GraphqlResponse::ok(data)));
            self
        }

        pub fn push_errors(&self, messages: &[&str]) -> &Self {
            let errors = messages
                .iter()
                .map(|m| serde_json::json!({ "message": m }))
                .collect();
            self.responses.lock().unwrap().push_back(Ok(GraphqlResponse {
                data: None,
                errors: Some(errors),
            }));
            self
        }

        pub fn push_failure(&self, error: ClientError) -> &Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<GraphqlRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GraphqlTransport for ScriptedTransport {
        async fn execute(
            &self,
            request: &GraphqlRequest,
        ) -> Result<GraphqlResponse, ClientError> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> GraphqlResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_data_is_returned() {
        let data = parse(json!({ "data": { "projects": [] } })).into_data().unwrap();
        assert_eq!(data, json!({ "projects": [] }));
    }

    #[test]
    fn test_errors_are_joined() {
        let err = parse(json!({
            "data": null,
            "errors": [
                { "message": "name must not be empty" },
                { "message": "related_person is required" }
            ]
        }))
        .into_data()
        .unwrap_err();

        assert_eq!(
            err,
            ClientError::Graphql("name must not be empty, related_person is required".into())
        );
        assert_eq!(err.to_string(), "name must not be empty, related_person is required");
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let err = parse(json!({
            "errors": [{ "extensions": { "code": "INTERNAL" } }, { "message": "" }, "boom"]
        }))
        .into_data()
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown GraphQL error, Unknown GraphQL error, Unknown GraphQL error"
        );
    }

    #[test]
    fn test_errors_win_over_partial_data() {
        let err = parse(json!({
            "data": { "projects": [] },
            "errors": [{ "message": "partial failure" }]
        }))
        .into_data()
        .unwrap_err();
        assert_eq!(err, ClientError::Graphql("partial failure".into()));
    }

    #[test]
    fn test_empty_errors_array_is_not_an_error() {
        let data = parse(json!({ "data": { "ok": true }, "errors": [] })).into_data();
        assert!(data.is_ok());
    }

    #[test]
    fn test_missing_data_is_decode_error() {
        let err = parse(json!({})).into_data().unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let op = Operation {
            name: "GetAllProjects",
            document: "query GetAllProjects { projects { id } }",
        };
        let body = serde_json::to_value(GraphqlRequest::new(&op, json!({}))).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "query GetAllProjects { projects { id } }",
                "operationName": "GetAllProjects",
                "variables": {}
            })
        );
    }
}
