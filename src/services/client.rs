//! GraphQL client
//!
//! One instance is built at startup and handed to every view. Clones share
//! the transport and the response cache.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::cache::InMemoryCache;
use crate::adapters::{GraphqlRequest, GraphqlTransport, HttpTransport, Operation};
use crate::config::Config;
use crate::error::{ClientError, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Serve from the cache when the same query was already answered.
    #[default]
    CacheFirst,
    /// Always go to the network and overwrite the cached result.
    NetworkOnly,
}

#[derive(Clone)]
pub struct GraphqlClient {
    transport: Arc<dyn GraphqlTransport>,
    cache: Arc<RwLock<InMemoryCache>>,
}

impl GraphqlClient {
    /// Create a client talking HTTP to the configured endpoint
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self {
            transport,
            cache: Arc::new(RwLock::new(InMemoryCache::new())),
        }
    }

    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<T, ClientError> {
        let key = InMemoryCache::result_key(operation.name, &variables);

        if policy == FetchPolicy::CacheFirst {
            if let Some(cached) = self.cache.read().await.read_query(&key) {
                debug!("Cache hit for {}", operation.name);
                return Ok(serde_json::from_value(cached)?);
            }
        }

        let data = self.send(operation, variables).await?;
        let typed = serde_json::from_value(data.clone())?;
        self.cache.write().await.write_query(key, &data);
        Ok(typed)
    }

    /// Run a mutation. Entities in the payload are merged into the cache,
    /// the payload itself is not kept as a query result.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, ClientError> {
        let data = self.send(operation, variables).await?;
        let typed = serde_json::from_value(data.clone())?;
        self.cache.write().await.write_entities(&data);
        Ok(typed)
    }

    /// Cached result of a query, if any, without touching the network.
    pub async fn cached(&self, operation: &Operation, variables: &Value) -> Option<Value> {
        let key = InMemoryCache::result_key(operation.name, variables);
        self.cache.read().await.read_query(&key)
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    async fn send(&self, operation: &Operation, variables: Value) -> Result<Value, ClientError> {
        let request = GraphqlRequest::new(operation, variables);
        self.transport.execute(&request).await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::testing::ScriptedTransport;
    use serde_json::json;

    const PING: Operation = Operation {
        name: "Ping",
        document: "query Ping { ping { id value } }",
    };

    const BUMP: Operation = Operation {
        name: "Bump",
        document: "mutation Bump { bump { id value } }",
    };

    #[tokio::test]
    async fn test_cache_first_hits_network_once() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_data(json!({ "ping": { "id": 1, "value": "a" } }));
        let client = GraphqlClient::with_transport(transport.clone());

        let first: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        let second: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_network_only_refreshes_cache() {
        let transport = Arc::new(ScriptedTransport::new());
        transport
            .push_data(json!({ "ping": { "id": 1, "value": "a" } }))
            .push_data(json!({ "ping": { "id": 1, "value": "b" } }));
        let client = GraphqlClient::with_transport(transport.clone());

        let _: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        let fresh: Value = client.query(&PING, json!({}), FetchPolicy::NetworkOnly).await.unwrap();

        assert_eq!(fresh["ping"]["value"], "b");
        assert_eq!(transport.request_count(), 2);
        assert_eq!(
            client.cached(&PING, &json!({})).await.unwrap()["ping"]["value"],
            "b"
        );
    }

    #[tokio::test]
    async fn test_mutation_updates_cached_entities() {
        let transport = Arc::new(ScriptedTransport::new());
        transport
            .push_data(json!({ "ping": { "id": 1, "value": "a" } }))
            .push_data(json!({ "bump": { "id": 1, "value": "z" } }));
        let client = GraphqlClient::with_transport(transport.clone());

        let _: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        let _: Value = client.mutate(&BUMP, json!({})).await.unwrap();

        let cached: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        assert_eq!(cached["ping"]["value"], "z");
        assert_eq!(transport.request_count(), 2);
        assert!(client.cached(&BUMP, &json!({})).await.is_none());
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let transport = Arc::new(ScriptedTransport::new());
        transport
            .push_errors(&["boom"])
            .push_data(json!({ "ping": { "id": 1, "value": "a" } }));
        let client = GraphqlClient::with_transport(transport.clone());

        let err = client
            .query::<Value>(&PING, json!({}), FetchPolicy::CacheFirst)
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Graphql("boom".into()));

        let ok: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        assert_eq!(ok["ping"]["value"], "a");
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_data(json!({ "ping": { "id": 1, "value": "a" } }));
        let client = GraphqlClient::with_transport(transport.clone());
        let other = client.clone();

        let _: Value = client.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        let _: Value = other.query(&PING, json!({}), FetchPolicy::CacheFirst).await.unwrap();
        assert_eq!(transport.request_count(), 1);

        other.clear_cache().await;
        assert!(client.cached(&PING, &json!({})).await.is_none());
    }
}
