//! In-memory response cache
//!
//! Query results are stored per operation and variables. Every object that
//! carries an `id` is normalized into a shared entity table and replaced by a
//! reference, so a later write of the same entity (for instance a mutation
//! result) is visible through every cached query that points at it.

use serde_json::{Map, Value};
use std::collections::HashMap;

const REF_KEY: &str = "__ref";
const TYPENAME_KEY: &str = "__typename";
const DEFAULT_TYPENAME: &str = "Project";

#[derive(Debug, Default)]
pub struct InMemoryCache {
    results: HashMap<String, Value>,
    entities: HashMap<String, Map<String, Value>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key a query result by operation name and canonical variables.
    pub fn result_key(operation_name: &str, variables: &Value) -> String {
        format!("{}({})", operation_name, variables)
    }

    /// Store a query result, normalizing the entities it contains.
    pub fn write_query(&mut self, key: String, data: &Value) {
        let normalized = self.normalize(data);
        self.results.insert(key, normalized);
    }

    /// Store only the entities of a result, without keeping the result
    /// itself. Used for mutation payloads.
    pub fn write_entities(&mut self, data: &Value) {
        self.normalize(data);
    }

    /// Read a cached result with every reference resolved.
    pub fn read_query(&self, key: &str) -> Option<Value> {
        self.results.get(key).map(|v| self.resolve(v))
    }

    pub fn entity(&self, key: &str) -> Option<Value> {
        self.entities
            .get(key)
            .map(|fields| self.resolve(&Value::Object(fields.clone())))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.entities.clear();
    }

    fn normalize(&mut self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.normalize(v)).collect()),
            Value::Object(fields) => {
                let normalized: Map<String, Value> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), self.normalize(v)))
                    .collect();

                match entity_key(fields) {
                    Some(key) => {
                        self.entities
                            .entry(key.clone())
                            .or_default()
                            .extend(normalized);
                        let mut reference = Map::new();
                        reference.insert(REF_KEY.to_string(), Value::String(key));
                        Value::Object(reference)
                    }
                    None => Value::Object(normalized),
                }
            }
            other => other.clone(),
        }
    }

    fn resolve(&self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.resolve(v)).collect()),
            Value::Object(fields) => {
                if let Some(Value::String(key)) = fields.get(REF_KEY) {
                    return match self.entities.get(key) {
                        Some(entity) => self.resolve(&Value::Object(entity.clone())),
                        None => Value::Null,
                    };
                }
                Value::Object(
                    fields
                        .iter()
                        .map(|(k, v)| (k.clone(), self.resolve(v)))
                        .collect(),
                )
            }
            other => other.clone(),
        }
    }
}

/// `Typename:id` for objects that carry an identifier.
pub fn entity_key(fields: &Map<String, Value>) -> Option<String> {
    let id = match fields.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let typename = fields
        .get(TYPENAME_KEY)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TYPENAME);
    Some(format!("{}:{}", typename, id))
}
