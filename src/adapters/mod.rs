//! External service adapters
//!
//! - GraphQL wire types and the transport seam
//! - HTTP transport to the configured endpoint

pub mod graphql;
pub mod http;

pub use graphql::{GraphqlRequest, GraphqlResponse, GraphqlTransport, Operation};
pub use http::HttpTransport;

#[cfg(test)]
pub(crate) use graphql::testing;
