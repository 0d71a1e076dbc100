//! Services module
//!
//! The GraphQL client with its response cache, and the typed project
//! operations built on top of it.

pub mod cache;
pub mod client;
pub mod projects;

pub use cache::InMemoryCache;
pub use client::{FetchPolicy, GraphqlClient};
pub use projects::{ProjectService, CREATE_PROJECT, GET_ALL_PROJECTS};
