pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use config::Config;
pub use error::{ClientError, ConfigError};
pub use services::{FetchPolicy, GraphqlClient, ProjectService};
