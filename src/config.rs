//! Runtime configuration
//!
//! The endpoint is resolved from the environment, after loading a `.env`
//! file when one is present.

use reqwest::Url;
use std::time::Duration;
use tracing::warn;

use crate::error::ConfigError;

pub const URL_VAR: &str = "GRAPHQL_URL";
pub const LEGACY_URL_VAR: &str = "NEXT_PUBLIC_GRAPHQL_URL";
pub const TIMEOUT_VAR: &str = "GRAPHQL_TIMEOUT_SECS";
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:3000/api/graphql";

#[derive(Debug, Clone)]
pub struct Config {
    pub graphql_url: Url,
    /// No timeout is applied unless one is configured.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn new(graphql_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            graphql_url: parse_url(graphql_url)?,
            request_timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load `.env` (if any) and resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = match non_blank(URL_VAR).or_else(|| non_blank(LEGACY_URL_VAR)) {
            Some(url) => url,
            None => {
                warn!(
                    "{} is not set, falling back to {}",
                    URL_VAR, DEFAULT_GRAPHQL_URL
                );
                DEFAULT_GRAPHQL_URL.to_string()
            }
        };

        let request_timeout = match non_blank(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            graphql_url: parse_url(url.trim())?,
            request_timeout,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
