use std::env;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// How often and how patiently to re-fetch results that are not ready yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// The n-th retry waits `n * base_delay`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay * retry
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Read `ARISE_API_URL`, `ARISE_API_TOKEN`, `ARISE_TIMEOUT_SECS`,
    /// `ARISE_RESULTS_RETRIES` and `ARISE_RESULTS_BACKOFF_MS`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();
        let base_url = lookup("ARISE_API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let token = lookup("ARISE_API_TOKEN").filter(|t| !t.is_empty());
        let timeout = match lookup("ARISE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse(&v, "ARISE_TIMEOUT_SECS")?),
            None => defaults.timeout,
        };
        let max_retries = match lookup("ARISE_RESULTS_RETRIES") {
            Some(v) => parse(&v, "ARISE_RESULTS_RETRIES")?,
            None => defaults.retry.max_retries,
        };
        let base_delay = match lookup("ARISE_RESULTS_BACKOFF_MS") {
            Some(v) => Duration::from_millis(parse(&v, "ARISE_RESULTS_BACKOFF_MS")?),
            None => defaults.retry.base_delay,
        };

        Ok(Self {
            base_url,
            token,
            timeout,
            retry: RetryPolicy {
                max_retries,
                base_delay,
            },
        })
    }
}

fn parse<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, ClientError> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{key} has invalid value '{value}'")))
}
