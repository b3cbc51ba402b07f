//! Configuration for the review bot
//!
//! All secrets come from the environment (optionally via a `.env` file);
//! the endpoint and polling interval are fixed.

use std::fmt;
use std::time::Duration;

use crate::error::{BotError, Result};

/// Endpoint serving homework review statuses
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Fixed delay between poll cycles
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Runtime configuration, constructed once at startup and passed by
/// reference into the API client and the notifier.
#[derive(Clone)]
pub struct Config {
    pub api_token: String,
    pub messaging_token: String,
    pub chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from the process environment. Reads a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            api_token: required(&lookup, "API_TOKEN")?,
            messaging_token: required(&lookup, "MESSAGING_TOKEN")?,
            chat_id: required(&lookup, "CHAT_ID")?,
            endpoint: ENDPOINT.to_string(),
            poll_interval: POLL_INTERVAL,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String> {
    lookup(name).ok_or(BotError::MissingConfig(name))
}
