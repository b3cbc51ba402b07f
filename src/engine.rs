//! Poll cycle orchestration

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::response::check_response;
use crate::status::parse_status;
use crate::Result;

/// Mutable state carried across poll cycles
#[derive(Debug)]
struct PollState {
    /// Unix timestamp the next request asks the API to diff against
    cursor: u64,
    /// Text of the last error alert, used to suppress repeats
    last_error: Option<String>,
}

/// Drives the poll loop against the homework API and reports through the notifier
#[derive(Debug)]
pub struct Engine {
    api: PracticumClient,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    state: PollState,
}

impl Engine {
    pub fn new(
        api: PracticumClient,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
        initial_cursor: u64,
    ) -> Self {
        Self {
            api,
            notifier,
            poll_interval,
            state: PollState {
                cursor: initial_cursor,
                last_error: None,
            },
        }
    }

    /// Timestamp the next poll will diff against
    pub fn cursor(&self) -> u64 {
        self.state.cursor
    }

    /// Text of the last failure alert, if any
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    /// Poll forever, sleeping the configured interval between cycles
    pub async fn run(&mut self) {
        loop {
            self.poll_once().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Execute a single poll cycle.
    ///
    /// Failures are reported to the chat, but an alert whose text matches
    /// the previous one is suppressed so a persistent failure produces a
    /// single message. The suppression record is never cleared, not even
    /// by a successful cycle in between.
    pub async fn poll_once(&mut self) {
        if let Err(error) = self.try_poll().await {
            let message = format!("Bot failure: {error}");
            tracing::error!("{}", message);
            if self.state.last_error.as_deref() != Some(message.as_str()) {
                self.state.last_error = Some(message.clone());
                self.deliver(&message).await;
            }
        }
    }

    async fn try_poll(&mut self) -> Result<()> {
        let response = self.api.homework_statuses(self.state.cursor).await?;
        check_response(&response)?;

        // Only the first record of a batch is reported.
        if let Some(first) = response
            .get("homeworks")
            .and_then(Value::as_array)
            .and_then(|homeworks| homeworks.first())
        {
            let message = parse_status(first)?;
            self.deliver(&message).await;
        }

        // The cursor only moves on a fully successful cycle, and only to
        // a timestamp the server itself reported.
        match response.get("current_date").and_then(Value::as_u64) {
            Some(next) => self.state.cursor = next,
            None => tracing::debug!("current_date is not a timestamp, keeping the cursor"),
        }

        Ok(())
    }

    /// Delivery failures are logged and swallowed so the poll loop survives.
    async fn deliver(&self, message: &str) {
        tracing::debug!("Sending notification: {}", message);
        if let Err(e) = self.notifier.notify(message).await {
            tracing::error!("Failed to deliver notification: {}", e);
        }
    }
}

pub(crate) fn current_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
