//! Reviewbot - Homework review monitoring and notification bot
//!
//! Polls the Practicum homework API, detects review status changes, and
//! forwards them to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod status;
pub mod telegram;

pub use config::Config;
pub use error::{BotError, Result};

use std::sync::Arc;

use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the bot with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new());

    let api = PracticumClient::new(&config, Arc::clone(&http));
    let notifier = Arc::new(TelegramNotifier::new(&config, Arc::clone(&http)));

    // Reports are diffed against startup time, earlier changes are not replayed.
    let mut engine = Engine::new(
        api,
        notifier,
        config.poll_interval,
        engine::current_epoch_secs(),
    );

    tracing::info!(
        "Reviewbot started, polling every {} seconds",
        config.poll_interval.as_secs()
    );

    // Run the engine (blocks forever)
    engine.run().await;

    Ok(())
}
