//! Error types for the review bot

/// The specific way an API response failed shape validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedKind {
    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("the \"homeworks\" key is missing")]
    MissingHomeworks,

    #[error("the \"current_date\" key is missing")]
    MissingCurrentDate,

    #[error("\"homeworks\" is not an array")]
    HomeworksNotAnArray,
}

/// Errors that can occur while polling and notifying
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("missing required environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("malformed API response: {0}")]
    MalformedResponse(#[from] MalformedKind),

    #[error("unsupported homework status {0:?}")]
    UnsupportedStatus(String),

    #[error("homework record is missing the {0:?} field")]
    MissingField(&'static str),

    #[error("notification delivery failed: {0}")]
    Notifier(String),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;
