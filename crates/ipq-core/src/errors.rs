/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the pipeline
/// can handle failures consistently (user-facing rejection vs logged cause).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("reputation service error: {0}")]
    Reputation(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
