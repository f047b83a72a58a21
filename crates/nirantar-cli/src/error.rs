use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] nirantar_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unknown emergency contact '{0}'. Use a number (e.g. 112) or a name such as police")]
    UnknownContact(String),
    #[error("Unknown safety topic '{0}'. Choose flood, earthquake, fire or general")]
    UnknownTopic(String),
    #[error("{0}")]
    Offline(String),
    #[error("Sync failed: {0}")]
    SyncFailed(String),
}
