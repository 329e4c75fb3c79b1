use std::io;
use thiserror::Error;

/// Custom error type for the hostwatch application
#[derive(Error, Debug)]
pub enum WatchdogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Dispatch error: {0}")]
    Dispatch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the hostwatch application
pub type Result<T> = std::result::Result<T, WatchdogError>;

impl WatchdogError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WatchdogError::Config(msg.into())
    }

    /// Create a probe error
    pub fn probe<S: Into<String>>(msg: S) -> Self {
        WatchdogError::Probe(msg.into())
    }

    /// Create a dispatch error
    pub fn dispatch<S: Into<String>>(msg: S) -> Self {
        WatchdogError::Dispatch(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WatchdogError::Other(msg.into())
    }
}
