use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaddockError {
    /// Network failure, timeout, or non-2xx response from the race-data
    /// service. Non-2xx statuses are folded in via
    /// `reqwest::Response::error_for_status`.
    #[error("Race data service unavailable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),

    #[error("Response decoding failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration value: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaddockError {
    /// True for the failures the list-style consumers degrade on.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, PaddockError::RemoteUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, PaddockError>;
