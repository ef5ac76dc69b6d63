use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    RequestTimeout { url: String },

    #[error("HTTP {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Script not found: {0}")]
    ScriptNotFound(String),

    #[error("Default config template not found: {0}")]
    TemplateNotFound(String),
}

impl DomainError {
    /// True for errors that say nothing about the target's state, only
    /// that it could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::RequestFailed { .. } | DomainError::RequestTimeout { .. }
        )
    }
}
