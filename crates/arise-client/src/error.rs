use arise_core::message;
use arise_core::models::evaluator::InvitationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Invitation(#[from] InvitationError),

    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("no assessment in progress")]
    NotStarted,

    #[error("assessment already submitted")]
    AlreadySubmitted,

    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Worth retrying after a pause: missing results (read-after-write
    /// lag), server-side failures, throttling and transport errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            ClientError::Api { status, .. } => *status >= 500 || *status == 429 || *status == 425,
            ClientError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }

    /// Text shown in the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Invitation(e) => e.to_string(),
            other => message::describe(other),
        }
    }
}
