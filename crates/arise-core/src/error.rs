use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid answer value: {0}")]
    InvalidAnswer(String),

    #[error("invalid assessment kind: {0}")]
    InvalidKind(String),

    #[error("invalid invitation token: {0}")]
    InvalidToken(String),

    #[error("evaluator status cannot move from {from} to {to}")]
    StatusRegression { from: String, to: String },
}
