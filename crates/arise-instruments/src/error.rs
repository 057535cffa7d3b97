use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("invalid MBTI type '{0}'")]
    InvalidMbtiType(String),

    #[error("unknown conflict mode '{0}'")]
    UnknownMode(String),

    #[error("missing scores: {0}")]
    MissingScores(&'static str),
}
