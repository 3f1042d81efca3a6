use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid interval [{lower}, {upper}]: lower bound must be finite and below the upper bound")]
    InvalidInterval { lower: f64, upper: f64 },

    #[error("refinement level {level} exceeds the supported limit {limit}")]
    LevelTooDeep { level: usize, limit: usize },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("input closed before a value was read")]
    InputClosed,

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}
