use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    #[error("accuracy threshold must lie in [0, 100], got {0}")]
    InvalidThreshold(f32),

    #[error("max attempts must be at least 1")]
    InvalidAttempts,

    #[error("invalid capture setting: {0}")]
    InvalidCapture(String),

    #[error("letter size must be a positive finite number, got {0}")]
    InvalidLetterSize(f32),

    #[error("unknown stage id {0}")]
    UnknownStage(u32),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
