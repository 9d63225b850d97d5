use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Empty location term.")]
    EmptyLocation,
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("flight provider request timed out")]
    Timeout,
    #[error("flight provider request failed ({status}): {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to reach flight provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl OptimizerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyLocation => StatusCode::BAD_REQUEST,
            Self::LocationNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream { .. } | Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
