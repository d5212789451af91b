use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing URL Parameter")]
    MissingUrl,

    #[error("Missing video ID")]
    MissingVideoId,

    #[error("Could Not Find Video")]
    VideoNotFound,

    #[error("Failed to fetch data: {0}")]
    FetchError(String),

    #[error("Error decoding upstream response: {0}")]
    DecodeError(String),

    #[error("Upstream responded with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
