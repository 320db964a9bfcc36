use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analytics proxy is not configured")]
    ProxyDisabled,

    #[error("Analytics service unreachable")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("Analytics service timed out")]
    UpstreamTimeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ProxyDisabled => StatusCode::NOT_FOUND,
            AppError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::UpstreamTimeout
        } else {
            AppError::UpstreamUnreachable(e)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::UpstreamUnreachable(e) => warn!("proxy failed: {e}"),
            AppError::Internal(e) => warn!("internal error: {e}"),
            _ => {}
        }

        (status, self.to_string()).into_response()
    }
}
