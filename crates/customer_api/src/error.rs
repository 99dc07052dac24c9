//! HTTP-facing error type.
//!
//! Every failure, including a missing customer, is surfaced as a generic
//! server fault: status 500 with a `{"error", "code"}` body. Storage error
//! details go to the log only, never into the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customer_core::RepoError;
use log::error;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Repo(RepoError),
    /// The connection lock was poisoned, or the blocking store task panicked.
    StoreUnavailable,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::StoreUnavailable => write!(f, "customer store unavailable"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::StoreUnavailable => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Repo(RepoError::NotFound(_)) => "customer_not_found",
            Self::Repo(RepoError::InvalidData(_)) => "invalid_persisted_data",
            Self::Repo(RepoError::Db(_)) => "db_failed",
            Self::StoreUnavailable => "store_unavailable",
        }
    }

    /// Text returned to clients.
    fn public_message(&self) -> String {
        match self {
            Self::Repo(err @ RepoError::NotFound(_)) => err.to_string(),
            Self::Repo(RepoError::Db(_) | RepoError::InvalidData(_)) => {
                "customer store error".to_string()
            }
            Self::StoreUnavailable => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(
            "event=request_failed module=api status=error error_code={} error={}",
            self.error_code(),
            self
        );
        let body = ErrorResponse {
            error: self.public_message(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
