//! Error handling for the HTTP API
//!
//! Every error leaves the service as `{"detail": "..."}`.

use axum::{
    Json,
    extract::{
        path::ErrorKind,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::ErrorResponse;
use crate::registry::RegistryError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Registry business-rule violation
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Missing or malformed query string
    #[error("{0}")]
    InvalidQuery(String),

    /// Route and handler disagree on path parameters
    #[error("{0}")]
    Internal(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // A name that does not decode as UTF-8 cannot match any activity
            PathRejection::FailedToDeserializePathParams(e)
                if matches!(e.kind(), ErrorKind::InvalidUtf8InPathParam { .. }) =>
            {
                tracing::debug!("Undecodable activity name: {}", e.body_text());
                Self::Registry(RegistryError::ActivityNotFound {
                    activity: e.body_text(),
                })
            }
            other => Self::Internal(other.body_text()),
        }
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        &self.status_code() == status_code
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::ActivityNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Registry(RegistryError::AlreadyRegistered { .. })
            | Self::Registry(RegistryError::NotRegistered { .. }) => StatusCode::BAD_REQUEST,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}
