use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Catalog(err) if err.status() == Some(404) => StatusCode::NOT_FOUND,
            AppError::Catalog(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Attached to the response of a failed page handler. The error boundary
/// middleware swaps such responses for the fallback or not-found page.
#[derive(Clone, Debug)]
pub struct UnhandledError {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.status_code().into_response();
        response.extensions_mut().insert(UnhandledError {
            message: self.to_string(),
        });
        response
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// JSON flavour of [`AppError`] for the `/api/v1` routes.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            error!(error = %self.0, status = %status, "api request failed");
        } else {
            warn!(error = %self.0, status = %status, "api request rejected");
        }

        let body = ErrorResponse {
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
