use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::{calculator::CalculatorError, random::RandomError};
use crate::domain::error::TodoError;

/// Wire shape of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody { pub error: String }

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody { pub message: String }

/// `axum::Json` whose rejections come back as [`ErrorBody`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` whose rejections come back as [`ErrorBody`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    #[error(transparent)]
    Random(#[from] RandomError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Todo(TodoError::DuplicateId(_) | TodoError::IdsExhausted) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Todo(TodoError::Validation(_))
            | ApiError::Calculator(_)
            | ApiError::Random(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, axum::Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
