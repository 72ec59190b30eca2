use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<(StatusCode, Json<T>), AppError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error_message: err.message().to_string(),
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log_app_error(&self);
        (self.status(), Json(ErrorBody::from(&self))).into_response()
    }
}

pub(crate) fn log_app_error(err: &AppError) {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), message = err.message(), "request failed");
    } else {
        tracing::debug!(status = status.as_u16(), message = err.message(), "request rejected");
    }
}
