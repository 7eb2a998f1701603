use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use service::ServiceError;
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

/// Body returned for validation and business-rule rejections.
#[derive(Serialize, ToSchema)]
pub struct ErrorListResp {
    pub errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorListResp { errors }))
                    .into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, ServiceError> {
    fn into_response(self) -> ApiResponse<T> {
        self.map_err(|err| match err {
            ServiceError::Storage(source) => {
                error!("{:?}", source);
                ApiError::ServerError("internal error".to_string())
            }
            err => ApiError::BadRequest(vec![err.to_string()]),
        })
    }
}
