use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tradewind_order::OrderError;

#[derive(Debug)]
pub enum AppError {
    NotFoundError { message: String, code: &'static str },
    BadGateway(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_message) = match self {
            AppError::NotFoundError { message, code } => (StatusCode::NOT_FOUND, code, message),
            AppError::BadGateway(msg) => {
                tracing::error!("Downstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "DOWNSTREAM_FAILURE", msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound { message, code } => AppError::NotFoundError { message, code },
            OrderError::Downstream(source) => AppError::BadGateway(source.to_string()),
            OrderError::Storage(source) => AppError::InternalServerError(source.to_string()),
        }
    }
}
