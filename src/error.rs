use crate::features::rides::validation::RideValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

// JSON body of every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    // 400, input rejected before the store is touched
    Validation(RideValidationError),
    // 404, the query was fine but matched nothing
    RidesNotFound,
    // 500, details stay in the logs
    Server(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            ApiError::RidesNotFound => (
                StatusCode::NOT_FOUND,
                "RIDES_NOT_FOUND_ERROR",
                "Could not find any rides".to_string(),
            ),
            ApiError::Server(err) => {
                tracing::error!(error = ?err, "Request failed with a server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    "Unknown error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error_code: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RideValidationError> for ApiError {
    fn from(err: RideValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Server(err)
    }
}
