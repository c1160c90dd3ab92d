use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    #[error("Conversion rate not available: {0}")]
    RateUnavailableError(String),

    #[error("Failed to fetch prices: {0}")]
    PriceFetchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl From<reqwest::Error> for CustomError {
    fn from(e: reqwest::Error) -> Self {
        CustomError::PriceFetchError(e.to_string())
    }
}

// Error body carried in the failure envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAmountError(_) => StatusCode::BAD_REQUEST,
            CustomError::RateUnavailableError(_) => StatusCode::NOT_FOUND,
            CustomError::PriceFetchError(_) => StatusCode::BAD_GATEWAY,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::Overflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::failure(ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            CustomError::InvalidAmountError("-1".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::RateUnavailableError("XYZ".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CustomError::PriceFetchError("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            CustomError::Overflow("sum_to_n".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[actix_web::test]
    async fn error_response_uses_failure_envelope() {
        let response = CustomError::ValidationError("n too large".into()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "FAILURE");
        assert_eq!(body["code"], 400);
        assert!(body["result"].is_null());
        assert_eq!(body["error"]["code"], 400);
        assert_eq!(body["error"]["message"], "Invalid input: n too large");
    }
}
