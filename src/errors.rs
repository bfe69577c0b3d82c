use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type FraudResult<T> = std::result::Result<T, FraudError>;

#[derive(Error, Debug)]
pub enum FraudError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for FraudError {
    fn status_code(&self) -> StatusCode {
        match self {
            FraudError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FraudError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            FraudError::Validation(_) => "VALIDATION_ERROR",
            FraudError::Internal(_) => "INTERNAL_ERROR",
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
            details: None,
        })
    }
}
