use crate::service::ledger::LedgerError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// The one place service outcomes become HTTP responses. Anything not
/// explicitly a caller mistake collapses into a generic 500; the cause
/// is logged here and never written into the response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Transaction not found")]
    NotFound,
    #[error("Too many requests. Please try again later.")]
    RateLimited,
    #[error("Internal Server Error")]
    Internal(anyhow::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::MissingFields | LedgerError::InvalidId => {
                ApiError::Validation(err.to_string())
            }
            LedgerError::NotFound => ApiError::NotFound,
            LedgerError::Internal(err) => ApiError::Internal(err),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(err) = self {
            log::error!(err:? = err; "Unhandled error");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
