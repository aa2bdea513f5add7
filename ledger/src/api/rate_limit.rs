use crate::api::error::ApiError;
use crate::domain::service::RateGuard;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, ResponseError};
use std::sync::Arc;

/// All traffic shares one bucket: the key does not discriminate between
/// callers. Making it per-user would be a behaviour change, so the key
/// is configuration rather than a constant buried here.
pub struct RateLimitState {
    guard: Arc<dyn RateGuard>,
    key: String,
}

impl RateLimitState {
    pub fn new(guard: Arc<dyn RateGuard>, key: String) -> RateLimitState {
        RateLimitState { guard, key }
    }
}

pub async fn rate_limit<B>(
    state: web::Data<RateLimitState>,
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error>
where
    B: MessageBody,
{
    match state.guard.allow(&state.key).await {
        Ok(true) => Ok(next.call(req).await?.map_into_left_body()),
        Ok(false) => {
            let res = ApiError::RateLimited.error_response();
            Ok(req.into_response(res).map_into_right_body())
        }
        // a broken guard is not an allow
        Err(err) => {
            let res = ApiError::Internal(err).error_response();
            Ok(req.into_response(res).map_into_right_body())
        }
    }
}
