use crate::api::rate_limit::{rate_limit, RateLimitState};
use crate::api::routes;
use crate::domain::repository::TransactionRepository;
use crate::domain::service::RateGuard;
use crate::service::ledger::LedgerService;
use actix_web::middleware::from_fn;
use actix_web::web;
use actix_web::web::ServiceConfig;
use std::sync::Arc;

pub fn create_app(
    repo: Arc<dyn TransactionRepository>,
    guard: Arc<dyn RateGuard>,
    limit_key: String,
) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        let service = web::Data::new(LedgerService::new(Arc::clone(&repo)));
        let limiter = web::Data::new(RateLimitState::new(Arc::clone(&guard), limit_key.clone()));

        // health stays outside the guarded scope so probes are never throttled
        cfg.app_data(service)
            .app_data(limiter)
            .service(routes::health)
            .service(
                web::scope("/api/transactions")
                    .wrap(from_fn(rate_limit))
                    .service(routes::get_summary)
                    .service(routes::get_transactions)
                    .service(routes::create_transaction)
                    .service(routes::delete_transaction),
            );
    })
}
