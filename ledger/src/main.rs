use actix_web::{App, HttpServer};
use ledger::api::app::create_app;
use ledger::domain::repository::TransactionRepository;
use ledger::domain::service::RateGuard;
use ledger::infra;
use ledger::infra::keep_alive::KeepAlive;
use ledger::infra::rate_limit::RedisRateGuard;
use ledger::infra::repository::PgTransactionRepository;
use std::env;
use std::sync::Arc;
use std::time::Duration;

const RATE_LIMIT_MAX_REQUESTS: i64 = 100;
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(14 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let pool = infra::db::pg().await;
    if let Err(err) = infra::db::init_db(&pool).await {
        log::error!(err:? = err; "Error initializing DB");
        std::process::exit(1);
    }
    log::info!("transactions table ready");

    let port = env::var_os("PORT")
        .map(|val| {
            val.to_str()
                .expect("invalid port")
                .to_string()
                .parse::<u16>()
                .expect("invalid port")
        })
        .unwrap_or(5001);

    let keep_alive = match env::var("APP_ENV") {
        Ok(mode) if mode == "production" => {
            let url = env::var("API_URL").expect("API_URL must be set in production");
            log::info!(url = url.as_str(); "Starting keep-alive ping");
            Some(actix_web::rt::spawn(
                KeepAlive::new(url, KEEP_ALIVE_INTERVAL).run(),
            ))
        }
        _ => None,
    };

    let redis_url = env::var("REDIS_URL").expect("REDIS_URL must be set");
    let guard: Arc<dyn RateGuard> = Arc::new(
        RedisRateGuard::new(&redis_url, RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW)
            .expect("invalid REDIS_URL"),
    );
    let limit_key = env::var("RATE_LIMIT_KEY").unwrap_or_else(|_| "my-rate-limit".to_string());
    let repo: Arc<dyn TransactionRepository> = Arc::new(PgTransactionRepository::new(pool.clone()));

    log::info!(port = port; "Server is up and running");

    HttpServer::new(move || {
        App::new().configure(create_app(
            Arc::clone(&repo),
            Arc::clone(&guard),
            limit_key.clone(),
        ))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    // the ping has no reason to outlive the listener
    if let Some(handle) = keep_alive {
        handle.abort();
    }

    Ok(())
}
