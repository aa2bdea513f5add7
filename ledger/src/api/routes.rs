use crate::api::error::ApiError;
use crate::domain::models::{Transaction, TransactionDraft};
use crate::service::ledger::LedgerService;
use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub transaction: Transaction,
}

#[get("/api/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[get("/{user_id}")]
pub async fn get_transactions(
    service: web::Data<LedgerService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let transactions = service.list_by_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[post("")]
pub async fn create_transaction(
    req_body: String,
    service: web::Data<LedgerService>,
) -> Result<HttpResponse, ApiError> {
    let draft = serde_json::from_str::<TransactionDraft>(&req_body)
        .map_err(|err| ApiError::Validation(format!("invalid request body: {}", err)))?;

    let transaction = service.create(draft).await?;
    log::info!(id = transaction.id, user_id = transaction.user_id.as_str(); "Transaction created");

    Ok(HttpResponse::Created().json(transaction))
}

#[delete("/{id}")]
pub async fn delete_transaction(
    service: web::Data<LedgerService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let transaction = service.delete(&id).await?;
    log::info!(id = transaction.id; "Transaction deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: "Transaction deleted successfully".to_string(),
        transaction,
    }))
}

#[get("/summary/{user_id}")]
pub async fn get_summary(
    service: web::Data<LedgerService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let summary = service.summarize(&user_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}
