use crate::models::{Summary, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;

/// Any non-success status is the same failure to the caller; the UI only
/// ever shows a generic alert, never the status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTransaction {
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}

/// Thin REST client for the ledger backend. `base_url` is the deployed
/// API root including the `/api` prefix, e.g. `https://host/api`.
pub struct LedgerApi {
    base_url: String,
    client: reqwest::Client,
}

impl LedgerApi {
    pub fn new(base_url: impl Into<String>) -> LedgerApi {
        LedgerApi {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, ApiError> {
        let resp = self
            .client
            .get(format!("{}/transactions/{}", self.base_url, user_id))
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    pub async fn fetch_summary(&self, user_id: &str) -> Result<Summary, ApiError> {
        let resp = self
            .client
            .get(format!("{}/transactions/summary/{}", self.base_url, user_id))
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    pub async fn create_transaction(
        &self,
        transaction: &CreateTransaction,
    ) -> Result<Transaction, ApiError> {
        let resp = self
            .client
            .post(format!("{}/transactions", self.base_url))
            .json(transaction)
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    pub async fn delete_transaction(&self, id: i32) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(format!("{}/transactions/{}", self.base_url, id))
            .send()
            .await?;
        check(resp)?;
        Ok(())
    }
}

fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status().as_u16()))
    }
}
