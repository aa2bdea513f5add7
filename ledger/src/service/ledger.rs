use crate::domain::models::{NewTransaction, Summary, Transaction, TransactionDraft};
use crate::domain::repository::TransactionRepository;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid transaction ID")]
    InvalidId,
    #[error("Transaction not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub struct LedgerService {
    repo: Arc<dyn TransactionRepository>,
}

impl LedgerService {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> LedgerService {
        LedgerService { repo }
    }

    /// All transactions belonging to `user_id`, newest first. An unknown
    /// or empty user id is not an error, it just owns no rows.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    pub async fn create(&self, draft: TransactionDraft) -> Result<Transaction, LedgerError> {
        let user_id = present(draft.user_id).ok_or(LedgerError::MissingFields)?;
        let title = present(draft.title).ok_or(LedgerError::MissingFields)?;
        let category = present(draft.category).ok_or(LedgerError::MissingFields)?;
        // only absence is rejected, a zero amount passes
        let amount = draft.amount.ok_or(LedgerError::MissingFields)?;

        let record = NewTransaction {
            user_id,
            title,
            amount,
            category,
        };
        Ok(self.repo.insert(record).await?)
    }

    /// Removes the row and returns its pre-deletion image. A second call
    /// with the same id observes `NotFound`, so retries are safe.
    pub async fn delete(&self, raw_id: &str) -> Result<Transaction, LedgerError> {
        let id = raw_id.parse::<i32>().map_err(|_| LedgerError::InvalidId)?;
        self.repo
            .delete_by_id(id)
            .await?
            .ok_or(LedgerError::NotFound)
    }

    pub async fn summarize(&self, user_id: &str) -> Result<Summary, LedgerError> {
        Ok(self.repo.summarize(user_id).await?)
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
