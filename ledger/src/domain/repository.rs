use crate::domain::models::{NewTransaction, Summary, Transaction};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Transaction>>;
    async fn insert(&self, record: NewTransaction) -> anyhow::Result<Transaction>;
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<Option<Transaction>>;
    async fn summarize(&self, user_id: &str) -> anyhow::Result<Summary>;
}
