use crate::domain::models::{NewTransaction, Summary, Transaction};
use crate::domain::repository::TransactionRepository;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres, Row};

#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: Pool<Postgres>,
}

impl PgTransactionRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgTransactionRepository { pool }
    }

    async fn sum_where(&self, user_id: &str, filter: &str) -> anyhow::Result<Decimal> {
        let query = format!(
            "SELECT COALESCE(SUM(amount), 0) AS total FROM transactions WHERE user_id = $1{}",
            filter
        );
        let row = sqlx::query(&query).bind(user_id).fetch_one(&self.pool).await?;
        Ok(row.try_get("total")?)
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Transaction>> {
        // id breaks ties between same-day rows so repeated reads agree
        let rows = sqlx::query(
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn insert(&self, record: NewTransaction) -> anyhow::Result<Transaction> {
        let row = sqlx::query(
            "INSERT INTO transactions(user_id, title, amount, category)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&record.user_id)
        .bind(&record.title)
        .bind(record.amount)
        .bind(&record.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<Option<Transaction>> {
        let row = sqlx::query("DELETE FROM transactions WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Transaction::from))
    }

    async fn summarize(&self, user_id: &str) -> anyhow::Result<Summary> {
        // three independent scans; a summary read racing a write may see a
        // torn view across the three numbers, which is accepted
        let balance = self.sum_where(user_id, "").await?;
        let income = self.sum_where(user_id, " AND amount > 0").await?;
        let expenses = self.sum_where(user_id, " AND amount < 0").await?;

        Ok(Summary {
            balance,
            income,
            expenses,
        })
    }
}
