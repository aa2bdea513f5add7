use crate::api::{ApiError, CreateTransaction, LedgerApi};
use crate::models::{Summary, Transaction};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Expense,
    Income,
}

/// What the create screen collects before submission. The amount is the
/// raw text field value; the kind toggle decides the sign.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub kind: EntryKind,
}

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Please enter a transaction title")]
    EmptyTitle,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a category")]
    MissingCategory,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client-side state for one user's ledger, refreshed from the backend
/// after every successful mutation. A failed fetch leaves whatever was
/// loaded before untouched.
pub struct TransactionsHook {
    api: LedgerApi,
    user_id: String,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub is_loading: bool,
}

impl TransactionsHook {
    pub fn new(api: LedgerApi, user_id: impl Into<String>) -> TransactionsHook {
        TransactionsHook {
            api,
            user_id: user_id.into(),
            transactions: Vec::new(),
            summary: Summary::default(),
            is_loading: true,
        }
    }

    pub async fn load_data(&mut self) {
        if self.user_id.is_empty() {
            return;
        }

        self.is_loading = true;
        let (transactions, summary) = tokio::join!(
            self.api.fetch_transactions(&self.user_id),
            self.api.fetch_summary(&self.user_id),
        );

        match transactions {
            Ok(transactions) => self.transactions = transactions,
            Err(err) => log::error!(err:? = err; "Error fetching transactions"),
        }
        match summary {
            Ok(summary) => self.summary = summary,
            Err(err) => log::error!(err:? = err; "Error fetching summary"),
        }
        self.is_loading = false;
    }

    pub async fn create(&mut self, entry: NewEntry) -> Result<Transaction, HookError> {
        if entry.title.trim().is_empty() {
            return Err(HookError::EmptyTitle);
        }
        let amount = entry
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| HookError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(HookError::InvalidAmount);
        }
        if entry.category.is_empty() {
            return Err(HookError::MissingCategory);
        }

        // expenses go over the wire negative; the backend stores the sign as-is
        let signed = match entry.kind {
            EntryKind::Expense => -amount.abs(),
            EntryKind::Income => amount.abs(),
        };

        let created = self
            .api
            .create_transaction(&CreateTransaction {
                user_id: self.user_id.clone(),
                title: entry.title,
                amount: signed,
                category: entry.category,
            })
            .await?;

        self.load_data().await;
        Ok(created)
    }

    pub async fn delete_transaction(&mut self, id: i32) -> Result<(), HookError> {
        self.api.delete_transaction(id).await?;
        self.load_data().await;
        Ok(())
    }
}
