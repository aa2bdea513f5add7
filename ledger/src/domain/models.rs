use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// A single ledger entry. The sign of `amount` carries the meaning:
/// positive is income, negative is expense. The sign is set by the
/// client before submission and never changed on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub created_at: NaiveDate,
}

impl From<PgRow> for Transaction {
    fn from(row: PgRow) -> Self {
        Transaction {
            id: row.get("id"),
            user_id: row.get("user_id"),
            title: row.get("title"),
            amount: row.get("amount"),
            category: row.get("category"),
            created_at: row.get("created_at"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Create request as it comes off the wire. Every field is optional so
/// that an absent field is distinguishable from a present-but-zero
/// amount: `amount: 0` is a valid entry, a missing amount is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
}

/// A draft that passed validation, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}
