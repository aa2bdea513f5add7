use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
}
