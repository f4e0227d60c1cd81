//! Transaction rows as read from the hosted store.
//!
//! Amounts are nullable and timestamps are read as text so that malformed
//! values reach the aggregator's safe-parse instead of failing the decode.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Projection used for the earnings total (`status = 'success'` only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionAmount {
    pub amount: Option<f64>,
}

/// Projection used for the monthly series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TimedAmount {
    pub amount: Option<f64>,
    pub created_at: Option<String>,
}

/// Full transaction row for the recent-activity list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub amount: Option<f64>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
