//! Workbench data loading: four concurrent reads against the store, then the
//! pure aggregation in [`crate::services::metrics`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::dashboard::DashboardView;
use crate::models::profile::ProfileSummary;
use crate::models::transaction::{TimedAmount, Transaction, TransactionAmount};
use crate::services::metrics::{aggregate, MetricsInput};

/// How many profiles feed the recent-users strip.
pub const PROFILE_SAMPLE_LIMIT: i64 = 5;

/// How many transactions feed the recent-activity list.
pub const RECENT_TRANSACTION_LIMIT: i64 = 10;

/// Status value that marks a transaction as counted towards earnings.
pub const SUCCESS_STATUS: &str = "success";

/// Read side of the store the workbench depends on.
pub trait MetricsSource {
    fn successful_amounts(
        &self,
    ) -> impl Future<Output = Result<Vec<TransactionAmount>, AppError>> + Send;

    fn timed_amounts(&self) -> impl Future<Output = Result<Vec<TimedAmount>, AppError>> + Send;

    fn profile_sample(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<ProfileSummary>, AppError>> + Send;

    /// Newest first by `created_at`.
    fn recent_transactions(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Transaction>, AppError>> + Send;
}

/// Postgres-backed source. Timestamps are cast to text and amounts to float8.
#[derive(Debug, Clone)]
pub struct PgMetricsSource {
    pool: PgPool,
}

impl PgMetricsSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MetricsSource for PgMetricsSource {
    async fn successful_amounts(&self) -> Result<Vec<TransactionAmount>, AppError> {
        let rows = sqlx::query_as::<_, TransactionAmount>(
            "SELECT amount::float8 AS amount FROM transactions WHERE status = $1",
        )
        .bind(SUCCESS_STATUS)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn timed_amounts(&self) -> Result<Vec<TimedAmount>, AppError> {
        let rows = sqlx::query_as::<_, TimedAmount>(
            "SELECT amount::float8 AS amount, created_at::text AS created_at FROM transactions",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn profile_sample(&self, limit: i64) -> Result<Vec<ProfileSummary>, AppError> {
        let rows = sqlx::query_as::<_, ProfileSummary>(
            "SELECT avatar_url, display_name FROM profiles ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn recent_transactions(&self, limit: i64) -> Result<Vec<Transaction>, AppError> {
        // Qualified ORDER BY so sorting uses the timestamp column, not the text alias.
        // Postgres puts NULL timestamps first under DESC, as the hosted store does.
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT
                id::text AS id,
                amount::float8 AS amount,
                created_at::text AS created_at,
                description,
                status
            FROM transactions
            ORDER BY transactions.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Fetch every slice concurrently and reduce them into the workbench view.
///
/// A failed read contributes an empty slice; the others are still used.
pub async fn load<S: MetricsSource + Sync>(source: &S, as_of: DateTime<Utc>) -> DashboardView {
    let (earnings, monthly, profiles, recent) = tokio::join!(
        source.successful_amounts(),
        source.timed_amounts(),
        source.profile_sample(PROFILE_SAMPLE_LIMIT),
        source.recent_transactions(RECENT_TRANSACTION_LIMIT),
    );

    let input = MetricsInput {
        successful_amounts: or_empty("successful_amounts", earnings),
        all_transactions: or_empty("timed_amounts", monthly),
        profiles: or_empty("profile_sample", profiles),
        recent_transactions: or_empty("recent_transactions", recent),
    };

    aggregate(&input, as_of)
}

fn or_empty<T>(slice: &'static str, result: Result<Vec<T>, AppError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(slice, error = %e, "Dashboard fetch failed, using empty slice");
        Vec::new()
    })
}
