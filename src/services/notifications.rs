//! Notification sender: persist admin messages and list what was sent.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::notification::{Notification, SendNotification};
use crate::models::pagination::{PagedResult, Pagination};

pub async fn send(
    pool: &PgPool,
    input: &SendNotification,
    sent_by: &str,
) -> Result<Notification, AppError> {
    if let Some(recipient) = input.recipient_id {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
                .bind(recipient)
                .fetch_one(pool)
                .await?;
        if !exists {
            return Err(AppError::NotFound("Recipient not found".to_string()));
        }
    }

    let notification = sqlx::query_as::<_, Notification>(
        r#"
        INSERT INTO notifications (id, title, message, recipient_id, sent_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, message, recipient_id, sent_by, created_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&input.title)
    .bind(&input.message)
    .bind(input.recipient_id)
    .bind(sent_by)
    .fetch_one(pool)
    .await?;

    tracing::info!(
        notification_id = %notification.id,
        broadcast = notification.recipient_id.is_none(),
        "Notification sent"
    );

    Ok(notification)
}

pub async fn list(
    pool: &PgPool,
    pagination: &Pagination,
) -> Result<PagedResult<Notification>, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications")
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_as::<_, Notification>(
        "SELECT id, title, message, recipient_id, sent_by, created_at \
         FROM notifications ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok(PagedResult::new(items, total, pagination))
}
