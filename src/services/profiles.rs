//! Profile listing for the admin user table.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::profile::{Profile, ProfileFilters};

/// Page through profiles, most recently updated first, optionally narrowed by
/// a name/email search.
pub async fn list(
    pool: &PgPool,
    filters: &ProfileFilters,
    pagination: &Pagination,
) -> Result<PagedResult<Profile>, AppError> {
    let pattern = filters.pattern();

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM profiles \
         WHERE ($1::text IS NULL OR display_name ILIKE $1 OR email ILIKE $1)",
    )
    .bind(pattern.as_deref())
    .fetch_one(pool)
    .await?;

    let items = sqlx::query_as::<_, Profile>(
        "SELECT id, display_name, email, avatar_url, created_at, updated_at \
         FROM profiles \
         WHERE ($1::text IS NULL OR display_name ILIKE $1 OR email ILIKE $1) \
         ORDER BY updated_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(pattern.as_deref())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok(PagedResult::new(items, total, pagination))
}
