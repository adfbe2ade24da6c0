//! Waitlist Repository

use shared::models::{CustomerRef, WaitlistEntry};
use sqlx::{SqliteExecutor, SqlitePool};

use super::RepoResult;

#[derive(Debug, Clone, sqlx::FromRow)]
struct WaitlistRow {
    id: i64,
    time_slot: String,
    customer_id: Option<i64>,
    customer_name: Option<String>,
    customer_email: Option<String>,
}

impl From<WaitlistRow> for WaitlistEntry {
    fn from(row: WaitlistRow) -> Self {
        Self {
            id: row.id,
            time_slot: row.time_slot,
            customer: row.customer_id.map(|id| CustomerRef {
                id: Some(id),
                name: row.customer_name,
                email: row.customer_email,
            }),
        }
    }
}

pub async fn insert<'e>(exec: impl SqliteExecutor<'e>, customer_id: i64, slot: &str) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO waitlist (customer_id, time_slot) VALUES (?1, ?2) RETURNING id",
    )
    .bind(customer_id)
    .bind(slot)
    .fetch_one(exec)
    .await?;
    Ok(id)
}

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<WaitlistEntry>> {
    let rows = sqlx::query_as::<_, WaitlistRow>(
        "SELECT w.id, w.time_slot, c.id AS customer_id, c.name AS customer_name, \
         c.email AS customer_email \
         FROM waitlist w LEFT JOIN customers c ON c.id = w.customer_id \
         ORDER BY w.time_slot, w.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn delete_all<'e>(exec: impl SqliteExecutor<'e>) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM waitlist").execute(exec).await?;
    Ok(result.rows_affected())
}
