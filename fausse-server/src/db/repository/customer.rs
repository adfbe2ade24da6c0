//! Customer Repository

use shared::models::Customer;
use sqlx::{SqliteExecutor, SqlitePool};

use super::{RepoError, RepoResult};

const CUSTOMER_SELECT: &str = "SELECT id, name, email, phone, newsletter FROM customers";

pub async fn find_by_email<'e>(
    exec: impl SqliteExecutor<'e>,
    email: &str,
) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE email = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(email)
        .fetch_optional(exec)
        .await?;
    Ok(row)
}

pub async fn find_by_id<'e>(exec: impl SqliteExecutor<'e>, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(exec)
        .await?;
    Ok(row)
}

pub async fn create<'e>(
    exec: impl SqliteExecutor<'e>,
    name: &str,
    email: &str,
    phone: Option<&str>,
    newsletter: bool,
) -> RepoResult<Customer> {
    let row = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (name, email, phone, newsletter) VALUES (?1, ?2, ?3, ?4) \
         RETURNING id, name, email, phone, newsletter",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(newsletter)
    .fetch_one(exec)
    .await?;
    Ok(row)
}

/// Subscribe an email to the newsletter, creating the customer when unknown
///
/// A new customer without a name is stored as `Guest`; an existing one keeps
/// its name unless a new one is given.
pub async fn subscribe(pool: &SqlitePool, email: &str, name: Option<&str>) -> RepoResult<Customer> {
    let mut tx = pool.begin().await?;

    let customer = match find_by_email(&mut *tx, email).await? {
        None => create(&mut *tx, name.unwrap_or("Guest"), email, None, true).await?,
        Some(existing) => {
            sqlx::query(
                "UPDATE customers SET newsletter = 1, name = COALESCE(?1, name) WHERE id = ?2",
            )
            .bind(name)
            .bind(existing.id)
            .execute(&mut *tx)
            .await?;
            find_by_id(&mut *tx, existing.id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", existing.id)))?
        }
    };

    tx.commit().await?;
    Ok(customer)
}

pub async fn list_subscribers(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE newsletter = 1 ORDER BY id");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn delete_all<'e>(exec: impl SqliteExecutor<'e>) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM customers").execute(exec).await?;
    Ok(result.rows_affected())
}
