//! Reservation Repository
//!
//! 管理端列表查询使用 `QueryBuilder` 动态拼接过滤条件，所有用户输入均为绑定参数。

use chrono::NaiveDate;
use shared::models::{CustomerRef, ReservationRecord};
use shared::request::{SortBy, SortOrder};
use shared::util::DATE_FORMAT;
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor, SqlitePool};

use super::{RepoResult, escape_like};

const RESERVATION_SELECT: &str = "SELECT r.id, r.time_slot, r.table_number, r.party_size, \
     c.id AS customer_id, c.name AS customer_name, c.email AS customer_email \
     FROM reservations r LEFT JOIN customers c ON c.id = r.customer_id";

const RESERVATION_COUNT: &str =
    "SELECT COUNT(*) FROM reservations r LEFT JOIN customers c ON c.id = r.customer_id";

/// Reservation joined with its customer
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReservationRow {
    pub id: i64,
    pub time_slot: String,
    pub table_number: i32,
    pub party_size: i32,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

impl From<ReservationRow> for ReservationRecord {
    fn from(row: ReservationRow) -> Self {
        let customer = row.customer_id.map(|id| CustomerRef {
            id: Some(id),
            name: row.customer_name,
            email: row.customer_email,
        });
        Self {
            id: row.id,
            time_slot: row.time_slot,
            table_number: row.table_number,
            party_size: row.party_size,
            customer,
        }
    }
}

/// Admin listing filters (all optional, combined with AND)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilter {
    /// Calendar date of the time slot
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring of the customer name
    pub customer: Option<String>,
    /// Exact table number
    pub table: Option<i32>,
}

/// Ordering and window of one listing page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub limit: u32,
    pub offset: u64,
}

fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ReservationFilter) {
    qb.push(" WHERE 1 = 1");
    if let Some(date) = filter.date {
        qb.push(" AND date(r.time_slot) = ")
            .push_bind(date.format(DATE_FORMAT).to_string());
    }
    if let Some(name) = &filter.customer {
        qb.push(" AND c.name LIKE ")
            .push_bind(format!("%{}%", escape_like(name)))
            .push(" ESCAPE '\\'");
    }
    if let Some(table) = filter.table {
        qb.push(" AND r.table_number = ").push_bind(table);
    }
}

/// One page of matching reservations
pub async fn list(
    pool: &SqlitePool,
    filter: &ReservationFilter,
    page: PageRequest,
) -> RepoResult<Vec<ReservationRow>> {
    let column = match page.sort_by {
        SortBy::Time => "r.time_slot",
        SortBy::Table => "r.table_number",
    };
    let direction = if page.sort_order.is_descending() {
        "DESC"
    } else {
        "ASC"
    };

    let mut qb = QueryBuilder::<Sqlite>::new(RESERVATION_SELECT);
    push_filters(&mut qb, filter);
    // id 作为次级排序，保证翻页稳定
    qb.push(format!(" ORDER BY {column} {direction}, r.id {direction}"));
    qb.push(" LIMIT ")
        .push_bind(i64::from(page.limit))
        .push(" OFFSET ")
        .push_bind(i64::try_from(page.offset).unwrap_or(i64::MAX));

    let rows = qb
        .build_query_as::<ReservationRow>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Number of reservations matching the filter, independent of paging
pub async fn count(pool: &SqlitePool, filter: &ReservationFilter) -> RepoResult<u64> {
    let mut qb = QueryBuilder::<Sqlite>::new(RESERVATION_COUNT);
    push_filters(&mut qb, filter);
    let total: i64 = qb.build_query_scalar::<i64>().fetch_one(pool).await?;
    Ok(total.max(0) as u64)
}

pub async fn find_by_id<'e>(
    exec: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<ReservationRow>> {
    let sql = format!("{RESERVATION_SELECT} WHERE r.id = ?");
    let row = sqlx::query_as::<_, ReservationRow>(&sql)
        .bind(id)
        .fetch_optional(exec)
        .await?;
    Ok(row)
}

/// Table numbers already taken in a slot
pub async fn occupied_tables<'e>(exec: impl SqliteExecutor<'e>, slot: &str) -> RepoResult<Vec<i32>> {
    let rows = sqlx::query_scalar::<_, i32>(
        "SELECT table_number FROM reservations WHERE time_slot = ? ORDER BY table_number",
    )
    .bind(slot)
    .fetch_all(exec)
    .await?;
    Ok(rows)
}

pub async fn insert<'e>(
    exec: impl SqliteExecutor<'e>,
    customer_id: i64,
    slot: &str,
    table_number: i32,
    party_size: i32,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservations (customer_id, time_slot, table_number, party_size) \
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(customer_id)
    .bind(slot)
    .bind(table_number)
    .bind(party_size)
    .fetch_one(exec)
    .await?;
    Ok(id)
}

pub async fn delete_all<'e>(exec: impl SqliteExecutor<'e>) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM reservations").execute(exec).await?;
    Ok(result.rows_affected())
}
