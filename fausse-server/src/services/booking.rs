//! 预订服务
//!
//! 每个小时时段有固定桌数 (1..=N)。时段已满时登记候补，
//! 否则在空闲桌中随机分配一张。整个流程在同一 IMMEDIATE 事务内完成，
//! 并发预订在写锁上排队。

use rand::seq::SliceRandom;
use shared::models::ReservationRecord;
use shared::util::{DATE_FORMAT, format_time_slot};
use shared::validation::ValidReservation;
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, RepoResult, customer, reservation, waitlist};

/// Result of a booking attempt
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Table assigned
    Confirmed(ReservationRecord),
    /// Hour fully booked, guest put on the waitlist
    Waitlisted { waitlist_id: i64 },
    /// Hour not full but no table in 1..=N is free
    NoTableAvailable,
}

/// Tables in `1..=max_tables` not present in `occupied`
pub fn free_tables(max_tables: u32, occupied: &[i32]) -> Vec<i32> {
    (1..=max_tables as i32)
        .filter(|t| !occupied.contains(t))
        .collect()
}

/// Book a validated request
pub async fn book_reservation(
    pool: &SqlitePool,
    req: &ValidReservation,
    max_tables: u32,
) -> RepoResult<BookingOutcome> {
    let slot = format_time_slot(req.time_slot);
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let customer = match customer::find_by_email(&mut *tx, &req.email).await? {
        Some(c) => c,
        None => customer::create(&mut *tx, &req.name, &req.email, req.phone.as_deref(), false).await?,
    };

    let occupied = reservation::occupied_tables(&mut *tx, &slot).await?;
    if occupied.len() >= max_tables as usize {
        let waitlist_id = waitlist::insert(&mut *tx, customer.id, &slot).await?;
        tx.commit().await?;
        tracing::info!(
            slot = %slot,
            customer_id = customer.id,
            waitlist_id,
            "Hour fully booked, added to waitlist"
        );
        return Ok(BookingOutcome::Waitlisted { waitlist_id });
    }

    let table = free_tables(max_tables, &occupied)
        .choose(&mut rand::thread_rng())
        .copied();
    let Some(table) = table else {
        tx.rollback().await?;
        return Ok(BookingOutcome::NoTableAvailable);
    };

    // (time_slot, table_number) 唯一索引兜底
    let id = match reservation::insert(&mut *tx, customer.id, &slot, table, req.party_size).await {
        Ok(id) => id,
        Err(RepoError::Duplicate(msg)) => {
            tracing::warn!(slot = %slot, table, error = %msg, "Table taken concurrently");
            tx.rollback().await?;
            return Ok(BookingOutcome::NoTableAvailable);
        }
        Err(e) => return Err(e),
    };
    let row = reservation::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Reservation {id} vanished after insert")))?;
    tx.commit().await?;

    tracing::info!(
        reservation_id = id,
        slot = %slot,
        day = %req.time_slot.format(DATE_FORMAT),
        table,
        party_size = req.party_size,
        "Reservation confirmed"
    );

    Ok(BookingOutcome::Confirmed(row.into()))
}
