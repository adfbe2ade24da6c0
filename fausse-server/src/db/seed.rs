//! 演示数据
//!
//! 清空现有数据后写入六位演示顾客，以及今天三个时段的预订：
//!
//! | 时段 | 预订 |
//! |------|------|
//! | 19:00 | 满座 (全部桌号) |
//! | 20:00 | 桌 1-3 |
//! | 21:00 | 随机 5 张桌 |

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;
use rand::seq::IteratorRandom;
use shared::models::Customer;
use shared::util::format_time_slot;
use sqlx::SqlitePool;

use super::repository::{RepoError, RepoResult, customer, reservation, waitlist};

const DEMO_CUSTOMERS: [(&str, &str, &str, bool); 6] = [
    ("Alice Johnson", "alice@example.com", "111-111-1111", true),
    ("Bob Smith", "bob@example.com", "222-222-2222", false),
    ("Charlie Brown", "charlie@example.com", "333-333-3333", true),
    ("Diana Prince", "diana@example.com", "444-444-4444", false),
    ("Ethan Hunt", "ethan@example.com", "555-555-5555", true),
    ("Fiona Apple", "fiona@example.com", "666-666-6666", false),
];

/// Summary of what [`seed`] wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: usize,
    pub reservations: usize,
}

/// One demo booking: slot offset from 19:00 in hours, table, index into the customer list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlannedBooking {
    hour_offset: i64,
    table: i32,
    guest: usize,
    party_size: i32,
}

/// Tables per demo hour, with random guests and party sizes
fn plan_bookings(max_tables: u32, guests: usize) -> Vec<PlannedBooking> {
    let mut rng = rand::thread_rng();
    let max_tables = max_tables.max(1) as i32;

    let mut late = (1..=max_tables).choose_multiple(&mut rng, 5.min(max_tables as usize));
    late.sort_unstable();

    let hours: [(i64, Vec<i32>); 3] = [
        (0, (1..=max_tables).collect()),
        (1, (1..=max_tables.min(3)).collect()),
        (2, late),
    ];

    hours
        .into_iter()
        .flat_map(|(hour_offset, tables)| tables.into_iter().map(move |t| (hour_offset, t)))
        .map(|(hour_offset, table)| PlannedBooking {
            hour_offset,
            table,
            guest: rng.gen_range(0..guests.max(1)),
            party_size: rng.gen_range(1..=6),
        })
        .collect()
}

/// Replace all data with the demo set for `day`
pub async fn seed(pool: &SqlitePool, day: NaiveDate, max_tables: u32) -> RepoResult<SeedReport> {
    let plan = plan_bookings(max_tables, DEMO_CUSTOMERS.len());
    let mut tx = pool.begin().await?;

    waitlist::delete_all(&mut *tx).await?;
    reservation::delete_all(&mut *tx).await?;
    customer::delete_all(&mut *tx).await?;

    let mut customers: Vec<Customer> = Vec::with_capacity(DEMO_CUSTOMERS.len());
    for (name, email, phone, newsletter) in DEMO_CUSTOMERS {
        customers.push(customer::create(&mut *tx, name, email, Some(phone), newsletter).await?);
    }

    let base = day.and_time(NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default());
    for booking in &plan {
        let guest = customers
            .get(booking.guest)
            .ok_or_else(|| RepoError::Database("No demo customers".into()))?;
        let slot = format_time_slot(base + TimeDelta::hours(booking.hour_offset));
        reservation::insert(&mut *tx, guest.id, &slot, booking.table, booking.party_size).await?;
    }

    tx.commit().await?;

    tracing::info!(
        customers = customers.len(),
        reservations = plan.len(),
        day = %day,
        "Database seeded with demo customers and reservations"
    );

    Ok(SeedReport {
        customers: customers.len(),
        reservations: plan.len(),
    })
}
