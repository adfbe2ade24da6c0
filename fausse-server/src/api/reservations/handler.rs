//! Reservation API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::ReservationCreate;
use shared::response::ReservationCreatedResponse;
use shared::validation::validate_reservation;

use crate::core::ServerState;
use crate::services::{BookingOutcome, ConfirmationNotice, book_reservation};
use crate::utils::{AppError, AppResult};

const FULLY_BOOKED: &str = "This hour is fully booked. You’ve been added to the waitlist.";

/// POST /api/reservations - 提交预订
///
/// - 201: 分配桌号成功
/// - 202: 时段已满，已加入候补
/// - 400: 表单验证失败
/// - 409: 无空闲桌
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReservationCreatedResponse>)> {
    let Json(payload) = payload?;
    let now = chrono::Local::now().naive_local();
    let valid = validate_reservation(&payload, state.config.max_party_size, now)?;

    let outcome = book_reservation(state.pool(), &valid, state.config.max_tables_per_hour).await?;

    match outcome {
        BookingOutcome::Confirmed(record) => {
            let notice = ConfirmationNotice::reservation_confirmed(
                &valid.name,
                &valid.email,
                &valid.time_slot.format("%Y-%m-%d %H:%M").to_string(),
                record.table_number,
            );
            state.notifier.send(notice).await;

            Ok((
                StatusCode::CREATED,
                Json(ReservationCreatedResponse {
                    success: true,
                    message: Some("Reservation confirmed".to_string()),
                    reservation: Some(record),
                    waitlist: false,
                    error: None,
                }),
            ))
        }
        BookingOutcome::Waitlisted { .. } => Ok((
            StatusCode::ACCEPTED,
            Json(ReservationCreatedResponse {
                success: false,
                message: None,
                reservation: None,
                waitlist: true,
                error: Some(FULLY_BOOKED.to_string()),
            }),
        )),
        BookingOutcome::NoTableAvailable => Err(AppError::conflict("No tables available.")),
    }
}
