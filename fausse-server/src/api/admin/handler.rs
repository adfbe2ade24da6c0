//! Admin API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::response::{ReservationListResponse, SubscriberListResponse, WaitlistResponse};

use crate::core::ServerState;
use crate::db::repository::{customer, waitlist};
use crate::services::{ListingQuery, ReservationListParams};
use crate::utils::AppResult;

/// GET /api/admin/reservations - 预订列表 (过滤 / 排序 / 分页)
pub async fn list_reservations(
    State(state): State<ServerState>,
    Query(params): Query<ReservationListParams>,
) -> AppResult<Json<ReservationListResponse>> {
    let query = ListingQuery::from_params(&params)?;
    let body = query.execute(state.pool()).await?;

    tracing::debug!(
        page = query.page,
        per_page = query.per_page,
        total = body.total,
        returned = body.reservations.len(),
        "Reservation listing served"
    );

    Ok(Json(body))
}

/// GET /api/admin/newsletter - 订阅者列表
pub async fn list_subscribers(
    State(state): State<ServerState>,
) -> AppResult<Json<SubscriberListResponse>> {
    let subscribers = customer::list_subscribers(state.pool()).await?;
    Ok(Json(SubscriberListResponse {
        success: true,
        subscribers,
        error: None,
    }))
}

/// GET /api/admin/waitlist - 候补列表
pub async fn list_waitlist(State(state): State<ServerState>) -> AppResult<Json<WaitlistResponse>> {
    let entries = waitlist::list(state.pool()).await?;
    Ok(Json(WaitlistResponse {
        success: true,
        waitlist: entries,
        error: None,
    }))
}
