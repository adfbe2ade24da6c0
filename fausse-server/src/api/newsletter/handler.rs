//! Newsletter API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::NewsletterSignup;
use shared::response::NewsletterSignupResponse;
use shared::validation::validate_email;

use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::AppResult;

/// POST /api/newsletter - 订阅通讯 (按 email 插入或更新)
pub async fn signup(
    State(state): State<ServerState>,
    payload: Result<Json<NewsletterSignup>, JsonRejection>,
) -> AppResult<(StatusCode, Json<NewsletterSignupResponse>)> {
    let Json(payload) = payload?;
    let email = payload.email.trim();
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    validate_email(email)?;

    let customer = customer::subscribe(state.pool(), email, name).await?;
    tracing::info!(customer_id = customer.id, "Newsletter signup");

    Ok((
        StatusCode::CREATED,
        Json(NewsletterSignupResponse {
            success: true,
            message: Some("Signed up for newsletter.".to_string()),
            customer: Some(customer),
            error: None,
        }),
    ))
}
