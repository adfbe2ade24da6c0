//! Input validation for the public booking and newsletter forms
//!
//! Both the server and the client run these before a write. The first
//! failing rule wins; its message is shown to the guest verbatim.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

use crate::models::ReservationCreate;
use crate::util::{parse_time_slot, truncate_to_hour};

/// Largest party accepted by default
pub const MAX_PARTY_SIZE: i64 = 12;

/// Minimum length of a guest name (after trimming)
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\-+\s()]{7,20}$").expect("valid phone pattern"));

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::new("Email is required."));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("Invalid email format."));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::new("Name must be at least 2 characters."));
    }
    Ok(())
}

/// Phone is optional; an empty string counts as absent
pub fn validate_phone(phone: Option<&str>) -> ValidationResult<()> {
    match phone {
        None | Some("") => Ok(()),
        Some(p) if PHONE_RE.is_match(p) => Ok(()),
        Some(_) => Err(ValidationError::new("Invalid phone number.")),
    }
}

pub fn validate_party_size(party_size: Option<i64>, max: i64) -> ValidationResult<i32> {
    let n = party_size.ok_or_else(|| ValidationError::new("Party size must be a number."))?;
    if n < 1 || n > max {
        return Err(ValidationError::new(format!(
            "Party size must be between 1 and {max}."
        )));
    }
    Ok(n as i32)
}

/// Parse the slot and require it to lie after `now`
pub fn validate_time_slot(value: &str, now: NaiveDateTime) -> ValidationResult<NaiveDateTime> {
    let parsed = parse_time_slot(value).ok_or_else(|| {
        ValidationError::new("Time slot must be ISO datetime (YYYY-MM-DDTHH:MM).")
    })?;
    if parsed < now {
        return Err(ValidationError::new("Time slot must be in the future."));
    }
    Ok(parsed)
}

/// A booking request that passed every rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReservation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Normalised to the top of the hour
    pub time_slot: NaiveDateTime,
    pub party_size: i32,
}

/// Validate a booking request in form order: name, email, phone, party size, time slot
pub fn validate_reservation(
    req: &ReservationCreate,
    max_party_size: i64,
    now: NaiveDateTime,
) -> ValidationResult<ValidReservation> {
    let name = req.name.trim();
    let email = req.email.trim();
    let phone = req
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    validate_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    let party_size = validate_party_size(req.party_size, max_party_size)?;
    let slot = validate_time_slot(&req.time_slot, now)?;

    Ok(ValidReservation {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        time_slot: truncate_to_hour(slot),
        party_size,
    })
}
