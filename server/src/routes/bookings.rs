//! Booking REST routes.
//!
//! Thin translation layer: parse and validate the body, call the booking
//! service, map service errors onto HTTP statuses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::booking::{self, Booking, BookingError, BookingUpdate, NewBooking, ValidationError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingResponse {
    pub name: String,
    pub phone_number: String,
    pub party_size: i32,
    pub starts_at: String,
    pub special_request: Option<String>,
}

fn to_response(b: Booking) -> BookingResponse {
    BookingResponse {
        name: b.name,
        phone_number: b.phone_number,
        party_size: b.party_size,
        starts_at: b.starts_at,
        special_request: b.special_request,
    }
}

#[derive(Deserialize)]
pub struct CreateBookingBody {
    pub name: String,
    pub phone_number: String,
    pub party_size: i32,
    pub starts_at: String,
    pub special_request: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct UpdateBookingBody {
    pub phone_number: Option<String>,
    pub party_size: Option<i32>,
    pub starts_at: Option<String>,
    pub special_request: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ListBookingsParams {
    pub date: Option<String>,
}

/// `GET /api/bookings` — list bookings, optionally filtered by
/// `?date=YYYY-MM-DD`.
pub async fn list_bookings_rest(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> Result<Json<Vec<BookingResponse>>, StatusCode> {
    let rows = match params.date.as_deref() {
        Some(raw) => {
            let date = booking::validate_date(raw).map_err(|_| StatusCode::BAD_REQUEST)?;
            booking::bookings_on_date(&state.pool, &date).await
        }
        None => booking::list_bookings(&state.pool).await,
    }
    .map_err(booking_error_to_status)?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/bookings` — create a booking.
pub async fn create_booking_rest(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<BookingResponse>), StatusCode> {
    let new = parse_create_body(body, booking::local_now()).map_err(|_| StatusCode::BAD_REQUEST)?;

    let created = booking::create_booking(&state.pool, &new)
        .await
        .map_err(booking_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_response(created))))
}

/// `GET /api/bookings/:name` — fetch one booking.
pub async fn get_booking_rest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BookingResponse>, StatusCode> {
    let found = booking::get_booking(&state.pool, &name)
        .await
        .map_err(booking_error_to_status)?;

    found
        .map(|b| Json(to_response(b)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// `PATCH /api/bookings/:name` — partial update.
pub async fn update_booking_rest(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateBookingBody>,
) -> Result<Json<BookingResponse>, StatusCode> {
    let update = parse_update_body(body, booking::local_now()).map_err(|_| StatusCode::BAD_REQUEST)?;

    let updated = booking::update_booking(&state.pool, &name, &update)
        .await
        .map_err(booking_error_to_status)?;

    Ok(Json(to_response(updated)))
}

/// `DELETE /api/bookings/:name` — cancel a booking.
pub async fn cancel_booking_rest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let cancelled = booking::cancel_booking(&state.pool, &name)
        .await
        .map_err(booking_error_to_status)?;

    if !cancelled {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// HELPERS
// =============================================================================

pub(crate) fn parse_create_body(
    body: CreateBookingBody,
    now: chrono::NaiveDateTime,
) -> Result<NewBooking, ValidationError> {
    let name = body.name.trim().to_owned();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    Ok(NewBooking {
        name,
        phone_number: booking::validate_phone(&body.phone_number)?,
        party_size: booking::validate_party_count(body.party_size)?,
        starts_at: booking::validate_starts_at(&body.starts_at, now)?,
        special_request: body
            .special_request
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty()),
    })
}

pub(crate) fn parse_update_body(
    body: UpdateBookingBody,
    now: chrono::NaiveDateTime,
) -> Result<BookingUpdate, ValidationError> {
    let mut update = BookingUpdate::default();
    if let Some(raw) = body.phone_number {
        update.phone_number = Some(booking::validate_phone(&raw)?);
    }
    if let Some(size) = body.party_size {
        update.party_size = Some(booking::validate_party_count(size)?);
    }
    if let Some(raw) = body.starts_at {
        update.starts_at = Some(booking::validate_starts_at(&raw, now)?);
    }
    if let Some(raw) = body.special_request {
        update.special_request = Some(raw);
    }
    Ok(update)
}

pub(crate) fn booking_error_to_status(err: BookingError) -> StatusCode {
    match err {
        BookingError::Duplicate(_) => StatusCode::CONFLICT,
        BookingError::NotFound(_) => StatusCode::NOT_FOUND,
        BookingError::Validation(_) => StatusCode::BAD_REQUEST,
        BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
