//! Booking store — validated CRUD over the `bookings` table.
//!
//! DESIGN
//! ======
//! Bookings are keyed by customer name: the assistant identifies a
//! reservation by asking the caller for their name, so a duplicate name is
//! a conflict rather than a second row. Reservation times are stored in
//! the wire format the assistant speaks (`YYYY-MM-DD HH:MM`); date queries
//! match on the ten-character date prefix.
//!
//! Validation lives here so the REST handlers and the assistant tool
//! dispatcher enforce identical rules.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{PgPool, QueryBuilder};
use tracing::info;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("booking already exists: {0}")]
    Duplicate(String),
    #[error("booking not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Rejected booking input. Variants map 1:1 onto the sentences the
/// assistant speaks back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("customer name is required")]
    MissingName,
    #[error("date-time must use the YYYY-MM-DD HH:MM format")]
    InvalidDateTime,
    #[error("booking time is in the past")]
    PastDateTime,
    #[error("phone number must contain only digits, spaces, '+' or '-'")]
    InvalidPhone,
    #[error("party size must be a whole number of at least 1")]
    InvalidPartySize,
    #[error("date must use the YYYY-MM-DD format")]
    InvalidDate,
    #[error("no fields to update")]
    NoFieldsToUpdate,
}

/// A confirmed reservation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub name: String,
    pub phone_number: String,
    pub party_size: i32,
    pub starts_at: String,
    pub special_request: Option<String>,
}

/// Validated input for creating a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone_number: String,
    pub party_size: i32,
    pub starts_at: String,
    pub special_request: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingUpdate {
    pub phone_number: Option<String>,
    pub party_size: Option<i32>,
    pub starts_at: Option<String>,
    pub special_request: Option<String>,
}

impl BookingUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_none()
            && self.party_size.is_none()
            && self.starts_at.is_none()
            && self.special_request.is_none()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Current wall clock in the store's naive local convention.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse a reservation time and reject times before `now`.
///
/// Returns the canonical `YYYY-MM-DD HH:MM` spelling (zero-padded), which
/// is what gets stored and matched by date queries.
///
/// # Errors
///
/// `InvalidDateTime` on a malformed value, `PastDateTime` when the parsed
/// time is earlier than `now`.
pub fn validate_starts_at(raw: &str, now: NaiveDateTime) -> Result<String, ValidationError> {
    let parsed = NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
        .map_err(|_| ValidationError::InvalidDateTime)?;
    if parsed < now {
        return Err(ValidationError::PastDateTime);
    }
    Ok(parsed.format(DATETIME_FORMAT).to_string())
}

/// Accept phone numbers made of digits plus `+`, `-`, and space separators.
///
/// # Errors
///
/// `InvalidPhone` when no digits remain or other characters are present.
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let phone = raw.trim();
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, '+' | '-' | ' '))
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(phone.to_owned())
}

/// Parse a spoken party size ("4", " 12 ") into a validated count.
///
/// # Errors
///
/// `InvalidPartySize` when the value is not a whole number of at least 1.
pub fn validate_party_size(raw: &str) -> Result<i32, ValidationError> {
    let size: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPartySize)?;
    validate_party_count(size)
}

/// Range-check an already-numeric party size.
///
/// # Errors
///
/// `InvalidPartySize` when the count is below 1.
pub fn validate_party_count(size: i32) -> Result<i32, ValidationError> {
    if size < 1 {
        return Err(ValidationError::InvalidPartySize);
    }
    Ok(size)
}

/// Parse a query date and return its canonical `YYYY-MM-DD` spelling.
///
/// # Errors
///
/// `InvalidDate` on a malformed value.
pub fn validate_date(raw: &str) -> Result<String, ValidationError> {
    let parsed = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)?;
    Ok(parsed.format(DATE_FORMAT).to_string())
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new booking. The name must not already hold a reservation.
///
/// # Errors
///
/// `Duplicate` when a booking with this name exists, or a database error.
pub async fn create_booking(pool: &PgPool, new: &NewBooking) -> Result<Booking, BookingError> {
    let result = sqlx::query(
        "INSERT INTO bookings (name, phone_number, party_size, starts_at, special_request)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (name) DO NOTHING",
    )
    .bind(&new.name)
    .bind(&new.phone_number)
    .bind(new.party_size)
    .bind(&new.starts_at)
    .bind(&new.special_request)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(BookingError::Duplicate(new.name.clone()));
    }

    info!(name = %new.name, starts_at = %new.starts_at, "booking created");
    Ok(Booking {
        name: new.name.clone(),
        phone_number: new.phone_number.clone(),
        party_size: new.party_size,
        starts_at: new.starts_at.clone(),
        special_request: new.special_request.clone(),
    })
}

/// Fetch a booking by customer name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn get_booking(pool: &PgPool, name: &str) -> Result<Option<Booking>, BookingError> {
    let row = sqlx::query_as::<_, (String, String, i32, String, Option<String>)>(
        "SELECT name, phone_number, party_size, starts_at, special_request
         FROM bookings WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_booking))
}

/// List all bookings in reservation-time order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_bookings(pool: &PgPool) -> Result<Vec<Booking>, BookingError> {
    let rows = sqlx::query_as::<_, (String, String, i32, String, Option<String>)>(
        "SELECT name, phone_number, party_size, starts_at, special_request
         FROM bookings ORDER BY starts_at ASC, name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_booking).collect())
}

/// List bookings whose reservation time falls on `date` (canonical
/// `YYYY-MM-DD`; callers validate via [`validate_date`]).
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn bookings_on_date(pool: &PgPool, date: &str) -> Result<Vec<Booking>, BookingError> {
    let rows = sqlx::query_as::<_, (String, String, i32, String, Option<String>)>(
        "SELECT name, phone_number, party_size, starts_at, special_request
         FROM bookings WHERE left(starts_at, 10) = $1
         ORDER BY starts_at ASC, name ASC",
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_booking).collect())
}

/// Apply a partial update to the booking under `name`.
///
/// # Errors
///
/// `Validation(NoFieldsToUpdate)` when the update carries nothing,
/// `NotFound` when no booking holds this name, or a database error.
pub async fn update_booking(
    pool: &PgPool,
    name: &str,
    update: &BookingUpdate,
) -> Result<Booking, BookingError> {
    if update.is_empty() {
        return Err(ValidationError::NoFieldsToUpdate.into());
    }

    let mut builder = QueryBuilder::new("UPDATE bookings SET updated_at = now()");
    if let Some(phone) = &update.phone_number {
        builder.push(", phone_number = ");
        builder.push_bind(phone);
    }
    if let Some(size) = update.party_size {
        builder.push(", party_size = ");
        builder.push_bind(size);
    }
    if let Some(starts) = &update.starts_at {
        builder.push(", starts_at = ");
        builder.push_bind(starts);
    }
    if let Some(request) = &update.special_request {
        builder.push(", special_request = ");
        builder.push_bind(request);
    }
    builder.push(" WHERE name = ");
    builder.push_bind(name);

    let result = builder.build().execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(BookingError::NotFound(name.to_owned()));
    }

    info!(name = %name, "booking updated");
    get_booking(pool, name)
        .await?
        .ok_or_else(|| BookingError::NotFound(name.to_owned()))
}

/// Cancel the booking under `name`. Returns whether a row was deleted.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn cancel_booking(pool: &PgPool, name: &str) -> Result<bool, BookingError> {
    let result = sqlx::query("DELETE FROM bookings WHERE name = $1")
        .bind(name)
        .execute(pool)
        .await?;

    let cancelled = result.rows_affected() > 0;
    if cancelled {
        info!(name = %name, "booking cancelled");
    }
    Ok(cancelled)
}

/// `true` when a booking exists under `name`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn booking_exists(pool: &PgPool, name: &str) -> Result<bool, BookingError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE name = $1)")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

fn row_to_booking(
    (name, phone_number, party_size, starts_at, special_request): (
        String,
        String,
        i32,
        String,
        Option<String>,
    ),
) -> Booking {
    Booking { name, phone_number, party_size, starts_at, special_request }
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
