//! Assistant tool dispatch — named booking tools for the voice agent.
//!
//! DESIGN
//! ======
//! The external conversation service drives bookings exclusively through
//! named tools. Each tool validates its input before touching the store
//! and answers with a sentence the agent can speak back verbatim. Unknown
//! tool names are answered inline rather than erroring so the agent can
//! recover mid-conversation; only database failures surface as errors.

use serde_json::Value;
use tracing::info;

use crate::services::booking::{
    self, Booking, BookingError, BookingUpdate, NewBooking, ValidationError,
};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Execute a named assistant tool against the booking store.
///
/// The returned string is the assistant's spoken answer; every validation
/// failure is a sentence, not an error.
///
/// # Errors
///
/// Returns an error only when the store itself fails.
pub async fn execute_tool(
    state: &AppState,
    tool_name: &str,
    input: &Value,
) -> Result<String, AssistantError> {
    match tool_name {
        "create_booking" => execute_create_booking(state, input).await,
        "view_booking" => execute_view_booking(state, input).await,
        "update_booking" => execute_update_booking(state, input).await,
        "cancel_booking" => execute_cancel_booking(state, input).await,
        "view_bookings_by_date" => execute_view_bookings_by_date(state, input).await,
        _ => Ok(format!("unknown tool: {tool_name}")),
    }
}

// =============================================================================
// TOOL EXECUTION
// =============================================================================

async fn execute_create_booking(state: &AppState, input: &Value) -> Result<String, AssistantError> {
    let name = str_arg(input, "name").trim();
    if name.is_empty() {
        return Ok(validation_message(ValidationError::MissingName));
    }

    let starts_at = match booking::validate_starts_at(str_arg(input, "starts_at"), booking::local_now()) {
        Ok(v) => v,
        Err(e) => return Ok(validation_message(e)),
    };
    let phone_number = match booking::validate_phone(str_arg(input, "phone_number")) {
        Ok(v) => v,
        Err(e) => return Ok(validation_message(e)),
    };
    let party_size = match booking::validate_party_size(&party_size_arg(input)) {
        Ok(v) => v,
        Err(e) => return Ok(validation_message(e)),
    };
    let special_request = {
        let raw = str_arg(input, "special_request").trim();
        (!raw.is_empty()).then(|| raw.to_owned())
    };

    let new = NewBooking {
        name: name.to_owned(),
        phone_number,
        party_size,
        starts_at,
        special_request,
    };

    match booking::create_booking(&state.pool, &new).await {
        Ok(b) => {
            info!(name = %b.name, "assistant created booking");
            Ok(format!("Booking confirmed!\n{}", format_booking(&b)))
        }
        Err(e) => booking_failure(e),
    }
}

async fn execute_view_booking(state: &AppState, input: &Value) -> Result<String, AssistantError> {
    let name = str_arg(input, "name").trim();
    if name.is_empty() {
        // An empty name can never hold a booking; skip the store.
        return Ok("No booking found under this name".to_owned());
    }

    match booking::get_booking(&state.pool, name).await {
        Ok(Some(b)) => Ok(format!("Found booking:\n{}", format_booking(&b))),
        Ok(None) => Ok("No booking found under this name".to_owned()),
        Err(e) => booking_failure(e),
    }
}

async fn execute_update_booking(state: &AppState, input: &Value) -> Result<String, AssistantError> {
    let name = str_arg(input, "name").trim();
    if name.is_empty() {
        return Ok(validation_message(ValidationError::MissingName));
    }

    // Validate every provided field before the first store access so a bad
    // value never half-applies.
    let mut update = BookingUpdate::default();
    if let Some(raw) = opt_str_arg(input, "starts_at") {
        match booking::validate_starts_at(raw, booking::local_now()) {
            Ok(v) => update.starts_at = Some(v),
            Err(e) => return Ok(validation_message(e)),
        }
    }
    if let Some(raw) = opt_str_arg(input, "phone_number") {
        match booking::validate_phone(raw) {
            Ok(v) => update.phone_number = Some(v),
            Err(e) => return Ok(validation_message(e)),
        }
    }
    if let Some(size) = input.get("party_size") {
        let raw = match size {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => String::new(),
        };
        match booking::validate_party_size(&raw) {
            Ok(v) => update.party_size = Some(v),
            Err(e) => return Ok(validation_message(e)),
        }
    }
    if let Some(raw) = opt_str_arg(input, "special_request") {
        update.special_request = Some(raw.to_owned());
    }

    if update.is_empty() {
        return Ok(validation_message(ValidationError::NoFieldsToUpdate));
    }

    match booking::booking_exists(&state.pool, name).await {
        Ok(true) => {}
        Ok(false) => return Ok("No booking found under this name".to_owned()),
        Err(e) => return booking_failure(e),
    }

    match booking::update_booking(&state.pool, name, &update).await {
        Ok(b) => {
            info!(name = %b.name, "assistant updated booking");
            Ok(format!("Booking updated successfully!\n{}", format_booking(&b)))
        }
        Err(e) => booking_failure(e),
    }
}

async fn execute_cancel_booking(state: &AppState, input: &Value) -> Result<String, AssistantError> {
    let name = str_arg(input, "name").trim();
    if name.is_empty() {
        return Ok("No booking found under this name".to_owned());
    }

    match booking::cancel_booking(&state.pool, name).await {
        Ok(true) => {
            info!(name = %name, "assistant cancelled booking");
            Ok(format!("Booking for {name} has been cancelled"))
        }
        Ok(false) => Ok("No booking found under this name".to_owned()),
        Err(e) => booking_failure(e),
    }
}

async fn execute_view_bookings_by_date(
    state: &AppState,
    input: &Value,
) -> Result<String, AssistantError> {
    let date = match booking::validate_date(str_arg(input, "date")) {
        Ok(d) => d,
        Err(e) => return Ok(validation_message(e)),
    };

    match booking::bookings_on_date(&state.pool, &date).await {
        Ok(list) if list.is_empty() => Ok(format!("No bookings found for {date}")),
        Ok(list) => {
            let mut response = format!("Bookings for {date}:\n\n");
            for b in &list {
                response.push_str(&format_booking(b));
                response.push_str("\n\n");
            }
            Ok(response)
        }
        Err(e) => booking_failure(e),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Format a booking into the readable block the assistant reads back.
#[must_use]
pub fn format_booking(b: &Booking) -> String {
    let special = b
        .special_request
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("None");
    format!(
        "Name: {}\nDate and Time: {}\nNumber of people: {}\nPhone: {}\nSpecial requests: {}",
        b.name, b.starts_at, b.party_size, b.phone_number, special
    )
}

/// Spoken sentence for each rejected input.
#[must_use]
pub fn validation_message(err: ValidationError) -> String {
    match err {
        ValidationError::MissingName => "A customer name is required",
        ValidationError::InvalidDateTime => "Invalid date format. Please use YYYY-MM-DD HH:MM format",
        ValidationError::PastDateTime => "Sorry, you cannot book for a past date and time.",
        ValidationError::InvalidPhone => "Invalid phone number format",
        ValidationError::InvalidPartySize => "Invalid number of people",
        ValidationError::InvalidDate => "Invalid date format. Please use YYYY-MM-DD format",
        ValidationError::NoFieldsToUpdate => "Failed to update booking",
    }
    .to_owned()
}

/// Store failures the assistant can phrase; database errors propagate.
fn booking_failure(err: BookingError) -> Result<String, AssistantError> {
    match err {
        BookingError::Duplicate(_) => Ok("A booking with this name already exists".to_owned()),
        BookingError::NotFound(_) => Ok("No booking found under this name".to_owned()),
        BookingError::Validation(e) => Ok(validation_message(e)),
        BookingError::Database(e) => Err(AssistantError::Database(e)),
    }
}

fn str_arg<'a>(input: &'a Value, key: &str) -> &'a str {
    input.get(key).and_then(Value::as_str).unwrap_or("")
}

fn opt_str_arg<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

/// Party size may arrive as a JSON number or as a spoken-digit string.
fn party_size_arg(input: &Value) -> String {
    match input.get("party_size") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
