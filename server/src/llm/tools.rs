//! SmartDine-specific tool definitions for the voice assistant.
//!
//! Tool names are the dispatch keys in `services::assistant`; the two
//! lists must stay in step.

use super::types::Tool;

/// Build the set of booking tools available to the SmartDine assistant.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn booking_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "create_booking".into(),
            description: "Create a new restaurant booking.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Customer's full name" },
                    "phone_number": { "type": "string", "description": "Customer's phone number" },
                    "party_size": { "type": "integer", "description": "Number of people in the party" },
                    "starts_at": { "type": "string", "description": "Date and time of the booking (format: YYYY-MM-DD HH:MM)" },
                    "special_request": { "type": "string", "description": "Any special requests or dietary requirements" }
                },
                "required": ["name", "phone_number", "party_size", "starts_at"]
            }),
        },
        Tool {
            name: "view_booking".into(),
            description: "View the booking held under a customer's name.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Customer's full name" }
                },
                "required": ["name"]
            }),
        },
        Tool {
            name: "update_booking".into(),
            description: "Update an existing booking. Only the provided fields change.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Customer's full name" },
                    "phone_number": { "type": "string", "description": "New phone number" },
                    "party_size": { "type": "integer", "description": "New number of people" },
                    "starts_at": { "type": "string", "description": "New date and time (YYYY-MM-DD HH:MM)" },
                    "special_request": { "type": "string", "description": "New special requests" }
                },
                "required": ["name"]
            }),
        },
        Tool {
            name: "cancel_booking".into(),
            description: "Cancel the booking held under a customer's name.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Customer's full name" }
                },
                "required": ["name"]
            }),
        },
        Tool {
            name: "view_bookings_by_date".into(),
            description: "View all bookings for a specific date.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "date": { "type": "string", "description": "Date to check bookings for (YYYY-MM-DD)" }
                },
                "required": ["date"]
            }),
        },
    ]
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
