use super::*;
use crate::state::test_helpers;
use serde_json::json;

// Every test here exercises a path that fails validation (or dispatch)
// before the first store access, so the lazy test pool is never hit.

#[tokio::test]
async fn unknown_tool_is_answered_inline() {
    let state = test_helpers::test_app_state();
    let content = execute_tool(&state, "book_flight", &json!({})).await.unwrap();
    assert_eq!(content, "unknown tool: book_flight");
}

#[tokio::test]
async fn create_rejects_missing_name() {
    let state = test_helpers::test_app_state();
    let content = execute_tool(&state, "create_booking", &json!({})).await.unwrap();
    assert_eq!(content, "A customer name is required");
}

#[tokio::test]
async fn create_rejects_malformed_date() {
    let state = test_helpers::test_app_state();
    let input = json!({
        "name": "Ada Lovelace",
        "starts_at": "tomorrow at eight",
        "phone_number": "5551234",
        "party_size": 4
    });
    let content = execute_tool(&state, "create_booking", &input).await.unwrap();
    assert_eq!(content, "Invalid date format. Please use YYYY-MM-DD HH:MM format");
}

#[tokio::test]
async fn create_rejects_past_date() {
    let state = test_helpers::test_app_state();
    let input = json!({
        "name": "Ada Lovelace",
        "starts_at": "2001-01-01 19:30",
        "phone_number": "5551234",
        "party_size": 4
    });
    let content = execute_tool(&state, "create_booking", &input).await.unwrap();
    assert_eq!(content, "Sorry, you cannot book for a past date and time.");
}

#[tokio::test]
async fn create_rejects_bad_phone() {
    let state = test_helpers::test_app_state();
    let input = json!({
        "name": "Ada Lovelace",
        "starts_at": "2099-05-10 19:30",
        "phone_number": "555-CALL",
        "party_size": 4
    });
    let content = execute_tool(&state, "create_booking", &input).await.unwrap();
    assert_eq!(content, "Invalid phone number format");
}

#[tokio::test]
async fn create_rejects_zero_party_as_number() {
    let state = test_helpers::test_app_state();
    let input = json!({
        "name": "Ada Lovelace",
        "starts_at": "2099-05-10 19:30",
        "phone_number": "5551234",
        "party_size": 0
    });
    let content = execute_tool(&state, "create_booking", &input).await.unwrap();
    assert_eq!(content, "Invalid number of people");
}

#[tokio::test]
async fn create_rejects_spelled_out_party_string() {
    let state = test_helpers::test_app_state();
    let input = json!({
        "name": "Ada Lovelace",
        "starts_at": "2099-05-10 19:30",
        "phone_number": "5551234",
        "party_size": "four"
    });
    let content = execute_tool(&state, "create_booking", &input).await.unwrap();
    assert_eq!(content, "Invalid number of people");
}

#[tokio::test]
async fn update_rejects_empty_update() {
    let state = test_helpers::test_app_state();
    let input = json!({ "name": "Ada Lovelace" });
    let content = execute_tool(&state, "update_booking", &input).await.unwrap();
    assert_eq!(content, "Failed to update booking");
}

#[tokio::test]
async fn update_rejects_bad_field_before_store_access() {
    let state = test_helpers::test_app_state();
    let input = json!({ "name": "Ada Lovelace", "party_size": "-3" });
    let content = execute_tool(&state, "update_booking", &input).await.unwrap();
    assert_eq!(content, "Invalid number of people");
}

#[tokio::test]
async fn view_by_date_rejects_malformed_date() {
    let state = test_helpers::test_app_state();
    let input = json!({ "date": "08/07/2026" });
    let content = execute_tool(&state, "view_bookings_by_date", &input).await.unwrap();
    assert_eq!(content, "Invalid date format. Please use YYYY-MM-DD format");
}

// =============================================================
// format_booking
// =============================================================

#[test]
fn format_booking_includes_every_field() {
    let b = Booking {
        name: "Ada Lovelace".to_owned(),
        phone_number: "+1 555-010-2222".to_owned(),
        party_size: 4,
        starts_at: "2099-05-10 19:30".to_owned(),
        special_request: Some("window table".to_owned()),
    };
    let text = format_booking(&b);
    assert_eq!(
        text,
        "Name: Ada Lovelace\nDate and Time: 2099-05-10 19:30\nNumber of people: 4\nPhone: +1 555-010-2222\nSpecial requests: window table"
    );
}

#[test]
fn format_booking_spells_out_absent_request() {
    let b = Booking {
        name: "Ada Lovelace".to_owned(),
        phone_number: "5551234".to_owned(),
        party_size: 2,
        starts_at: "2099-05-10 19:30".to_owned(),
        special_request: None,
    };
    assert!(format_booking(&b).ends_with("Special requests: None"));

    let b = Booking { special_request: Some(String::new()), ..b };
    assert!(format_booking(&b).ends_with("Special requests: None"));
}
