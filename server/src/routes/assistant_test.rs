use super::*;
use crate::state::test_helpers;
use serde_json::json;

#[tokio::test]
async fn list_tools_publishes_the_booking_surface() {
    let Json(tools) = list_tools().await;
    assert_eq!(tools.len(), 5);
    assert!(tools.iter().any(|t| t.name == "create_booking"));
}

#[tokio::test]
async fn call_tool_answers_unknown_tools_inline() {
    let state = test_helpers::test_app_state();
    let result = call_tool(
        State(state),
        Path("book_flight".to_owned()),
        Json(json!({})),
    )
    .await
    .unwrap();
    assert_eq!(result.0.content, "unknown tool: book_flight");
}

#[tokio::test]
async fn call_tool_speaks_validation_failures() {
    let state = test_helpers::test_app_state();
    let result = call_tool(
        State(state),
        Path("view_bookings_by_date".to_owned()),
        Json(json!({ "date": "someday" })),
    )
    .await
    .unwrap();
    assert_eq!(
        result.0.content,
        "Invalid date format. Please use YYYY-MM-DD format"
    );
}
