use super::*;

#[test]
fn booking_tools_returns_all_five_tools() {
    let tools = booking_tools();
    assert_eq!(tools.len(), 5);
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert!(names.contains(&"create_booking"));
    assert!(names.contains(&"view_booking"));
    assert!(names.contains(&"update_booking"));
    assert!(names.contains(&"cancel_booking"));
    assert!(names.contains(&"view_bookings_by_date"));
}

#[test]
fn schema_shape_is_object() {
    let tools = booking_tools();
    for tool in &tools {
        assert_eq!(
            tool.input_schema.get("type").and_then(|v| v.as_str()),
            Some("object"),
            "tool {} schema should be type=object",
            tool.name
        );
    }
}

#[test]
fn required_fields_are_arrays() {
    let tools = booking_tools();
    for tool in &tools {
        let required = tool.input_schema.get("required").unwrap();
        assert!(required.is_array(), "tool {} required should be array", tool.name);
    }
}

#[test]
fn create_booking_requires_core_fields() {
    let tools = booking_tools();
    let tool = tools.iter().find(|t| t.name == "create_booking").unwrap();
    let required: Vec<&str> = tool
        .input_schema
        .get("required")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["name", "phone_number", "party_size", "starts_at"]);
}

#[test]
fn update_booking_requires_only_name() {
    let tools = booking_tools();
    let tool = tools.iter().find(|t| t.name == "update_booking").unwrap();
    let required: Vec<&str> = tool
        .input_schema
        .get("required")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["name"]);
}

#[tokio::test]
async fn every_tool_name_dispatches() {
    // The dispatcher answers unknown names with an "unknown tool" sentence;
    // every advertised name must therefore be a known dispatch key.
    let state = crate::state::test_helpers::test_app_state();
    for tool in booking_tools() {
        let content = crate::services::assistant::execute_tool(
            &state,
            &tool.name,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
        assert!(
            !content.starts_with("unknown tool:"),
            "tool {} is advertised but not dispatched",
            tool.name
        );
    }
}
