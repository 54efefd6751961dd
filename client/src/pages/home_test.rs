use super::*;

#[test]
fn shell_copy_matches_the_brand() {
    assert_eq!(TITLE, "SmartDine AI");
    assert_eq!(TAGLINE, "Voice-Powered Restaurant Booking.");
}

#[test]
fn call_to_action_invites_a_conversation() {
    assert_eq!(START_LABEL, "Start Conversation");
}
