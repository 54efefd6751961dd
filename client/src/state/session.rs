#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle of the voice-conversation overlay.
///
/// A two-variant phase instead of a bare bool, so future modal states
/// (consent prompts, error panes) extend the enum rather than multiplying
/// flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No conversation in progress; the overlay is unmounted.
    #[default]
    Idle,
    /// A conversation session is live and the overlay is mounted.
    Active,
}

/// Conversation-session state owned by the shell view.
///
/// Exactly two writers exist: the start-conversation click handler and the
/// overlay's dismissal callback. Both run on the UI event loop, so the
/// phase never sees concurrent writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl SessionState {
    /// Begin a conversation session. Starting while one is active keeps
    /// the existing session; a second overlay is never mounted.
    pub fn start(&mut self) {
        self.phase = SessionPhase::Active;
    }

    /// Dismissal request from the overlay. Idempotent: dismissing an idle
    /// session is a no-op.
    pub fn dismiss(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// `true` while the overlay should be mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }
}
