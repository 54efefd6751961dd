//! Landing page — marketing shell and entry point to the voice assistant.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::conversation_overlay::ConversationOverlay;
use crate::state::session::SessionState;

pub const TITLE: &str = "SmartDine AI";
pub const TAGLINE: &str = "Voice-Powered Restaurant Booking.";
pub const START_LABEL: &str = "Start Conversation";

/// Landing page — static marketing content plus the start button.
///
/// The session state lives in context so the button's click handler and
/// the overlay's dismissal callback write through one surface; rendering
/// is a pure function of that state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_start = move |_| session.update(SessionState::start);
    let on_dismiss = Callback::new(move |()| session.update(SessionState::dismiss));

    view! {
        <div class="ai-container">
            <div class="ai-content">
                <div class="ai-circle">
                    <div class="pulse"></div>
                    <div class="ai-icon">"AI"</div>
                </div>
                <h1>{TITLE}</h1>
                <p class="ai-tagline">{TAGLINE}</p>
                <button class="ai-button" on:click=on_start>
                    <div class="button-content">
                        <span class="mic-icon">"🎙️"</span>
                        <span>{START_LABEL}</span>
                    </div>
                </button>
            </div>

            <Show when=move || session.get().is_active()>
                <ConversationOverlay on_close=on_dismiss/>
            </Show>
        </div>
    }
}
