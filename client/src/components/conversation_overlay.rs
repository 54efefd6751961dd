//! Modal hosting the external voice-conversation widget.
//!
//! The widget itself ships from the conversation provider and attaches to
//! the mount node marked `data-widget="voice-session"`; this component
//! only supplies the modal chrome and forwards dismissal. It never
//! inspects the widget's internals.

use leptos::prelude::*;

/// Conversation overlay — mounted while a session is active.
///
/// `on_close` is the single value the shell passes in. The overlay may
/// invoke it more than once (close button, Escape, backdrop click); the
/// shell treats dismissal as idempotent.
#[component]
pub fn ConversationOverlay(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="overlay-backdrop" on:click=on_backdrop>
            <div
                class="overlay"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="overlay__header">
                    <h2>"SmartDine Assistant"</h2>
                    <button class="overlay__close" on:click=on_close_click title="End conversation">
                        "✕"
                    </button>
                </div>
                <div class="overlay__body">
                    <div class="overlay__widget" data-widget="voice-session">
                        <p class="overlay__hint">"Connecting you to the SmartDine assistant…"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
