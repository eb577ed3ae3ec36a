//! Toast notification for transient feedback.

use leptos::*;

/// Toast pinned to the bottom of the viewport. Fades out when `message` clears.
#[component]
pub fn Toast(
    /// Message to display (None = hidden)
    message: Signal<Option<String>>,
) -> impl IntoView {
    // Keep the last text around so it doesn't vanish mid-fade
    let (display_message, set_display_message) = create_signal(String::new());

    create_effect(move |_| {
        if let Some(msg) = message.get() {
            set_display_message.set(msg);
        }
    });

    view! {
        <div
            class=move || format!(
                "fixed bottom-8 left-1/2 -translate-x-1/2 z-50 \
                 px-4 py-2 rounded-lg \
                 bg-black/80 text-white text-sm font-medium \
                 transition-opacity duration-300 \
                 pointer-events-none {}",
                if message.get().is_some() { "opacity-100" } else { "opacity-0" }
            )
            role="status"
        >
            {move || display_message.get()}
        </div>
    }
}
