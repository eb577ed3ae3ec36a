// palettelite-ui/src/components/palette_column.rs
use crate::config::APP_CONFIG;
use leptos::*;
use palettelite_core::{guess_color_name, hex_without_hash, pick_text_color_with, PaletteSlot, SlotId};

#[component]
fn LockIcon(locked: bool) -> impl IntoView {
    let shackle = if locked {
        "M7 11V7a5 5 0 0 1 10 0v4"
    } else {
        "M7 11V7a5 5 0 0 1 9.9-1"
    };
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <rect x="3" y="11" width="18" height="11" rx="2" ry="2"/>
            <path d=shackle/>
        </svg>
    }
}

/// One full-height color column.
#[component]
pub fn PaletteColumn(
    slot: PaletteSlot,
    on_toggle_lock: Callback<SlotId>,
    /// Receives the text to copy
    on_copy: Callback<String>,
) -> impl IntoView {
    let tone = pick_text_color_with(&slot.hex, APP_CONFIG.text_contrast_threshold);
    let name = guess_color_name(&slot.hex);
    let bare = hex_without_hash(&slot.hex);
    let hex = slot.hex.clone();
    let id = slot.id;
    let locked = slot.locked;

    let chip_class = if tone.is_dark() {
        "px-2 py-1 rounded-md text-xs font-semibold hover:bg-black/10 transition-colors"
    } else {
        "px-2 py-1 rounded-md text-xs font-semibold hover:bg-white/15 transition-colors"
    };

    view! {
        <div
            class="flex-1 min-w-0 flex flex-col items-center justify-end gap-3 pb-16 transition-colors duration-300"
            style=format!("background: {}; color: {};", slot.hex, tone.css_color())
        >
            <button
                class=format!("{} {}", chip_class, if locked { "" } else { "opacity-60" })
                title=if locked { "Unlock color" } else { "Lock color" }
                aria-pressed=locked.to_string()
                on:click=move |_| on_toggle_lock.call(id)
            >
                <LockIcon locked=locked />
            </button>

            <button
                class=format!("{} text-lg tracking-wide", chip_class)
                title="Copy #HEX"
                on:click={
                    let hex = hex.clone();
                    move |_| on_copy.call(hex.clone())
                }
            >
                {hex.clone()}
            </button>

            <button
                class=chip_class
                title="Copy HEX without #"
                on:click={
                    let bare = bare.clone();
                    move |_| on_copy.call(bare.clone())
                }
            >
                {bare.clone()}
            </button>

            <div class="text-sm opacity-80 truncate max-w-full px-2">{name}</div>
        </div>
    }
}
