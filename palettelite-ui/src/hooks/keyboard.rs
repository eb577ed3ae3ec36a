// palettelite-ui/src/hooks/keyboard.rs
use leptos::*;
use wasm_bindgen::JsCast;

/// Actions bound to global keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Space: regenerate unlocked colors
    Generate,
    /// Escape: close the saved-palettes drawer
    CloseDrawer,
}

/// Typing into these elements must not trigger shortcuts.
fn is_form_field(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// Map a `KeyboardEvent.code` to a shortcut, given the focused element's tag.
pub fn shortcut_for(code: &str, target_tag: Option<&str>) -> Option<Shortcut> {
    if target_tag.is_some_and(is_form_field) {
        return None;
    }
    match code {
        "Space" => Some(Shortcut::Generate),
        "Escape" => Some(Shortcut::CloseDrawer),
        _ => None,
    }
}

/// Listen for global shortcuts on the window for the component's lifetime.
pub fn use_shortcuts(on_shortcut: Callback<Shortcut>) {
    let _ = leptos_use::use_event_listener(
        leptos_use::use_window(),
        leptos::ev::keydown,
        move |e: web_sys::KeyboardEvent| {
            let tag = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.tag_name());
            let Some(shortcut) = shortcut_for(&e.code(), tag.as_deref()) else {
                return;
            };
            if shortcut == Shortcut::Generate {
                // Keep the page from scrolling
                e.prevent_default();
            }
            on_shortcut.call(shortcut);
        },
    );
}
