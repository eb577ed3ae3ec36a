// palettelite-ui/src/components/saved_drawer.rs
//! Side drawer listing the signed-in user's saved palettes.

use crate::components::ConfirmDialog;
use leptos::*;
use palettelite_core::{filter_saved, SavedPalette};

#[component]
fn SavedItem(
    palette: SavedPalette,
    preview_len: usize,
    on_load: Callback<SavedPalette>,
    on_copy: Callback<String>,
    on_delete: Callback<SavedPalette>,
) -> impl IntoView {
    let swatches = palette
        .preview(preview_len)
        .iter()
        .map(|hex| {
            view! { <div class="flex-1 h-8" style=format!("background: {hex};")></div> }
        })
        .collect_view();
    let line = palette.copy_line();

    let load = {
        let palette = palette.clone();
        move |_: ev::MouseEvent| on_load.call(palette.clone())
    };
    let delete = {
        let palette = palette.clone();
        move |e: ev::MouseEvent| {
            e.stop_propagation();
            on_delete.call(palette.clone())
        }
    };
    let copy = {
        let line = line.clone();
        move |e: ev::MouseEvent| {
            e.stop_propagation();
            on_copy.call(line.clone())
        }
    };

    view! {
        <li
            class="group rounded-lg border border-black/10 overflow-hidden cursor-pointer hover:border-black/30 transition-colors"
            title="Load palette"
            on:click=load
        >
            <div class="flex">{swatches}</div>
            <div class="flex items-center justify-between gap-2 px-3 py-2">
                <div class="min-w-0">
                    <div class="text-sm text-gray-900 font-medium truncate">{palette.name.clone()}</div>
                    <div class="text-xs text-gray-500 font-mono truncate">{line}</div>
                </div>
                <div class="flex items-center gap-1 shrink-0">
                    <button
                        class="px-2 py-1 rounded-md text-xs text-gray-700 hover:bg-black/5 transition-colors"
                        on:click=copy
                    >
                        "Copy"
                    </button>
                    <button
                        class="px-2 py-1 rounded-md text-xs text-red-600 hover:bg-red-50 transition-colors"
                        on:click=delete
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </li>
    }
}

/// Saved palettes drawer with search, per-item actions and a save footer.
#[component]
pub fn SavedDrawer(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] saved: Signal<Vec<SavedPalette>>,
    /// Colors in the current palette
    #[prop(into)]
    current_len: Signal<usize>,
    max_colors: usize,
    preview_len: usize,
    #[prop(into)] can_save: Signal<bool>,
    on_close: Callback<()>,
    on_load: Callback<SavedPalette>,
    on_copy: Callback<String>,
    /// Receives the palette id once the user confirms
    on_delete: Callback<String>,
    /// Receives the entered name; returns true when the save went through
    on_save: Callback<String, bool>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let pending_delete = create_rw_signal(None::<SavedPalette>);

    let visible = create_memo(move |_| {
        let query = query.get();
        saved.with(|all| {
            filter_saved(all, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let submit = move || {
        let entered = name.get_untracked();
        if on_save.call(entered) {
            set_name.set(String::new());
        }
    };

    let confirm_message = Signal::derive(move || {
        pending_delete.with(|p| match p {
            Some(p) => format!("\"{}\" will be removed permanently.", p.name),
            None => String::new(),
        })
    });

    view! {
        <div
            class=move || format!(
                "fixed inset-0 z-40 bg-black/30 transition-opacity duration-300 {}",
                if open.get() { "opacity-100" } else { "opacity-0 pointer-events-none" }
            )
            on:click=move |_| on_close.call(())
        ></div>
        <aside
            class=move || format!(
                "fixed top-0 right-0 z-50 h-full w-full max-w-sm bg-white shadow-2xl \
                 flex flex-col transition-transform duration-300 {}",
                if open.get() { "translate-x-0" } else { "translate-x-full" }
            )
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="flex items-center justify-between px-4 py-3 border-b border-black/10">
                <h2 class="text-gray-900 text-sm font-semibold">"Saved palettes"</h2>
                <button
                    class="rounded-full px-2 py-1 text-gray-700 hover:bg-black/5 transition-colors"
                    title="Close (Esc)"
                    on:click=move |_| on_close.call(())
                >
                    "✕"
                </button>
            </div>

            <div class="px-4 py-3">
                <input
                    type="search"
                    class="w-full px-3 py-1.5 rounded-lg border border-black/15 text-sm"
                    placeholder="Search by name"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            <ul class="flex-1 overflow-y-auto px-4 space-y-3">
                <For
                    each=move || visible.get()
                    key=|p| p.id.clone()
                    children=move |palette| view! {
                        <SavedItem
                            palette=palette
                            preview_len=preview_len
                            on_load=on_load
                            on_copy=on_copy
                            on_delete=Callback::new(move |p| pending_delete.set(Some(p)))
                        />
                    }
                />
                <Show when=move || visible.with(Vec::is_empty)>
                    <li class="text-sm text-gray-500 text-center py-8">
                        {move || if saved.with(Vec::is_empty) {
                            "No saved palettes yet"
                        } else {
                            "Nothing matches your search"
                        }}
                    </li>
                </Show>
            </ul>

            <form
                class="px-4 py-3 border-t border-black/10 space-y-2"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <div class="flex gap-2">
                    <input
                        type="text"
                        class="flex-1 px-3 py-1.5 rounded-lg border border-black/15 text-sm"
                        placeholder="Palette name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-3 py-1.5 rounded-lg bg-gray-900 text-white text-sm hover:bg-gray-700 \
                               disabled:opacity-40 disabled:cursor-not-allowed transition-colors"
                        disabled=move || !can_save.get()
                    >
                        "Save"
                    </button>
                </div>
                <div class="text-xs text-gray-500">
                    {move || format!("{}/{} colors", current_len.get(), max_colors)}
                </div>
            </form>
        </aside>

        <ConfirmDialog
            visible=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete palette?"
            message=confirm_message
            cancel_label="Cancel"
            confirm_label="Delete"
            on_cancel=Callback::new(move |_| pending_delete.set(None))
            on_confirm=Callback::new(move |_| {
                if let Some(p) = pending_delete.get_untracked() {
                    on_delete.call(p.id);
                }
                pending_delete.set(None);
            })
        />
    }
}
