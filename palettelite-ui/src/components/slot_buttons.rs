use leptos::*;

/// Add / remove color buttons. Adding past the limit is reported by the handler.
#[component]
pub fn SlotButtons(
    #[prop(into)] count: Signal<usize>,
    max: usize,
    #[prop(into)] can_remove: Signal<bool>,
    on_add: Callback<()>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let button_class = "w-8 h-8 rounded-full border border-black/15 text-gray-900 \
                        hover:bg-black/5 disabled:opacity-40 disabled:cursor-not-allowed transition-colors";

    view! {
        <div class="flex items-center gap-1">
            <button
                class=button_class
                title="Remove last color"
                disabled=move || !can_remove.get()
                on:click=move |_| on_remove.call(())
            >
                "−"
            </button>
            <span class="text-xs text-gray-500 tabular-nums w-10 text-center">
                {move || format!("{}/{}", count.get(), max)}
            </span>
            <button
                class=button_class
                title="Add a color"
                on:click=move |_| on_add.call(())
            >
                "+"
            </button>
        </div>
    }
}
