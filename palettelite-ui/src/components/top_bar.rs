// palettelite-ui/src/components/top_bar.rs
use crate::components::SlotButtons;
use leptos::*;
use palettelite_core::Identity;

#[component]
fn HeartIcon(#[prop(into)] filled: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            width="20" height="20" viewBox="0 0 24 24"
            fill=move || if filled.get() { "currentColor" } else { "none" }
            stroke="currentColor" stroke-width="2"
        >
            <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>
        </svg>
    }
}

/// Header with generation controls, copy actions and account controls.
#[component]
pub fn TopBar(
    #[prop(into)] title: String,
    /// Dash-joined hex line shown in the pill
    #[prop(into)]
    copy_line: Signal<String>,
    #[prop(into)] count: Signal<usize>,
    max_colors: usize,
    #[prop(into)] can_remove: Signal<bool>,
    #[prop(into)] identity: Signal<Option<Identity>>,
    #[prop(into)] drawer_open: Signal<bool>,
    on_generate: Callback<()>,
    on_add: Callback<()>,
    on_remove: Callback<()>,
    on_copy_line: Callback<()>,
    on_toggle_drawer: Callback<()>,
    on_sign_in: Callback<()>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between gap-4 px-4 py-3 bg-white border-b border-black/10">
            // Left section: title and generate
            <div class="flex items-center gap-3">
                <h1 class="text-gray-900 text-base font-semibold">{title}</h1>
                <button
                    class="px-3 py-1.5 rounded-lg bg-gray-900 text-white text-sm hover:bg-gray-700 transition-colors"
                    title="Generate (Space)"
                    on:click=move |_| on_generate.call(())
                >
                    "Generate"
                </button>
                <span class="hidden md:inline text-xs text-gray-500">"or press Space"</span>
            </div>

            // Center section: copy line
            <div class="flex-1 flex items-center justify-center gap-2 min-w-0">
                <button
                    class="truncate max-w-full px-3 py-1 rounded-full bg-black/5 text-gray-700 text-xs font-mono hover:bg-black/10 transition-colors"
                    title="Copy palette"
                    on:click=move |_| on_copy_line.call(())
                >
                    {move || copy_line.get()}
                </button>
                <button
                    class="px-3 py-1.5 rounded-lg border border-black/15 text-gray-900 text-sm hover:bg-black/5 transition-colors"
                    on:click=move |_| on_copy_line.call(())
                >
                    "Copy"
                </button>
            </div>

            // Right section: size, saved palettes, account
            <div class="flex items-center gap-3">
                <SlotButtons
                    count=count
                    max=max_colors
                    can_remove=can_remove
                    on_add=on_add
                    on_remove=on_remove
                />
                <button
                    class=move || format!(
                        "rounded-full p-2 transition-colors hover:bg-black/5 {}",
                        if drawer_open.get() { "text-red-600" } else { "text-gray-900" }
                    )
                    title="Saved palettes"
                    aria-expanded=move || drawer_open.get().to_string()
                    on:click=move |_| on_toggle_drawer.call(())
                >
                    <HeartIcon filled=drawer_open />
                </button>
                {move || match identity.get() {
                    Some(user) => view! {
                        <div class="flex items-center gap-2">
                            <span class="text-sm text-gray-700 truncate max-w-[10rem]">{user.display_name}</span>
                            <button
                                class="px-3 py-1.5 rounded-lg border border-black/15 text-gray-900 text-sm hover:bg-black/5 transition-colors"
                                on:click=move |_| on_sign_out.call(())
                            >
                                "Sign out"
                            </button>
                        </div>
                    }.into_view(),
                    None => view! {
                        <button
                            class="px-3 py-1.5 rounded-lg bg-gray-900 text-white text-sm hover:bg-gray-700 transition-colors"
                            on:click=move |_| on_sign_in.call(())
                        >
                            "Sign in"
                        </button>
                    }.into_view(),
                }}
            </div>
        </header>
    }
}
