//! Confirmation dialog for destructive actions.

use leptos::*;

/// A centered modal dialog. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    /// Whether the dialog is visible
    #[prop(into)]
    visible: Signal<bool>,
    #[prop(into)]
    title: String,
    /// Body text; may follow the item being confirmed
    #[prop(into)]
    message: MaybeSignal<String>,
    #[prop(into)]
    cancel_label: String,
    /// Confirm button label (e.g., "Delete")
    #[prop(into)]
    confirm_label: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            // Backdrop
            <div
                class="fixed inset-0 z-[100] bg-black/50 backdrop-blur-sm flex items-center justify-center"
                on:click=move |_| on_cancel.call(())
            >
                <div
                    class="bg-white border border-black/10 rounded-lg p-4 max-w-sm mx-4 space-y-4 shadow-xl"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    <h3 class="text-gray-900 text-sm font-medium">{title.clone()}</h3>
                    <p class="text-gray-600 text-sm">{let message = message.clone(); move || message.get()}</p>
                    <div class="flex gap-2">
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg border border-black/20 text-gray-900 text-sm hover:bg-black/5 transition-colors"
                            on:click=move |_| on_cancel.call(())
                        >
                            {cancel_label.clone()}
                        </button>
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg bg-red-600 text-white text-sm hover:bg-red-700 transition-colors"
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
