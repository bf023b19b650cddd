use leptos::*;

/// Modal confirmation used before destructive actions. Nothing is dispatched
/// until `on_confirm` fires; closing the dialog is always a no-op.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = store_value(title);
    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/50">
                <div class="bg-white rounded-lg shadow-xl max-w-md w-full mx-4 p-6" role="dialog">
                    <h2 class="text-lg font-semibold text-slate-900">{title.get_value()}</h2>
                    <p class="mt-2 text-sm text-slate-600">{move || message.get()}</p>
                    <div class="mt-6 flex justify-end space-x-3">
                        <button
                            class="px-4 py-2 text-sm font-medium rounded-md border border-slate-300 text-slate-700 hover:bg-slate-50"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="px-4 py-2 text-sm font-medium rounded-md bg-red-600 text-white hover:bg-red-700"
                            on:click=move |_| on_confirm.call(())
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
