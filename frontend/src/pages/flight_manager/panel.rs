use super::view_model::use_flight_manager_view_model;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::{Layout, LoadingSpinner};
use leptos::*;

#[component]
pub fn FlightManagerPage() -> impl IntoView {
    let vm = use_flight_manager_view_model();
    let form = vm.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <Layout>
            <div class="px-4 max-w-4xl mx-auto">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-semibold text-slate-900">"Flight manager"</h2>
                    <div class="flex items-center gap-4">
                        <button
                            class="text-sm text-sky-600 hover:underline"
                            on:click=move |_| vm.refresh()
                        >
                            "Refresh"
                        </button>
                        <button
                            class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700"
                            on:click=move |_| vm.open_create()
                        >
                            "Add flight"
                        </button>
                    </div>
                </div>

                <Show when=move || vm.error.get().is_some()>
                    <div class="mt-4 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                        {move || vm.error.get().map(|err| err.to_string()).unwrap_or_default()}
                    </div>
                </Show>

                <div class="mt-4 bg-white rounded-lg shadow overflow-hidden">
                    <Show when=move || vm.loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <Show when=move || !vm.loading.get() && vm.flights.get().is_empty()>
                        <p class="p-6 text-sm text-slate-500">"No flights yet. Add the first one."</p>
                    </Show>
                    <Show when=move || !vm.loading.get() && !vm.flights.get().is_empty()>
                        <table class="min-w-full divide-y divide-slate-200">
                            <thead class="bg-slate-50">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-slate-500 uppercase">"Flight"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-slate-500 uppercase">"Airline"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-slate-500 uppercase">"Date"</th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-slate-100">
                                <For
                                    each=move || vm.flights.get()
                                    key=|flight| flight.id
                                    children=move |flight| {
                                        let flight_id = flight.id;
                                        let edit_target = flight.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-3 font-medium text-slate-900">{flight.flight_number.clone()}</td>
                                                <td class="px-4 py-3 text-slate-700">{flight.company.clone()}</td>
                                                <td class="px-4 py-3 text-slate-700">{flight.date.format("%Y-%m-%d").to_string()}</td>
                                                <td class="px-4 py-3 text-right space-x-3">
                                                    <button
                                                        class="text-sm text-sky-600 hover:underline"
                                                        on:click=move |_| vm.open_edit(&edit_target)
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="text-sm text-red-600 hover:underline"
                                                        on:click=move |_| vm.request_delete(flight_id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </div>

                <Show when=move || vm.dialog_open.get()>
                    <div class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/50">
                        <div class="bg-white rounded-lg shadow-xl p-6 max-w-md w-full">
                            <h3 class="text-lg font-medium text-slate-900">
                                {move || if form.editing_id.get().is_some() { "Edit flight" } else { "Add flight" }}
                            </h3>
                            <Show when=move || vm.form_error.get().is_some()>
                                <div class="mt-3 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                                    {move || vm.form_error.get().map(|err| err.to_string()).unwrap_or_default()}
                                </div>
                            </Show>
                            <form class="mt-4 space-y-3" on:submit=on_submit>
                                <div>
                                    <label class="block text-sm font-medium text-slate-700" for="flight-number">"Flight number"</label>
                                    <input
                                        id="flight-number"
                                        class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                                        prop:value=move || form.flight_number.get()
                                        on:input=move |ev| form.flight_number.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-slate-700" for="airline">"Airline"</label>
                                    <input
                                        id="airline"
                                        class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                                        prop:value=move || form.company.get()
                                        on:input=move |ev| form.company.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-slate-700" for="flight-date">"Date"</label>
                                    <input
                                        id="flight-date"
                                        type="date"
                                        class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                                        prop:value=move || form.date.get()
                                        on:input=move |ev| form.date.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="flex justify-end gap-2 pt-2">
                                    <button
                                        type="button"
                                        class="py-2 px-4 rounded-md border border-slate-300 text-slate-700 hover:bg-slate-50"
                                        on:click=move |_| vm.close_dialog()
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        type="submit"
                                        class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700 disabled:opacity-50"
                                        disabled=move || vm.save_action.pending().get()
                                    >
                                        "Save"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>

                <ConfirmDialog
                    show=Signal::derive(move || vm.pending_delete.get().is_some())
                    title="Delete flight".to_string()
                    message=Signal::derive(|| "This permanently removes the flight.".to_string())
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_manager_listing_chrome() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <FlightManagerPage /> }
        });
        assert!(html.contains("Flight manager"));
        assert!(html.contains("Add flight"));
    }
}
