use super::view_model::use_flights_view_model;
use crate::components::layout::{Layout, LoadingSpinner};
use leptos::*;

/// Flight browser. With `review_mode` set, each row links to the review
/// form for that flight instead of being a plain listing.
#[component]
pub fn FlightsPage(#[prop(optional)] review_mode: bool) -> impl IntoView {
    let vm = use_flights_view_model();
    let filter = vm.filter;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.search();
    };

    let title = if review_mode {
        "Pick a flight to review"
    } else {
        "Flights"
    };

    view! {
        <Layout>
            <div class="px-4">
                <h2 class="text-2xl font-semibold text-slate-900">{title}</h2>

                <form class="mt-4 bg-white rounded-lg shadow p-4 grid grid-cols-1 sm:grid-cols-4 gap-3 items-end" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="company">"Airline"</label>
                        <select
                            id="company"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || filter.company.get()
                            on:change=move |ev| filter.company.set(event_target_value(&ev))
                        >
                            <option value="">"All airlines"</option>
                            {move || {
                                vm.companies
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|company| view! { <option value=company.clone()>{company}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="start-date">"From"</label>
                        <input
                            id="start-date"
                            type="date"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || filter.start_date.get()
                            on:input=move |ev| filter.start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="end-date">"To"</label>
                        <input
                            id="end-date"
                            type="date"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || filter.end_date.get()
                            on:input=move |ev| filter.end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex gap-2">
                        <button type="submit" class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700">
                            "Search"
                        </button>
                        <button
                            type="button"
                            class="py-2 px-4 rounded-md border border-slate-300 text-slate-700 hover:bg-slate-50"
                            on:click=move |_| vm.clear()
                        >
                            "Clear"
                        </button>
                    </div>
                </form>

                <Show when=move || vm.error.get().is_some()>
                    <div class="mt-4 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                        {move || vm.error.get().map(|err| err.to_string()).unwrap_or_default()}
                    </div>
                </Show>

                <div class="mt-4 bg-white rounded-lg shadow overflow-hidden">
                    {move || match vm.flights.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! {
                            <p class="p-6 text-sm text-red-700">{err.to_string()}</p>
                        }
                        .into_view(),
                        Some(Ok(flights)) if flights.is_empty() => view! {
                            <p class="p-6 text-sm text-slate-500">"No flights match these filters."</p>
                        }
                        .into_view(),
                        Some(Ok(flights)) => view! {
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
                                    {flights
                                        .into_iter()
                                        .map(|flight| {
                                            let review_href = format!("/review-form/{}", flight.id);
                                            view! {
                                                <tr>
                                                    <td class="px-4 py-3 font-medium text-slate-900">{flight.flight_number}</td>
                                                    <td class="px-4 py-3 text-slate-700">{flight.company}</td>
                                                    <td class="px-4 py-3 text-slate-700">{flight.date.format("%Y-%m-%d").to_string()}</td>
                                                    <td class="px-4 py-3 text-right">
                                                        <Show when=move || review_mode>
                                                            <a
                                                                href=review_href.clone()
                                                                class="text-sky-600 hover:underline text-sm font-medium"
                                                            >
                                                                "Review this flight"
                                                            </a>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_filter_form() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <FlightsPage /> }
        });
        assert!(html.contains("All airlines"));
        assert!(html.contains("Search"));
        assert!(html.contains("Flights"));
    }

    #[test]
    fn review_mode_changes_the_heading() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <FlightsPage review_mode=true /> }
        });
        assert!(html.contains("Pick a flight to review"));
    }
}
