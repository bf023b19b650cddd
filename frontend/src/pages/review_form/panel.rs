use super::view_model::use_review_form_view_model;
use crate::components::common::StarRating;
use crate::components::layout::{Layout, LoadingSpinner};
use leptos::*;
use leptos_router::use_params_map;

pub fn parse_flight_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

#[component]
pub fn ReviewFormPage() -> impl IntoView {
    let params = use_params_map();
    let flight_id = Signal::derive(move || {
        params.with(|params| parse_flight_id(params.get("flight_id").map(String::as_str)))
    });

    let vm = use_review_form_view_model(flight_id);
    let form = vm.form;
    let pending = vm.submit_action.pending();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = flight_id.get_untracked() {
            vm.submit(id);
        }
    };

    view! {
        <Layout>
            <div class="px-4 max-w-2xl mx-auto">
                <h2 class="text-2xl font-semibold text-slate-900">"Write a review"</h2>

                {move || match vm.flight.get() {
                    None | Some(None) => view! { <LoadingSpinner /> }.into_view(),
                    Some(Some(Err(_))) => view! { <LoadingSpinner /> }.into_view(),
                    Some(Some(Ok(flight))) => view! {
                        <div class="mt-4 bg-white rounded-lg shadow p-4">
                            <p class="font-medium text-slate-900">
                                {format!("{} · {}", flight.flight_number, flight.company)}
                            </p>
                            <p class="text-sm text-slate-500">
                                {flight.date.format("%Y-%m-%d").to_string()}
                            </p>
                        </div>
                    }
                    .into_view(),
                }}

                <Show when=move || vm.error.get().is_some()>
                    <div class="mt-4 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                        {move || vm.error.get().map(|err| err.to_string()).unwrap_or_default()}
                    </div>
                </Show>

                <form class="mt-4 bg-white rounded-lg shadow p-6 space-y-4" on:submit=on_submit>
                    <div>
                        <span class="block text-sm font-medium text-slate-700">"Your rating"</span>
                        <div class="mt-1 flex gap-1">
                            {(1..=5)
                                .map(|star| {
                                    view! {
                                        <button
                                            type="button"
                                            class="text-2xl"
                                            class:text-amber-400={move || form.notation.get() >= star}
                                            class:text-slate-300={move || form.notation.get() < star}
                                            on:click=move |_| form.notation.set(star)
                                        >
                                            "★"
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-1 text-sm text-slate-500">
                            {move || view! { <StarRating notation=form.notation.get() /> }}
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="content">"Your review"</label>
                        <textarea
                            id="content"
                            rows="5"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || form.content.get()
                            on:input=move |ev| form.content.set(event_target_value(&ev))
                        ></textarea>
                        <p class="mt-1 text-xs text-slate-400">
                            {move || format!("{} / 500 characters", form.content.get().chars().count())}
                        </p>
                    </div>
                    <button
                        type="submit"
                        class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit review" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_id_parses_only_integers() {
        assert_eq!(parse_flight_id(Some("42")), Some(42));
        assert_eq!(parse_flight_id(Some("abc")), None);
        assert_eq!(parse_flight_id(Some("")), None);
        assert_eq!(parse_flight_id(None), None);
    }
}
