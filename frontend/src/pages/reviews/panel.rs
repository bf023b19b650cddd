use super::view_model::{use_reviews_view_model, ReviewsViewModel};
use crate::api::ReviewResponse;
use crate::components::common::StarRating;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let vm = use_reviews_view_model();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.search();
    };

    view! {
        <Layout>
            <div class="px-4 max-w-3xl mx-auto">
                <h2 class="text-2xl font-semibold text-slate-900">"Traveller reviews"</h2>
                <p class="mt-1 text-slate-500">"Published reviews from real passengers."</p>

                <form class="mt-4 bg-white rounded-lg shadow p-4 flex gap-3 items-end" on:submit=on_submit>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-slate-700" for="company">"Airline"</label>
                        <select
                            id="company"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || vm.company.get()
                            on:change=move |ev| vm.company.set(event_target_value(&ev))
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
                    <button type="submit" class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700">
                        "Filter"
                    </button>
                </form>

                <div class="mt-4 space-y-4">
                    {move || match vm.reviews.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! {
                            <p class="p-6 text-sm text-red-700">{err.to_string()}</p>
                        }
                        .into_view(),
                        Some(Ok(reviews)) if reviews.is_empty() => view! {
                            <p class="p-6 text-sm text-slate-500">"No published reviews yet."</p>
                        }
                        .into_view(),
                        Some(Ok(reviews)) => reviews
                            .into_iter()
                            .map(|review| view! { <ReviewCard vm=vm review=review /> })
                            .collect_view(),
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn ReviewCard(vm: ReviewsViewModel, review: ReviewResponse) -> impl IntoView {
    let (auth, _) = use_auth();
    let review_id = review.id;
    let author = review
        .author_name()
        .unwrap_or_else(|| "Anonymous traveller".to_string());
    let flight_label = match (&review.flight_number, &review.company) {
        (Some(number), Some(company)) => format!("{} · {}", number, company),
        (Some(number), None) => number.clone(),
        (None, Some(company)) => company.clone(),
        (None, None) => String::new(),
    };

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="font-medium text-slate-900">{author}</p>
                    <p class="text-sm text-slate-500">{flight_label}</p>
                </div>
                <StarRating notation=review.notation />
            </div>
            <p class="mt-3 text-slate-700">{review.content.clone()}</p>

            <div class="mt-4 flex gap-3">
                <button
                    class="text-sm text-sky-600 hover:underline"
                    on:click=move |_| vm.toggle_thread(review_id)
                >
                    {move || if vm.is_expanded(review_id) { "Hide responses" } else { "Show responses" }}
                </button>
                <Show when=move || auth.get().is_authenticated>
                    <button
                        class="text-sm text-sky-600 hover:underline"
                        on:click=move |_| {
                            if !vm.is_expanded(review_id) {
                                vm.toggle_thread(review_id);
                            }
                            vm.start_response(review_id);
                        }
                    >
                        "Respond"
                    </button>
                </Show>
            </div>

            <Show when=move || vm.is_expanded(review_id)>
                <div class="mt-3 border-t border-slate-100 pt-3 space-y-2">
                    {move || match vm.threads.get(review_id) {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(items) if items.is_empty() => view! {
                            <p class="text-sm text-slate-400">"No responses yet."</p>
                        }
                        .into_view(),
                        Some(items) => items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="bg-slate-50 rounded px-3 py-2">
                                        <p class="text-xs font-medium text-slate-500">{item.author_name()}</p>
                                        <p class="text-sm text-slate-700">{item.content.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view(),
                    }}

                    <Show when=move || vm.draft_target.get() == Some(review_id)>
                        <div class="pt-2">
                            <textarea
                                rows="2"
                                class="block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                                placeholder="Write a response"
                                prop:value=move || vm.draft.get()
                                on:input=move |ev| vm.draft.set(event_target_value(&ev))
                            ></textarea>
                            <Show when=move || vm.draft_error.get().is_some()>
                                <p class="mt-1 text-xs text-red-700">
                                    {move || vm.draft_error.get().map(|err| err.to_string()).unwrap_or_default()}
                                </p>
                            </Show>
                            <button
                                class="mt-2 py-1 px-3 rounded-md bg-sky-600 text-white text-sm hover:bg-sky-700"
                                on:click=move |_| vm.submit_response(review_id)
                            >
                                "Post response"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
