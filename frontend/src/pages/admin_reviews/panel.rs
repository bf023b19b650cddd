use super::view_model::{use_moderation_view_model, ModerationViewModel};
use crate::api::{ReviewResponse, ReviewStatus};
use crate::components::common::StarRating;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::{Layout, LoadingSpinner};
use leptos::*;

fn status_badge_class(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "bg-amber-100 text-amber-800 px-2 py-0.5 rounded text-xs font-medium",
        ReviewStatus::Published => "bg-green-100 text-green-800 px-2 py-0.5 rounded text-xs font-medium",
        ReviewStatus::Rejected => "bg-red-100 text-red-800 px-2 py-0.5 rounded text-xs font-medium",
    }
}

#[component]
pub fn AdminReviewsPage() -> impl IntoView {
    let vm = use_moderation_view_model();
    let filter = vm.filter;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.search();
    };

    view! {
        <Layout>
            <div class="px-4 max-w-4xl mx-auto">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-semibold text-slate-900">"Review moderation"</h2>
                    <button
                        class="text-sm text-sky-600 hover:underline"
                        on:click=move |_| vm.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
                <p class="mt-1 text-slate-500">"Publish, reject, or remove traveller reviews."</p>

                <form class="mt-4 bg-white rounded-lg shadow p-4 grid grid-cols-1 sm:grid-cols-3 gap-3 items-end" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="status">"Status"</label>
                        <select
                            id="status"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || filter.status.get()
                            on:change=move |ev| filter.status.set(event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            <option value="PENDING">"Pending"</option>
                            <option value="PUBLISHED">"Published"</option>
                            <option value="REJECTED">"Rejected"</option>
                        </select>
                    </div>
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
                    <div class="flex gap-2">
                        <button type="submit" class="py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700">
                            "Filter"
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

                <div class="mt-4 space-y-4">
                    <Show when=move || vm.loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <Show when=move || !vm.loading.get() && vm.reviews.get().is_empty()>
                        <p class="p-6 text-sm text-slate-500">"No reviews match these filters."</p>
                    </Show>
                    <For
                        each=move || vm.reviews.get()
                        key=|review| (review.id, review.status)
                        children=move |review| view! { <ModerationCard vm=vm review=review /> }
                    />
                </div>

                <ConfirmDialog
                    show=Signal::derive(move || vm.pending_delete.get().is_some())
                    title="Delete review".to_string()
                    message=Signal::derive(|| {
                        "This permanently removes the review and its responses.".to_string()
                    })
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </div>
        </Layout>
    }
}

#[component]
fn ModerationCard(vm: ModerationViewModel, review: ReviewResponse) -> impl IntoView {
    let review_id = review.id;
    let status = review.status;
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
                <div class="flex items-center gap-3">
                    <span class=status_badge_class(status)>{status.label()}</span>
                    <StarRating notation=review.notation />
                </div>
            </div>
            <p class="mt-3 text-slate-700">{review.content.clone()}</p>

            <div class="mt-4 flex gap-3">
                <button
                    class="py-1 px-3 rounded-md bg-green-600 text-white text-sm hover:bg-green-700"
                    on:click=move |_| vm.publish(review_id)
                >
                    "Publish"
                </button>
                <button
                    class="py-1 px-3 rounded-md bg-amber-600 text-white text-sm hover:bg-amber-700"
                    on:click=move |_| vm.reject(review_id)
                >
                    "Reject"
                </button>
                <button
                    class="py-1 px-3 rounded-md bg-red-600 text-white text-sm hover:bg-red-700"
                    on:click=move |_| vm.request_delete(review_id)
                >
                    "Delete"
                </button>
                <button
                    class="ml-auto text-sm text-sky-600 hover:underline"
                    on:click=move |_| vm.toggle_thread(review_id)
                >
                    {move || if vm.is_expanded(review_id) { "Hide responses" } else { "Responses" }}
                </button>
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
                                let response_id = item.id;
                                view! {
                                    <div class="bg-slate-50 rounded px-3 py-2 flex items-start justify-between">
                                        <div>
                                            <p class="text-xs font-medium text-slate-500">{item.author_name()}</p>
                                            <p class="text-sm text-slate-700">{item.content.clone()}</p>
                                        </div>
                                        <button
                                            class="text-xs text-red-600 hover:underline"
                                            on:click=move |_| vm.delete_response(review_id, response_id)
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view(),
                    }}

                    <div class="pt-2">
                        <Show
                            when=move || vm.draft_target.get() == Some(review_id)
                            fallback=move || view! {
                                <button
                                    class="text-sm text-sky-600 hover:underline"
                                    on:click=move |_| vm.start_response(review_id)
                                >
                                    "Respond"
                                </button>
                            }
                        >
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
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_moderation_filters() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminReviewsPage /> }
        });
        assert!(html.contains("Review moderation"));
        assert!(html.contains("All statuses"));
        assert!(html.contains("Pending"));
    }
}
