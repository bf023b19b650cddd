use super::repository::ReviewsRepository;
use crate::api::{ApiClient, ApiError, CreateResponseRequest, ResponseItem, ReviewResponse};
use crate::state::responses::{prepare_response_payload, ResponseThreads};
use leptos::*;
use std::collections::HashSet;

#[derive(Clone, Copy)]
pub struct ReviewsViewModel {
    pub company: RwSignal<String>,
    pub applied_company: RwSignal<Option<String>>,
    pub reviews: Resource<Option<String>, Result<Vec<ReviewResponse>, ApiError>>,
    pub companies: Resource<(), Vec<String>>,
    pub threads: ResponseThreads,
    pub expanded: RwSignal<HashSet<i64>>,
    pub draft: RwSignal<String>,
    pub draft_target: RwSignal<Option<i64>>,
    pub draft_error: RwSignal<Option<ApiError>>,
    pub respond_action: Action<CreateResponseRequest, Result<ResponseItem, ApiError>>,
    load_action: Action<i64, Result<(i64, Vec<ResponseItem>), ApiError>>,
}

pub fn use_reviews_view_model() -> ReviewsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(ReviewsRepository::new(api));

    let company = create_rw_signal(String::new());
    let applied_company = create_rw_signal(None::<String>);

    let reviews = create_resource(
        move || applied_company.get(),
        move |company| {
            let repo = repository.get_value();
            async move { repo.list_published(company).await }
        },
    );

    let companies = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.companies().await.unwrap_or_default() }
        },
    );

    let threads = ResponseThreads::new();
    let expanded = create_rw_signal(HashSet::new());
    let draft = create_rw_signal(String::new());
    let draft_target = create_rw_signal(None::<i64>);
    let draft_error = create_rw_signal(None::<ApiError>);

    let load_action = create_action(move |review_id: &i64| {
        let repo = repository.get_value();
        let review_id = *review_id;
        async move {
            repo.list_responses(review_id)
                .await
                .map(|items| (review_id, items))
        }
    });

    create_effect(move |_| {
        if let Some(Ok((review_id, items))) = load_action.value().get() {
            threads.set_thread(review_id, items);
        }
    });

    let respond_action = create_action(move |request: &CreateResponseRequest| {
        let repo = repository.get_value();
        let request = request.clone();
        async move { repo.add_response(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = respond_action.value().get() {
            match result {
                Ok(item) => {
                    threads.append(item);
                    draft.set(String::new());
                    draft_target.set(None);
                    draft_error.set(None);
                }
                Err(err) => draft_error.set(Some(err)),
            }
        }
    });

    ReviewsViewModel {
        company,
        applied_company,
        reviews,
        companies,
        threads,
        expanded,
        draft,
        draft_target,
        draft_error,
        respond_action,
        load_action,
    }
}

impl ReviewsViewModel {
    pub fn search(&self) {
        let company = self.company.get_untracked();
        let trimmed = company.trim();
        self.applied_company.set(if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        });
    }

    /// Expands or collapses one review's thread. The thread is fetched on
    /// first expansion only; afterwards the cached copy is shown.
    pub fn toggle_thread(&self, review_id: i64) {
        let is_open = self.expanded.with_untracked(|open| open.contains(&review_id));
        if is_open {
            self.expanded.update(|open| {
                open.remove(&review_id);
            });
            return;
        }
        self.expanded.update(|open| {
            open.insert(review_id);
        });
        if !self.threads.is_loaded(review_id) {
            self.load_action.dispatch(review_id);
        }
    }

    pub fn is_expanded(&self, review_id: i64) -> bool {
        self.expanded.with(|open| open.contains(&review_id))
    }

    pub fn start_response(&self, review_id: i64) {
        self.draft_target.set(Some(review_id));
        self.draft.set(String::new());
        self.draft_error.set(None);
    }

    pub fn submit_response(&self, review_id: i64) {
        if self.respond_action.pending().get_untracked() {
            return;
        }
        match prepare_response_payload(review_id, &self.draft.get_untracked()) {
            Ok(payload) => {
                self.draft_error.set(None);
                self.respond_action.dispatch(payload);
            }
            Err(err) => self.draft_error.set(Some(err)),
        }
    }
}
