use super::repository::ModerationRepository;
use super::utils::ModerationFilterState;
use crate::api::{
    ApiClient, ApiError, CreateResponseRequest, ResponseItem, ReviewQuery, ReviewResponse,
};
use crate::components::notify::use_notifier;
use crate::state::responses::{prepare_response_payload, ResponseThreads};
use leptos::*;
use std::collections::HashSet;

/// Replaces the local copy of a review with the backend-confirmed one.
/// Transitions resolve in request-completion order, so whichever action the
/// backend confirmed last wins. Unknown ids are ignored.
pub fn apply_review_update(reviews: &mut Vec<ReviewResponse>, updated: ReviewResponse) {
    if let Some(slot) = reviews.iter_mut().find(|review| review.id == updated.id) {
        *slot = updated;
    }
}

/// Removes a review after the backend confirmed its deletion.
pub fn apply_review_delete(reviews: &mut Vec<ReviewResponse>, review_id: i64) {
    reviews.retain(|review| review.id != review_id);
}

#[derive(Clone, Copy)]
pub struct ModerationViewModel {
    pub filter: ModerationFilterState,
    pub applied: RwSignal<ReviewQuery>,
    pub reviews: RwSignal<Vec<ReviewResponse>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub companies: Resource<(), Vec<String>>,
    pub threads: ResponseThreads,
    pub expanded: RwSignal<HashSet<i64>>,
    pub draft: RwSignal<String>,
    pub draft_target: RwSignal<Option<i64>>,
    pub draft_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub publish_action: Action<i64, Result<ReviewResponse, ApiError>>,
    pub reject_action: Action<i64, Result<ReviewResponse, ApiError>>,
    delete_action: Action<i64, Result<i64, ApiError>>,
    load_thread_action: Action<i64, Result<(i64, Vec<ResponseItem>), ApiError>>,
    respond_action: Action<CreateResponseRequest, Result<ResponseItem, ApiError>>,
    delete_response_action: Action<(i64, i64), Result<(i64, i64), ApiError>>,
    reload: RwSignal<u32>,
}

pub fn use_moderation_view_model() -> ModerationViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(ModerationRepository::new(api));
    let notifier = use_notifier();

    let filter = ModerationFilterState::default();
    let applied = create_rw_signal(ReviewQuery::default());
    let reviews = create_rw_signal(Vec::<ReviewResponse>::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);
    let reload = create_rw_signal(0u32);

    let listing = create_resource(
        move || (applied.get(), reload.get()),
        move |(query, _)| {
            let repo = repository.get_value();
            async move { repo.list(query).await }
        },
    );

    // The listing lands in a plain signal so moderation actions can patch
    // individual rows without refetching the whole page.
    create_effect(move |_| {
        match listing.get() {
            None => loading.set(true),
            Some(Ok(items)) => {
                loading.set(false);
                error.set(None);
                reviews.set(items);
            }
            Some(Err(err)) => {
                loading.set(false);
                error.set(Some(err));
            }
        }
    });

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
    let pending_delete = create_rw_signal(None::<i64>);

    let publish_action = create_action(move |review_id: &i64| {
        let repo = repository.get_value();
        let review_id = *review_id;
        async move { repo.publish(review_id).await }
    });
    let reject_action = create_action(move |review_id: &i64| {
        let repo = repository.get_value();
        let review_id = *review_id;
        async move { repo.reject(review_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = publish_action.value().get() {
            match result {
                Ok(updated) => reviews.update(|items| apply_review_update(items, updated)),
                Err(err) => notifier.error(err.to_string()),
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = reject_action.value().get() {
            match result {
                Ok(updated) => reviews.update(|items| apply_review_update(items, updated)),
                Err(err) => notifier.error(err.to_string()),
            }
        }
    });

    let delete_action = create_action(move |review_id: &i64| {
        let repo = repository.get_value();
        let review_id = *review_id;
        async move { repo.delete(review_id).await.map(|_| review_id) }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(review_id) => {
                    reviews.update(|items| apply_review_delete(items, review_id));
                    threads.forget(review_id);
                    notifier.success("Review deleted.");
                }
                Err(err) => notifier.error(err.to_string()),
            }
        }
    });

    let load_thread_action = create_action(move |review_id: &i64| {
        let repo = repository.get_value();
        let review_id = *review_id;
        async move {
            repo.list_responses(review_id)
                .await
                .map(|items| (review_id, items))
        }
    });

    create_effect(move |_| {
        if let Some(Ok((review_id, items))) = load_thread_action.value().get() {
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

    let delete_response_action = create_action(move |ids: &(i64, i64)| {
        let repo = repository.get_value();
        let (review_id, response_id) = *ids;
        async move {
            repo.delete_response(response_id)
                .await
                .map(|_| (review_id, response_id))
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_response_action.value().get() {
            match result {
                Ok((review_id, response_id)) => threads.remove(review_id, response_id),
                Err(err) => notifier.error(err.to_string()),
            }
        }
    });

    ModerationViewModel {
        filter,
        applied,
        reviews,
        loading,
        error,
        companies,
        threads,
        expanded,
        draft,
        draft_target,
        draft_error,
        pending_delete,
        publish_action,
        reject_action,
        delete_action,
        load_thread_action,
        respond_action,
        delete_response_action,
        reload,
    }
}

impl ModerationViewModel {
    pub fn search(&self) {
        self.applied.set(self.filter.to_query());
    }

    pub fn clear(&self) {
        self.filter.reset();
        self.applied.set(ReviewQuery::default());
    }

    pub fn refresh(&self) {
        self.reload.update(|count| *count = count.wrapping_add(1));
    }

    /// Publish and reject are re-enterable from any status; the backend is
    /// the authority and the row is patched with whatever it returns.
    pub fn publish(&self, review_id: i64) {
        self.publish_action.dispatch(review_id);
    }

    pub fn reject(&self, review_id: i64) {
        self.reject_action.dispatch(review_id);
    }

    pub fn request_delete(&self, review_id: i64) {
        self.pending_delete.set(Some(review_id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Only fires once a delete was requested and confirmed.
    pub fn confirm_delete(&self) {
        if let Some(review_id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(review_id);
        }
    }

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
            self.load_thread_action.dispatch(review_id);
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

    pub fn delete_response(&self, review_id: i64, response_id: i64) {
        self.delete_response_action.dispatch((review_id, response_id));
    }
}
