use crate::api::{ApiError, CreateResponseRequest, ResponseItem};
use leptos::*;
use std::collections::HashMap;

pub const RESPONSE_MIN_LEN: usize = 5;
pub const RESPONSE_MAX_LEN: usize = 300;

/// Local length check run before any network call.
pub fn validate_response_content(content: &str) -> Result<(), ApiError> {
    let len = content.chars().count();
    if len < RESPONSE_MIN_LEN {
        return Err(ApiError::validation(format!(
            "Responses must be at least {} characters long.",
            RESPONSE_MIN_LEN
        )));
    }
    if len > RESPONSE_MAX_LEN {
        return Err(ApiError::validation(format!(
            "Responses must be at most {} characters long.",
            RESPONSE_MAX_LEN
        )));
    }
    Ok(())
}

/// Validated payload builder; callers only dispatch the request when this
/// returns `Ok`.
pub fn prepare_response_payload(
    review_id: i64,
    content: &str,
) -> Result<CreateResponseRequest, ApiError> {
    validate_response_content(content)?;
    Ok(CreateResponseRequest {
        content: content.to_string(),
        review_id,
    })
}

/// Per-view cache of response threads keyed by review id.
///
/// An absent key means the thread was never fetched; an empty vec means the
/// backend answered with no responses. Threads are fetched at most once per
/// view lifetime and new responses are appended only after the backend
/// confirms them.
#[derive(Clone, Copy)]
pub struct ResponseThreads {
    threads: RwSignal<HashMap<i64, Vec<ResponseItem>>>,
}

impl Default for ResponseThreads {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseThreads {
    pub fn new() -> Self {
        Self {
            threads: create_rw_signal(HashMap::new()),
        }
    }

    pub fn is_loaded(&self, review_id: i64) -> bool {
        self.threads.with(|threads| threads.contains_key(&review_id))
    }

    pub fn get(&self, review_id: i64) -> Option<Vec<ResponseItem>> {
        self.threads
            .with(|threads| threads.get(&review_id).cloned())
    }

    pub fn set_thread(&self, review_id: i64, items: Vec<ResponseItem>) {
        self.threads.update(|threads| {
            threads.insert(review_id, items);
        });
    }

    pub fn append(&self, item: ResponseItem) {
        self.threads.update(|threads| {
            threads.entry(item.review_id).or_default().push(item);
        });
    }

    pub fn remove(&self, review_id: i64, response_id: i64) {
        self.threads.update(|threads| {
            if let Some(items) = threads.get_mut(&review_id) {
                items.retain(|item| item.id != response_id);
            }
        });
    }

    /// Drops a whole thread, e.g. after its review was deleted.
    pub fn forget(&self, review_id: i64) {
        self.threads.update(|threads| {
            threads.remove(&review_id);
        });
    }
}
