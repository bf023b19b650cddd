use crate::api::{ReviewQuery, ReviewStatus};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ModerationFilterState {
    pub status: RwSignal<String>,
    pub company: RwSignal<String>,
}

impl Default for ModerationFilterState {
    fn default() -> Self {
        Self {
            status: create_rw_signal(String::new()),
            company: create_rw_signal(String::new()),
        }
    }
}

impl ModerationFilterState {
    pub fn reset(&self) {
        self.status.set(String::new());
        self.company.set(String::new());
    }

    /// An empty or unknown status string means "all statuses".
    pub fn to_query(self) -> ReviewQuery {
        let company = self.company.get();
        let trimmed = company.trim();
        ReviewQuery {
            status: ReviewStatus::parse(&self.status.get()),
            company: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
            ..ReviewQuery::default()
        }
    }
}
