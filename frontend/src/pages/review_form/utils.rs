use crate::api::{ApiError, CreateReviewRequest};
use leptos::*;

pub const REVIEW_MIN_LEN: usize = 10;
pub const REVIEW_MAX_LEN: usize = 500;

#[derive(Clone, Copy)]
pub struct ReviewFormState {
    pub notation: RwSignal<i32>,
    pub content: RwSignal<String>,
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self {
            notation: create_rw_signal(0),
            content: create_rw_signal(String::new()),
        }
    }
}

impl ReviewFormState {
    pub fn reset(&self) {
        self.notation.set(0);
        self.content.set(String::new());
    }

    pub fn to_payload(self, flight_id: i64) -> Result<CreateReviewRequest, ApiError> {
        let notation = self.notation.get();
        if !(1..=5).contains(&notation) {
            return Err(ApiError::validation("Pick a rating between 1 and 5 stars."));
        }
        let content = self.content.get();
        let length = content.chars().count();
        if length < REVIEW_MIN_LEN || length > REVIEW_MAX_LEN {
            return Err(ApiError::validation(format!(
                "Reviews must be between {} and {} characters.",
                REVIEW_MIN_LEN, REVIEW_MAX_LEN
            )));
        }
        Ok(CreateReviewRequest {
            content,
            notation,
            flight_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn rejects_missing_rating() {
        with_runtime(|| {
            let form = ReviewFormState::default();
            form.content.set("A perfectly pleasant trip.".into());
            assert!(form.to_payload(1).unwrap_err().is_validation());
        });
    }

    #[test]
    fn rejects_out_of_range_rating() {
        with_runtime(|| {
            let form = ReviewFormState::default();
            form.notation.set(6);
            form.content.set("A perfectly pleasant trip.".into());
            assert!(form.to_payload(1).unwrap_err().is_validation());
        });
    }

    #[test]
    fn enforces_content_length_in_characters() {
        with_runtime(|| {
            let form = ReviewFormState::default();
            form.notation.set(4);
            form.content.set("trop tôt".into());
            assert!(form.to_payload(1).unwrap_err().is_validation());

            form.content.set("é".repeat(REVIEW_MIN_LEN));
            assert!(form.to_payload(1).is_ok());

            form.content.set("a".repeat(REVIEW_MAX_LEN + 1));
            assert!(form.to_payload(1).unwrap_err().is_validation());
        });
    }

    #[test]
    fn builds_payload_for_the_flight() {
        with_runtime(|| {
            let form = ReviewFormState::default();
            form.notation.set(5);
            form.content.set("Smooth boarding and a quiet cabin.".into());
            let payload = form.to_payload(42).unwrap();
            assert_eq!(payload.flight_id, 42);
            assert_eq!(payload.notation, 5);
        });
    }
}
