use super::repository::ReviewFormRepository;
use super::utils::ReviewFormState;
use crate::api::{ApiClient, ApiError, CreateReviewRequest, FlightResponse, ReviewResponse};
use crate::components::notify::use_notifier;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReviewFormViewModel {
    pub form: ReviewFormState,
    pub flight: Resource<Option<i64>, Option<Result<FlightResponse, ApiError>>>,
    pub error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<CreateReviewRequest, Result<ReviewResponse, ApiError>>,
}

pub fn use_review_form_view_model(
    flight_id: Signal<Option<i64>>,
) -> ReviewFormViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(ReviewFormRepository::new(api));

    let form = ReviewFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let notifier = use_notifier();

    let flight = create_resource(
        move || flight_id.get(),
        move |id| {
            let repo = repository.get_value();
            async move {
                match id {
                    Some(id) => Some(repo.load_flight(id).await),
                    None => None,
                }
            }
        },
    );

    let submit_action = create_action(move |request: &CreateReviewRequest| {
        let repo = repository.get_value();
        let request = request.clone();
        async move { repo.submit(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    form.reset();
                    notifier.success("Review submitted. It will appear once published.");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/landing");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    // An unloadable flight means a stale or mistyped URL. Back to the picker.
    create_effect(move |_| {
        if let Some(Some(Err(_))) = flight.get() {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/make-review");
            }
        }
    });

    ReviewFormViewModel {
        form,
        flight,
        error,
        submit_action,
    }
}

impl ReviewFormViewModel {
    pub fn submit(&self, flight_id: i64) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload(flight_id) {
            Ok(payload) => {
                self.error.set(None);
                self.submit_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn submit_with_invalid_form_sets_local_error() {
        with_runtime(|| {
            let vm = use_review_form_view_model(Signal::derive(|| Some(1)));
            vm.submit(1);
            assert!(vm.error.get_untracked().is_some());
            assert!(vm.submit_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn valid_form_clears_previous_error() {
        with_runtime(|| {
            let vm = use_review_form_view_model(Signal::derive(|| Some(1)));
            vm.error.set(Some(ApiError::validation("old")));
            vm.form.notation.set(4);
            vm.form.content.set("Friendly crew, decent legroom.".into());
            assert!(vm.form.to_payload(1).is_ok());
        });
    }
}
