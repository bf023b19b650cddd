use super::repository::FlightManagerRepository;
use super::utils::FlightFormState;
use crate::api::{ApiClient, ApiError, FlightRequest, FlightResponse};
use crate::components::notify::use_notifier;
use leptos::*;

/// Inserts a created flight or replaces the edited one. New rows land at
/// the end of the listing until the next reload.
pub fn apply_flight_saved(flights: &mut Vec<FlightResponse>, saved: FlightResponse) {
    match flights.iter_mut().find(|flight| flight.id == saved.id) {
        Some(slot) => *slot = saved,
        None => flights.push(saved),
    }
}

pub fn apply_flight_delete(flights: &mut Vec<FlightResponse>, flight_id: i64) {
    flights.retain(|flight| flight.id != flight_id);
}

#[derive(Clone)]
pub struct SaveRequest {
    pub id: Option<i64>,
    pub payload: FlightRequest,
}

#[derive(Clone, Copy)]
pub struct FlightManagerViewModel {
    pub form: FlightFormState,
    pub dialog_open: RwSignal<bool>,
    pub flights: RwSignal<Vec<FlightResponse>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub save_action: Action<SaveRequest, Result<FlightResponse, ApiError>>,
    delete_action: Action<i64, Result<i64, ApiError>>,
    reload: RwSignal<u32>,
}

pub fn use_flight_manager_view_model() -> FlightManagerViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(FlightManagerRepository::new(api));
    let notifier = use_notifier();

    let form = FlightFormState::default();
    let dialog_open = create_rw_signal(false);
    let flights = create_rw_signal(Vec::<FlightResponse>::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);
    let form_error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<i64>);
    let reload = create_rw_signal(0u32);

    let listing = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list().await }
        },
    );

    create_effect(move |_| {
        match listing.get() {
            None => loading.set(true),
            Some(Ok(items)) => {
                loading.set(false);
                error.set(None);
                flights.set(items);
            }
            Some(Err(err)) => {
                loading.set(false);
                error.set(Some(err));
            }
        }
    });

    let save_action = create_action(move |request: &SaveRequest| {
        let repo = repository.get_value();
        let request = request.clone();
        async move {
            match request.id {
                Some(id) => repo.update(id, request.payload).await,
                None => repo.create(request.payload).await,
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    flights.update(|items| apply_flight_saved(items, saved));
                    form.reset();
                    form_error.set(None);
                    dialog_open.set(false);
                    notifier.success("Flight saved.");
                }
                Err(err) => form_error.set(Some(err)),
            }
        }
    });

    let delete_action = create_action(move |flight_id: &i64| {
        let repo = repository.get_value();
        let flight_id = *flight_id;
        async move { repo.delete(flight_id).await.map(|_| flight_id) }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(flight_id) => {
                    flights.update(|items| apply_flight_delete(items, flight_id));
                    notifier.success("Flight deleted.");
                }
                Err(err) => notifier.error(err.to_string()),
            }
        }
    });

    FlightManagerViewModel {
        form,
        dialog_open,
        flights,
        loading,
        error,
        form_error,
        pending_delete,
        save_action,
        delete_action,
        reload,
    }
}

impl FlightManagerViewModel {
    pub fn refresh(&self) {
        self.reload.update(|count| *count = count.wrapping_add(1));
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, flight: &FlightResponse) {
        self.form.load_from(flight);
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
        self.form.reset();
        self.form_error.set(None);
    }

    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.form_error.set(None);
                self.save_action.dispatch(SaveRequest {
                    id: self.form.editing_id.get_untracked(),
                    payload,
                });
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn request_delete(&self, flight_id: i64) {
        self.pending_delete.set(Some(flight_id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(flight_id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(flight_id);
        }
    }
}
