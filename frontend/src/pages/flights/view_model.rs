use super::repository::FlightsRepository;
use super::utils::FlightFilterState;
use crate::api::{ApiClient, ApiError, FlightQuery, FlightResponse};
use leptos::*;

#[derive(Clone, Copy)]
pub struct FlightsViewModel {
    pub filter: FlightFilterState,
    pub applied: RwSignal<FlightQuery>,
    pub flights: Resource<FlightQuery, Result<Vec<FlightResponse>, ApiError>>,
    pub companies: Resource<(), Vec<String>>,
    pub error: RwSignal<Option<ApiError>>,
}

pub fn use_flights_view_model() -> FlightsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(FlightsRepository::new(api));

    let filter = FlightFilterState::default();
    let applied = create_rw_signal(FlightQuery::default());
    let error = create_rw_signal(None::<ApiError>);

    let flights = create_resource(
        move || applied.get(),
        move |query| {
            let repo = repository.get_value();
            async move { repo.list(query).await }
        },
    );

    let companies = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.companies().await.unwrap_or_default() }
        },
    );

    FlightsViewModel {
        filter,
        applied,
        flights,
        companies,
        error,
    }
}

impl FlightsViewModel {
    pub fn search(&self) {
        match self.filter.to_query() {
            Ok(query) => {
                self.error.set(None);
                self.applied.set(query);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn clear(&self) {
        self.filter.reset();
        self.error.set(None);
        self.applied.set(FlightQuery::default());
    }
}
