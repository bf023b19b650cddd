use crate::api::{ApiClient, ApiError, FlightQuery, FlightRequest, FlightResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct FlightManagerRepository {
    client: Rc<ApiClient>,
}

impl FlightManagerRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<FlightResponse>, ApiError> {
        self.client.list_flights(&FlightQuery::default()).await
    }

    pub async fn create(&self, request: FlightRequest) -> Result<FlightResponse, ApiError> {
        self.client.create_flight(&request).await
    }

    pub async fn update(
        &self,
        flight_id: i64,
        request: FlightRequest,
    ) -> Result<FlightResponse, ApiError> {
        self.client.update_flight(flight_id, &request).await
    }

    pub async fn delete(&self, flight_id: i64) -> Result<(), ApiError> {
        self.client.delete_flight(flight_id).await
    }
}
