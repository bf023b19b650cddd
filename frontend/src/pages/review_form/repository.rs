use crate::api::{ApiClient, ApiError, CreateReviewRequest, FlightResponse, ReviewResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ReviewFormRepository {
    client: Rc<ApiClient>,
}

impl ReviewFormRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load_flight(&self, flight_id: i64) -> Result<FlightResponse, ApiError> {
        self.client.get_flight(flight_id).await
    }

    pub async fn submit(&self, request: CreateReviewRequest) -> Result<ReviewResponse, ApiError> {
        self.client.create_review(&request).await
    }
}
