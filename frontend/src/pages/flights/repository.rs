use crate::api::{ApiClient, ApiError, FlightQuery, FlightResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct FlightsRepository {
    client: Rc<ApiClient>,
}

impl FlightsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: FlightQuery) -> Result<Vec<FlightResponse>, ApiError> {
        self.client.list_flights(&query).await
    }

    pub async fn companies(&self) -> Result<Vec<String>, ApiError> {
        self.client.list_companies().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::client::clear_session;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::{fresh_token, regular_user, seed_session};

    #[tokio::test]
    async fn flights_repository_calls_api() {
        seed_session(&fresh_token(), &regular_user());
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/flights");
            then.status(200).json_body(serde_json::json!([
                { "id": 1, "flightNumber": "AF123", "company": "Air France", "date": "2025-03-01" }
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/flights/companies");
            then.status(200)
                .json_body(serde_json::json!(["Air France", "KLM"]));
        });

        let repo = FlightsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let flights = repo.list(FlightQuery::default()).await.unwrap();
        assert_eq!(flights.len(), 1);
        let companies = repo.companies().await.unwrap();
        assert_eq!(companies, vec!["Air France", "KLM"]);
        clear_session();
    }
}
