use super::{
    client::ApiClient,
    types::{ApiError, FlightQuery, FlightRequest, FlightResponse},
};

impl ApiClient {
    pub async fn list_flights(&self, query: &FlightQuery) -> Result<Vec<FlightResponse>, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .get(format!("{}/flights", base_url))
            .headers(headers);
        let params = query.to_query_pairs();
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::expect_json(self.send(request).await?).await
    }

    pub async fn get_flight(&self, id: i64) -> Result<FlightResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/flights/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn create_flight(&self, payload: &FlightRequest) -> Result<FlightResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/flights", base_url))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn update_flight(
        &self,
        id: i64,
        payload: &FlightRequest,
    ) -> Result<FlightResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/flights/{}", base_url, id))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_flight(&self, id: i64) -> Result<(), ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/flights/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_unit(response).await
    }

    /// Reachable anonymously so the public review wall can offer the
    /// airline filter without a session.
    pub async fn list_companies(&self) -> Result<Vec<String>, ApiError> {
        let headers = Self::optional_auth_headers();
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/flights/companies", base_url))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn flight_count(&self) -> Result<i64, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/flights/count", base_url))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn company_count(&self) -> Result<i64, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/flights/companies/count", base_url))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }
}
