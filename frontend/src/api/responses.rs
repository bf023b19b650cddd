use super::{
    client::ApiClient,
    types::{ApiError, CreateResponseRequest, ResponseItem},
};

impl ApiClient {
    pub async fn create_response(
        &self,
        payload: &CreateResponseRequest,
    ) -> Result<ResponseItem, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/responses", base_url))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn list_responses(&self, review_id: i64) -> Result<Vec<ResponseItem>, ApiError> {
        let headers = Self::optional_auth_headers();
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/responses/review/{}", base_url, review_id))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_response(&self, id: i64) -> Result<(), ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/responses/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_unit(response).await
    }
}
