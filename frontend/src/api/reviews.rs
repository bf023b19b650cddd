use super::{
    client::ApiClient,
    types::{ApiError, CreateReviewRequest, ReviewQuery, ReviewResponse},
};

impl ApiClient {
    /// Listing is reachable anonymously (the public reviews page); the token
    /// is attached when present so admin listings carry account fields.
    pub async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<ReviewResponse>, ApiError> {
        let headers = Self::optional_auth_headers();
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .get(format!("{}/reviews", base_url))
            .headers(headers);
        let params = query.to_query_pairs();
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::expect_json(self.send(request).await?).await
    }

    pub async fn create_review(
        &self,
        payload: &CreateReviewRequest,
    ) -> Result<ReviewResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/reviews", base_url))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        Self::expect_json(response).await
    }

    /// Moderation transitions return the updated record so the caller can
    /// replace its local copy by id.
    pub async fn publish_review(&self, id: i64) -> Result<ReviewResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/reviews/{}/publish", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn reject_review(&self, id: i64) -> Result<ReviewResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/reviews/{}/reject", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/reviews/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        Self::expect_unit(response).await
    }

    pub async fn review_count(&self) -> Result<i64, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/reviews/count", base_url))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }
}
