use crate::api::{
    ApiClient, ApiError, CreateResponseRequest, ResponseItem, ReviewQuery, ReviewResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ModerationRepository {
    client: Rc<ApiClient>,
}

impl ModerationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: ReviewQuery) -> Result<Vec<ReviewResponse>, ApiError> {
        self.client.list_reviews(&query).await
    }

    pub async fn companies(&self) -> Result<Vec<String>, ApiError> {
        self.client.list_companies().await
    }

    pub async fn publish(&self, review_id: i64) -> Result<ReviewResponse, ApiError> {
        self.client.publish_review(review_id).await
    }

    pub async fn reject(&self, review_id: i64) -> Result<ReviewResponse, ApiError> {
        self.client.reject_review(review_id).await
    }

    pub async fn delete(&self, review_id: i64) -> Result<(), ApiError> {
        self.client.delete_review(review_id).await
    }

    pub async fn list_responses(&self, review_id: i64) -> Result<Vec<ResponseItem>, ApiError> {
        self.client.list_responses(review_id).await
    }

    pub async fn add_response(
        &self,
        request: CreateResponseRequest,
    ) -> Result<ResponseItem, ApiError> {
        self.client.create_response(&request).await
    }

    pub async fn delete_response(&self, response_id: i64) -> Result<(), ApiError> {
        self.client.delete_response(response_id).await
    }
}
