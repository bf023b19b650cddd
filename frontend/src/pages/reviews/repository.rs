use crate::api::{
    ApiClient, ApiError, CreateResponseRequest, ResponseItem, ReviewQuery, ReviewResponse,
    ReviewStatus,
};
use std::rc::Rc;

/// Read side of the public review wall. Listing never requires a session;
/// posting a response does and goes through the authenticated path.
#[derive(Clone)]
pub struct ReviewsRepository {
    client: Rc<ApiClient>,
}

impl ReviewsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_published(
        &self,
        company: Option<String>,
    ) -> Result<Vec<ReviewResponse>, ApiError> {
        let query = ReviewQuery {
            status: Some(ReviewStatus::Published),
            company,
            ..ReviewQuery::default()
        };
        self.client.list_reviews(&query).await
    }

    pub async fn companies(&self) -> Result<Vec<String>, ApiError> {
        self.client.list_companies().await
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
}
