use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error surfaced to views. `error` is the human-readable message; `code`
/// classifies it (VALIDATION, UNAUTHORIZED, NETWORK, NOT_FOUND, SERVER,
/// UNKNOWN) and `details` carries any structured payload the backend sent.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn with_code(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Some(code.to_string()),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_code("VALIDATION", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_code("UNAUTHORIZED", message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_code("NETWORK", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code("NOT_FOUND", message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_code("SERVER", message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::with_code("UNKNOWN", message)
    }

    pub fn is_validation(&self) -> bool {
        self.code.as_deref() == Some("VALIDATION")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code.as_deref() == Some("UNAUTHORIZED")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Published,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Published => "PUBLISHED",
            ReviewStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(ReviewStatus::Pending),
            "PUBLISHED" => Some(ReviewStatus::Published),
            "REJECTED" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Published => "Published",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl UserResponse {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub id: i64,
    pub flight_number: String,
    pub company: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    pub flight_number: String,
    pub company: String,
    pub date: NaiveDate,
}

/// Client-side filter for `GET /flights`. Dates are sent as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightQuery {
    pub company: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FlightQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(company) = &self.company {
            pairs.push(("company", company.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub content: String,
    pub notation: i32,
    pub status: ReviewStatus,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub account_first_name: Option<String>,
    #[serde(default)]
    pub account_last_name: Option<String>,
}

impl ReviewResponse {
    /// Author display name assembled from the optional account fields.
    pub fn author_name(&self) -> Option<String> {
        match (&self.account_first_name, &self.account_last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub content: String,
    pub notation: i32,
    pub flight_id: i64,
}

/// Client-side filter for `GET /reviews`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub company: Option<String>,
    pub account_id: Option<i64>,
    pub notation: Option<i32>,
    pub status: Option<ReviewStatus>,
}

impl ReviewQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(company) = &self.company {
            pairs.push(("company", company.clone()));
        }
        if let Some(account_id) = self.account_id {
            pairs.push(("accountId", account_id.to_string()));
        }
        if let Some(notation) = self.notation {
            pairs.push(("notation", notation.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub id: i64,
    pub content: String,
    pub review_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_first_name: Option<String>,
    #[serde(default)]
    pub user_last_name: Option<String>,
}

impl ResponseItem {
    pub fn author_name(&self) -> Option<String> {
        match (&self.user_first_name, &self.user_last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponseRequest {
    pub content: String,
    pub review_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_deserializes_admin_listing_payload() {
        let review: ReviewResponse = serde_json::from_str(
            r#"{
                "id": 42,
                "content": "Smooth flight, friendly crew.",
                "notation": 4,
                "status": "PENDING",
                "flightNumber": "AF123",
                "company": "Air France",
                "accountFirstName": "Jean",
                "accountLastName": "Dupont"
            }"#,
        )
        .unwrap();
        assert_eq!(review.id, 42);
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.author_name().as_deref(), Some("Jean Dupont"));
    }

    #[test]
    fn review_deserializes_public_payload_without_account_fields() {
        let review: ReviewResponse = serde_json::from_str(
            r#"{"id": 7, "content": "ok", "notation": 3, "status": "PUBLISHED"}"#,
        )
        .unwrap();
        assert!(review.author_name().is_none());
        assert_eq!(review.status, ReviewStatus::Published);
    }

    #[test]
    fn status_round_trips_wire_values() {
        for (status, wire) in [
            (ReviewStatus::Pending, "PENDING"),
            (ReviewStatus::Published, "PUBLISHED"),
            (ReviewStatus::Rejected, "REJECTED"),
        ] {
            assert_eq!(status.as_str(), wire);
            assert_eq!(ReviewStatus::parse(wire), Some(status));
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", wire));
        }
        assert!(ReviewStatus::parse("TRAITE").is_none());
    }

    #[test]
    fn role_uses_uppercase_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn flight_query_builds_camel_case_pairs() {
        let query = FlightQuery {
            company: Some("KLM".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: None,
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![("company", "KLM".to_string()), ("startDate", "2025-03-01".to_string())]
        );
        assert!(FlightQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn review_query_includes_status_wire_value() {
        let query = ReviewQuery {
            status: Some(ReviewStatus::Published),
            ..Default::default()
        };
        assert_eq!(query.to_query_pairs(), vec![("status", "PUBLISHED".to_string())]);
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert!(ApiError::validation("too short").is_validation());
        assert!(ApiError::unauthorized("expired").is_unauthorized());
        assert_eq!(ApiError::network("offline").code.as_deref(), Some("NETWORK"));
        assert_eq!(ApiError::not_found("gone").to_string(), "gone");
    }

    #[test]
    fn api_error_parses_backend_body() {
        let err: ApiError = serde_json::from_str(
            r#"{"error": "Notation must be between 1 and 5", "code": "VALIDATION", "details": {"field": "notation"}}"#,
        )
        .unwrap();
        assert!(err.is_validation());
        assert_eq!(err.details.unwrap()["field"], "notation");
    }
}
