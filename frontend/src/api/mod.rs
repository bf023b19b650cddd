mod auth;
pub mod client;
mod flights;
mod responses;
mod reviews;
pub mod test_support;
pub mod types;


pub use client::ApiClient;
pub use types::{
    ApiError, CreateResponseRequest, CreateReviewRequest, FlightQuery, FlightRequest,
    FlightResponse, LoginRequest, LoginResponse, RegisterRequest, ResponseItem, ReviewQuery,
    ReviewResponse, ReviewStatus, Role, UserResponse,
};
