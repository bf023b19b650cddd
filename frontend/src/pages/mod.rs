pub mod admin;
pub mod admin_reviews;
pub mod flight_manager;
pub mod flights;
pub mod landing;
pub mod login;
pub mod review_form;
pub mod reviews;
pub mod signup;
