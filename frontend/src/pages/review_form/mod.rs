mod panel;
pub mod repository;
mod utils;
mod view_model;

pub use panel::ReviewFormPage;
