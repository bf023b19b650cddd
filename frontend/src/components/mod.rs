pub mod common;
pub mod confirm_dialog;
pub mod guard;
pub mod layout;
pub mod notify;
