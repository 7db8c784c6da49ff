//! Request and response bodies

pub mod auth;
pub mod content;

pub use catalog_shared::{ErrorResponse, MessageResponse};
