// src/contact/mod.rs

pub mod handlers;
pub mod models;
pub mod presentation;
pub mod routes;
pub mod validators;


// Re-export commonly used items
pub use models::*;
pub use presentation::{ContactFormView, RenderedForm};
pub use routes::contact_routes;
pub use validators::{validate_all, validate_field, ContactFormValidator};
