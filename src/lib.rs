// src/lib.rs
//! Contact form validation: field rules, a headless form view and the JSON
//! endpoints that expose them.

pub mod common;
pub mod contact;
pub mod logging_middleware;

pub use common::{ApiError, ServerConfig, ValidationResult, Validator};
pub use contact::{validate_all, validate_field, ContactForm, ContactFormView, FormField};
