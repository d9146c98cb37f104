// Common module - shared types and utilities

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use helpers::{mask_emails_in_json, safe_email_log};
pub use validation::{ValidationResult, Validator};
