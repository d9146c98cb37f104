// src/contact/handlers.rs
//! Contact form endpoints - validation only, nothing is stored or forwarded

use axum::{extract::Path, Json};
use tracing::{debug, info};

use super::models::*;
use super::validators::{validate_field, ContactFormValidator};
use crate::common::{safe_email_log, ApiError, ValidationResult, Validator};

/// POST /api/public/contact/validate - Validate every field of the form
pub async fn validate_contact_form(Json(form): Json<ContactForm>) -> Json<ValidationResult> {
    let result = ContactFormValidator.validate(&form);
    debug!(
        is_valid = result.is_valid,
        errors = result.error_count(),
        "Validated contact form"
    );
    Json(result)
}

/// POST /api/public/contact/fields/:field - Validate a single field
pub async fn validate_contact_field(
    Path(field): Path<String>,
    Json(request): Json<FieldValueRequest>,
) -> Result<Json<FieldValidationResponse>, ApiError> {
    let field: FormField = field
        .parse()
        .map_err(|e: UnknownFieldError| ApiError::NotFound(e.to_string()))?;

    let error = validate_field(field, &request.value);
    Ok(Json(FieldValidationResponse {
        field,
        valid: error.is_none(),
        error: error.map(str::to_string),
    }))
}

/// POST /api/public/contact - Submit contact form (public endpoint)
pub async fn submit_contact_form(
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactSubmissionResponse>, ApiError> {
    let result = ContactFormValidator.validate(&form);
    if !result.is_valid {
        debug!(errors = result.error_count(), "Contact form rejected");
        return Err(result.into());
    }

    info!(
        first_name = %form.first_name,
        email = %safe_email_log(&form.email),
        "Contact form accepted"
    );

    Ok(Json(ContactSubmissionResponse {
        success: true,
        message: format!("Thank you, {}!", form.first_name.trim()),
        submitted: form,
    }))
}
