// src/contact/routes.rs

use axum::{routing::post, Router};

use super::handlers;

pub fn contact_routes() -> Router {
    Router::new()
        .route("/api/public/contact", post(handlers::submit_contact_form))
        .route(
            "/api/public/contact/validate",
            post(handlers::validate_contact_form),
        )
        .route(
            "/api/public/contact/fields/:field",
            post(handlers::validate_contact_field),
        )
}
