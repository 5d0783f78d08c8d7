// src/routes/api.rs
//
// Handlers for the /api endpoints. Request bodies are shape-checked by the
// `Json` extractor before any handler code runs.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::records::{
    service, testimonials, ContactForm, ContactFormCreate, NewsletterSubscriptionCreate,
    StatusCheck, StatusCheckCreate, SubscribeOutcome, Testimonial,
};
use crate::routes::AppState;

/// GET /api/ (and /api)
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let record =
        service::create_status(state.store.as_ref(), state.stamper.as_ref(), input).await?;
    Ok(Json(record))
}

/// GET /api/status
pub async fn get_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(service::list_statuses(state.store.as_ref()).await?))
}

/// POST /api/contact
pub async fn create_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactFormCreate>,
) -> Result<Json<ContactForm>, ApiError> {
    let record =
        service::create_contact(state.store.as_ref(), state.stamper.as_ref(), input).await?;
    Ok(Json(record))
}

/// GET /api/contacts
pub async fn get_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactForm>>, ApiError> {
    Ok(Json(service::list_contacts(state.store.as_ref()).await?))
}

/// POST /api/newsletter
///
/// Returns the new subscription, or `{"message": "Email already subscribed"}`
/// when the email is already on file.
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(input): Json<NewsletterSubscriptionCreate>,
) -> Result<Json<SubscribeOutcome>, ApiError> {
    let outcome = service::subscribe(state.store.as_ref(), state.stamper.as_ref(), input).await?;
    Ok(Json(outcome))
}

/// GET /api/testimonials
pub async fn get_testimonials() -> Json<&'static [Testimonial]> {
    Json(testimonials::list_testimonials())
}

// ----------------------------
// Tests
// ----------------------------
