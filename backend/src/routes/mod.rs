// src/routes/mod.rs

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppEnv;
use crate::cors::cors_layer;
use crate::db::DynDocumentStore;
use crate::records::DynStamper;

pub mod api;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub store: DynDocumentStore,
    pub stamper: DynStamper,
    pub env: AppEnv,
}

pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api", get(api::root))
        .route("/api/", get(api::root))
        .route(
            "/api/status",
            post(api::create_status_check).get(api::get_status_checks),
        )
        .route("/api/contact", post(api::create_contact))
        .route("/api/contacts", get(api::get_contacts))
        .route("/api/newsletter", post(api::subscribe_newsletter))
        .route("/api/testimonials", get(api::get_testimonials))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
