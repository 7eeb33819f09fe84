//! REST surface under `/api`.

mod error;
mod handlers;

pub use error::{ApiContext, ApiError, ApiErrorKind, ErrorBody};

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;
use warroom_core::Storage;

use handlers::*;

/// Shared by every handler. `user_id` stands in for authentication: every
/// request acts as this user.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub user_id: Uuid,
    /// Integration keys with credentials present, as reported to audits.
    pub integrations: Vec<String>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, user_id: Uuid) -> Self {
        Self {
            storage,
            user_id,
            integrations: Vec::new(),
        }
    }

    pub fn with_integrations(mut self, integrations: Vec<String>) -> Self {
        self.integrations = integrations;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(system::health))
        .route("/api/user", get(system::current_user))
        .route("/api/system/status", get(system::status))
        .route(
            "/api/contacts",
            get(contacts::list).post(contacts::create),
        )
        .route(
            "/api/contacts/{id}",
            get(contacts::get_one)
                .patch(contacts::update)
                .delete(contacts::delete),
        )
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_one).patch(tasks::update).delete(tasks::delete),
        )
        .route("/api/kpi-metrics", get(kpi::list).post(kpi::create))
        .route(
            "/api/calendar/events",
            get(calendar::list).post(calendar::create),
        )
        .route(
            "/api/calendar/events/{id}",
            get(calendar::get_one)
                .patch(calendar::update)
                .delete(calendar::delete),
        )
        .route("/api/ai-memory", get(memory::list).post(memory::create))
        .route("/api/ai-memory/search", get(memory::search))
        .route(
            "/api/workflows",
            get(workflows::list).post(workflows::create),
        )
        .route(
            "/api/workflows/{id}",
            get(workflows::get_one)
                .patch(workflows::update)
                .delete(workflows::delete),
        )
        .route("/api/chat/sessions", get(chat::list).post(chat::create))
        .route("/api/chat/sessions/{id}", get(chat::get_one))
        .route("/api/chat/sessions/{id}/messages", post(chat::append_message))
        .route(
            "/api/supersal/tasks",
            get(supersal::list).post(supersal::create),
        )
        .route(
            "/api/supersal/tasks/{id}",
            patch(supersal::update).delete(supersal::delete),
        )
        .route("/api/supersal/tasks/{id}/complete", post(supersal::complete))
        .route("/api/supersal/audit", post(supersal::audit))
        .route("/api/leads", get(leads::list))
        .route("/api/leads/search", post(leads::search))
        .route("/api/leads/campaigns", get(leads::campaigns))
        .route("/api/leads/{id}", get(leads::get_one))
        .route("/api/leads/{id}/enrich", post(leads::enrich))
        .route(
            "/api/sticky-notes",
            get(sticky_notes::list).post(sticky_notes::create),
        )
        .route(
            "/api/sticky-notes/{id}",
            get(sticky_notes::get_one)
                .patch(sticky_notes::update)
                .delete(sticky_notes::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
