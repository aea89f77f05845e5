pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction_handlers;
use crate::render::handlers as render_handlers;
use crate::rewrite;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle and manual edits
        .route(
            "/api/v1/sessions",
            post(session_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session_handlers::handle_get_session)
                .patch(session_handlers::handle_update_session)
                .delete(session_handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/photo",
            post(session_handlers::handle_upload_photo)
                .delete(session_handlers::handle_delete_photo),
        )
        // Collaborator-backed operations
        .route(
            "/api/v1/sessions/:id/import",
            post(extraction_handlers::handle_import),
        )
        .route("/api/v1/sessions/:id/rewrite", post(rewrite::handle_rewrite))
        // Rendering core surface
        .route(
            "/api/v1/sessions/:id/preview",
            get(render_handlers::handle_preview),
        )
        .route(
            "/api/v1/sessions/:id/export",
            get(render_handlers::handle_export),
        )
        .with_state(state)
}
