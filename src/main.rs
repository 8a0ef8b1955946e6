//! Markdown notes application - offline-first note taking in the browser.
//!
//! This is the main entry point for the local notes server.
//! The application is organized into the following modules:
//!
//! - `models`: Data structures for notes, preferences, and export bundles
//! - `store`: Sled-backed persistence (notes, selection pointer, settings)
//! - `ops`: Note operations and startup bootstrap
//! - `autosave`: Debounced auto-save
//! - `markdown`: Markdown rendering for the preview pane
//! - `exports`: JSON bundle export/import and markdown downloads
//! - `templates`: The single-page UI shell
//! - `handlers`: HTTP route handlers

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use mdnotes::{handlers, AppState, DEFAULT_ADDR};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdnotes=info".into()),
        )
        .init();

    let state = Arc::new(AppState::new());

    let app = Router::new()
        // Page shell
        .route("/", get(handlers::index))
        // Note API
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/note/{id}",
            get(handlers::get_note)
                .post(handlers::save_note)
                .delete(handlers::delete_note),
        )
        .route("/api/note/{id}/autosave", post(handlers::autosave_note))
        .route("/api/note/{id}/pin", post(handlers::toggle_pin))
        .route("/api/note/{id}/select", post(handlers::select_note))
        .route("/api/selected", get(handlers::selected))
        .route("/api/preview", post(handlers::preview))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        // Downloads
        .route("/export", get(handlers::export_all))
        .route("/note/{id}/export", get(handlers::export_note))
        .route("/import", post(handlers::import))
        .with_state(state);

    let addr = std::env::var("MDNOTES_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(%addr, "markdown notes running");

    axum::serve(listener, app).await.expect("Server error");
}
