//! HTTP route handlers for the single-page app.
//!
//! The page shell is served from `/`; everything else is the small JSON API
//! the page drives. Storage failures surface as 500 with the error text,
//! unknown note ids as 404, malformed import files as 400.

use crate::models::Settings;
use crate::{exports, markdown, ops, store, templates, AppState};
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Page Shell
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let settings = match store::load_settings(&state.db) {
        Ok(s) => s,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    };

    Html(templates::app_page(&settings)).into_response()
}

// ============================================================================
// Note API
// ============================================================================

pub async fn list_notes(State(state): State<Arc<AppState>>) -> Response {
    match store::list_notes(&state.db) {
        Ok(notes) => Json(notes).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn create_note(State(state): State<Arc<AppState>>) -> Response {
    match ops::create_note(&state.db) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn get_note(Path(id): Path<u64>, State(state): State<Arc<AppState>>) -> Response {
    match store::get_note(&state.db, id) {
        Ok(Some(note)) => Json(note).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

#[derive(Deserialize)]
pub struct SaveNoteBody {
    pub content: String,
}

pub async fn save_note(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveNoteBody>,
) -> Response {
    // An explicit save supersedes whatever the debouncer still holds.
    state.autosave.cancel(id);

    match ops::save_note_content(&state.db, id, &body.content) {
        Ok(Some(note)) => Json(note).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn autosave_note(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveNoteBody>,
) -> Response {
    match store::get_note(&state.db, id) {
        Ok(Some(_)) => {}
        Ok(None) => return (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }

    state.autosave.schedule(&state.db, id, body.content);
    (StatusCode::ACCEPTED, "Queued").into_response()
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub selected: Option<u64>,
}

pub async fn delete_note(Path(id): Path<u64>, State(state): State<Arc<AppState>>) -> Response {
    match store::get_note(&state.db, id) {
        Ok(Some(_)) => {}
        Ok(None) => return (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }

    // A pending auto-save must not resurrect the note after the delete.
    state.autosave.cancel(id);

    match ops::delete_note(&state.db, id) {
        Ok(selected) => Json(DeleteResponse { selected }).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn toggle_pin(Path(id): Path<u64>, State(state): State<Arc<AppState>>) -> Response {
    match ops::toggle_pin(&state.db, id) {
        Ok(Some(note)) => Json(note).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn select_note(Path(id): Path<u64>, State(state): State<Arc<AppState>>) -> Response {
    match ops::select_note(&state.db, id) {
        Ok(Some(note)) => Json(note).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

#[derive(Serialize)]
pub struct SelectedResponse {
    pub selected: Option<u64>,
}

pub async fn selected(State(state): State<Arc<AppState>>) -> Response {
    match store::selected_note_id(&state.db) {
        Ok(selected) => Json(SelectedResponse { selected }).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

// ============================================================================
// Preview
// ============================================================================

#[derive(Deserialize)]
pub struct PreviewBody {
    pub content: String,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

pub async fn preview(Json(body): Json<PreviewBody>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        html: markdown::render_markdown(&body.content),
    })
}

// ============================================================================
// Export / Import
// ============================================================================

pub async fn export_all(State(state): State<Arc<AppState>>) -> Response {
    let bundle = match exports::export_bundle(&state.db) {
        Ok(b) => b,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    };

    let json = match serde_json::to_string_pretty(&bundle) {
        Ok(j) => j,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    let filename = exports::export_filename(Utc::now());
    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        json,
    )
        .into_response()
}

pub async fn export_note(Path(id): Path<u64>, State(state): State<Arc<AppState>>) -> Response {
    let note = match store::get_note(&state.db, id) {
        Ok(Some(n)) => n,
        Ok(None) => return (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    };

    let filename = exports::note_filename(&note.title, Utc::now());
    (
        [
            (
                header::CONTENT_TYPE,
                "text/markdown; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        note.content,
    )
        .into_response()
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

pub async fn import(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    // The page's file input uploads a single file; the first field wins.
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => return (StatusCode::BAD_REQUEST, "No file uploaded").into_response(),
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match exports::import_notes(&state.db, &data) {
        Ok(imported) => Json(ImportResponse { imported }).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

// ============================================================================
// Settings
// ============================================================================

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Response {
    match store::load_settings(&state.db) {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}

pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> Response {
    match store::save_settings(&state.db, settings) {
        Ok(stored) => Json(stored).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
    }
}
