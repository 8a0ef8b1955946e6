//! Markdown notes library - re-exports for testing and external use.
//!
//! This module provides public access to the application's modules:
//!
//! - `models`: note record, preferences, export/import bundle shapes
//! - `store`: sled-backed persistence for notes, selection, and preferences
//! - `ops`: note operations (create, select, save, pin, delete, bootstrap)
//! - `autosave`: the 1-second auto-save debouncer
//! - `markdown`: preview rendering
//! - `exports`: bundle export/import and download filenames
//! - `handlers`: HTTP route handlers
//! - `templates`: the single-page UI shell

use sled::Db;

pub mod autosave;
pub mod exports;
pub mod handlers;
pub mod markdown;
pub mod models;
pub mod ops;
pub mod store;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

pub const DB_PATH: &str = ".mdnotes_db";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub autosave: autosave::Debouncer,
}

impl AppState {
    pub fn new() -> Self {
        let path = std::env::var("MDNOTES_DB").unwrap_or_else(|_| DB_PATH.to_string());
        let db = sled::open(&path).expect("Failed to open database");

        // Make sure there's a note to land on and that the persisted
        // selection still points at one.
        ops::bootstrap(&db).expect("Failed to initialize note store");

        Self {
            db,
            autosave: autosave::Debouncer::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used types
pub use models::{ExportBundle, ImportBundle, ImportedNote, Note, Settings};

pub use ops::{
    bootstrap, create_note, delete_note, derive_title, save_note_content, select_note, toggle_pin,
};

pub use store::{
    add_note, get_note, list_notes, load_settings, put_note, save_settings, selected_note_id,
    set_selected_note_id, sort_notes,
};

pub use exports::{export_bundle, export_filename, import_notes, note_filename};

pub use markdown::render_markdown;

pub use templates::{app_page, STYLE};
