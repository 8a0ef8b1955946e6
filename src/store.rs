//! Sled-backed note storage.
//!
//! Two trees:
//! - `notes`: big-endian u64 id → serialized note
//! - `config`: the selected-note pointer plus preference flags, each stored
//!   as a small string value
//!
//! Ids come from sled's monotonic id generator, offset so they start at 1.
//! Every operation surfaces the underlying sled/serde error text; there is
//! no retry policy, and no transaction spans more than one call.

use crate::models::{Note, Settings, DEFAULT_FONT_SIZE};
use sled::Db;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

const NOTES_TREE: &str = "notes";
const CONFIG_TREE: &str = "config";

const SELECTED_KEY: &str = "selected_note";
const DARK_MODE_KEY: &str = "dark_mode";
const PREVIEW_HIDDEN_KEY: &str = "preview_hidden";
const FONT_SIZE_KEY: &str = "font_size";

// ============================================================================
// Tree Access
// ============================================================================

fn notes_tree(db: &Db) -> Result<sled::Tree, String> {
    db.open_tree(NOTES_TREE).map_err(|e| e.to_string())
}

fn config_tree(db: &Db) -> Result<sled::Tree, String> {
    db.open_tree(CONFIG_TREE).map_err(|e| e.to_string())
}

fn encode_id(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

fn flag(value: bool) -> &'static [u8] {
    if value {
        b"true"
    } else {
        b"false"
    }
}

fn config_string(tree: &sled::Tree, key: &str) -> Result<Option<String>, String> {
    match tree.get(key.as_bytes()).map_err(|e| e.to_string())? {
        Some(v) => Ok(Some(String::from_utf8_lossy(&v).to_string())),
        None => Ok(None),
    }
}

// ============================================================================
// Notes
// ============================================================================

/// Load every note, sorted pinned-first then most recently modified.
pub fn list_notes(db: &Db) -> Result<Vec<Note>, String> {
    let tree = notes_tree(db)?;
    let mut notes = Vec::new();
    for entry in tree.iter() {
        let (_, v) = entry.map_err(|e| e.to_string())?;
        let note: Note = serde_json::from_slice(&v).map_err(|e| e.to_string())?;
        notes.push(note);
    }
    sort_notes(&mut notes);
    Ok(notes)
}

/// List ordering invariant: pinned notes precede unpinned ones, and each
/// group is ordered by descending modification time.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then(b.modified_at.cmp(&a.modified_at))
    });
}

pub fn get_note(db: &Db, id: u64) -> Result<Option<Note>, String> {
    let tree = notes_tree(db)?;
    match tree.get(encode_id(id)).map_err(|e| e.to_string())? {
        Some(v) => Ok(Some(
            serde_json::from_slice(&v).map_err(|e| e.to_string())?,
        )),
        None => Ok(None),
    }
}

/// Insert `note` under a fresh id and return the stored record. Any id on
/// the incoming value is ignored.
pub fn add_note(db: &Db, mut note: Note) -> Result<Note, String> {
    let tree = notes_tree(db)?;
    // generate_id starts at 0; offset so ids start at 1 like the exports
    // this store has to round-trip.
    note.id = db.generate_id().map_err(|e| e.to_string())? + 1;
    let json = serde_json::to_vec(&note).map_err(|e| e.to_string())?;
    tree.insert(encode_id(note.id), json)
        .map_err(|e| e.to_string())?;
    Ok(note)
}

/// Replace whatever is stored under `note.id`.
pub fn put_note(db: &Db, note: &Note) -> Result<(), String> {
    let tree = notes_tree(db)?;
    let json = serde_json::to_vec(note).map_err(|e| e.to_string())?;
    tree.insert(encode_id(note.id), json)
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Remove a note. Returns whether a record existed under `id`.
pub fn delete_note(db: &Db, id: u64) -> Result<bool, String> {
    let tree = notes_tree(db)?;
    Ok(tree
        .remove(encode_id(id))
        .map_err(|e| e.to_string())?
        .is_some())
}

// ============================================================================
// Selected-Note Pointer
// ============================================================================

pub fn selected_note_id(db: &Db) -> Result<Option<u64>, String> {
    let tree = config_tree(db)?;
    Ok(config_string(&tree, SELECTED_KEY)?.and_then(|v| v.parse().ok()))
}

pub fn set_selected_note_id(db: &Db, id: Option<u64>) -> Result<(), String> {
    let tree = config_tree(db)?;
    match id {
        Some(id) => {
            tree.insert(SELECTED_KEY.as_bytes(), id.to_string().as_bytes())
                .map_err(|e| e.to_string())?;
        }
        None => {
            tree.remove(SELECTED_KEY.as_bytes())
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

// ============================================================================
// Preferences
// ============================================================================

/// Load preferences, substituting defaults for missing or unparseable flags.
/// The font size is clamped on the way out, so a hand-edited store can't
/// push the page outside the 12–32 range.
pub fn load_settings(db: &Db) -> Result<Settings, String> {
    let tree = config_tree(db)?;
    let dark_mode = matches!(config_string(&tree, DARK_MODE_KEY)?.as_deref(), Some("true"));
    let preview_hidden = matches!(
        config_string(&tree, PREVIEW_HIDDEN_KEY)?.as_deref(),
        Some("true")
    );
    let font_size = config_string(&tree, FONT_SIZE_KEY)?
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_FONT_SIZE);

    Ok(Settings {
        dark_mode,
        preview_hidden,
        font_size,
    }
    .clamped())
}

/// Persist preferences as string flags. Returns the clamped value that was
/// actually stored.
pub fn save_settings(db: &Db, settings: Settings) -> Result<Settings, String> {
    let settings = settings.clamped();
    let tree = config_tree(db)?;
    tree.insert(DARK_MODE_KEY.as_bytes(), flag(settings.dark_mode))
        .map_err(|e| e.to_string())?;
    tree.insert(PREVIEW_HIDDEN_KEY.as_bytes(), flag(settings.preview_hidden))
        .map_err(|e| e.to_string())?;
    tree.insert(
        FONT_SIZE_KEY.as_bytes(),
        settings.font_size.to_string().as_bytes(),
    )
    .map_err(|e| e.to_string())?;
    Ok(settings)
}
