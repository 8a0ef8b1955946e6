//! Note operations.
//!
//! The orchestration layer between the HTTP surface and the store: create,
//! select, save, pin, delete, and the startup bootstrap. The selected-note
//! pointer lives in the store and is threaded through explicitly; there is
//! no shared mutable "current note" anywhere in the process.

use crate::models::Note;
use crate::store;
use chrono::Utc;
use regex::Regex;
use sled::Db;

pub const UNTITLED: &str = "Untitled Note";
pub const TITLE_MAX_CHARS: usize = 15;

// ============================================================================
// Title Derivation
// ============================================================================

/// Derive the list title from the content: the first line with its leading
/// heading markers stripped, or the first non-empty line otherwise, truncated
/// to 15 characters. Content with nothing usable yields "Untitled Note".
pub fn derive_title(content: &str) -> String {
    let heading = Regex::new(r"^#+\s*").unwrap();
    let first_line = content.lines().next().unwrap_or("");
    let stripped = heading.replace(first_line, "").trim().to_string();

    let title = if stripped.is_empty() {
        content
            .lines()
            .find(|line| !line.trim().is_empty())
            .map(|line| truncate_chars(line.trim(), TITLE_MAX_CHARS))
            .unwrap_or_default()
    } else {
        truncate_chars(&stripped, TITLE_MAX_CHARS)
    };

    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ============================================================================
// Operations
// ============================================================================

/// Create a default note, persist it, and select it.
pub fn create_note(db: &Db) -> Result<Note, String> {
    let now = Utc::now();
    let note = store::add_note(
        db,
        Note {
            id: 0,
            title: UNTITLED.to_string(),
            content: String::new(),
            created_at: now,
            modified_at: now,
            pinned: false,
        },
    )?;
    store::set_selected_note_id(db, Some(note.id))?;
    Ok(note)
}

/// Overwrite a note's content, restamp modifiedAt, and recompute the title.
/// Returns `None` when no note exists under `id`.
pub fn save_note_content(db: &Db, id: u64, content: &str) -> Result<Option<Note>, String> {
    let Some(mut note) = store::get_note(db, id)? else {
        return Ok(None);
    };
    note.content = content.to_string();
    note.modified_at = Utc::now();
    note.title = derive_title(content);
    store::put_note(db, &note)?;
    Ok(Some(note))
}

/// Flip the pinned flag. Pinning is not an edit, so modifiedAt is untouched.
pub fn toggle_pin(db: &Db, id: u64) -> Result<Option<Note>, String> {
    let Some(mut note) = store::get_note(db, id)? else {
        return Ok(None);
    };
    note.pinned = !note.pinned;
    store::put_note(db, &note)?;
    Ok(Some(note))
}

/// Persist the selection pointer and return the note it now refers to.
pub fn select_note(db: &Db, id: u64) -> Result<Option<Note>, String> {
    let Some(note) = store::get_note(db, id)? else {
        return Ok(None);
    };
    store::set_selected_note_id(db, Some(id))?;
    Ok(Some(note))
}

/// Delete a note. When the deleted note was selected, selection moves to the
/// first remaining note in list order, or clears when none remain. Returns
/// the selection as it stands after the delete.
pub fn delete_note(db: &Db, id: u64) -> Result<Option<u64>, String> {
    store::delete_note(db, id)?;
    let mut selected = store::selected_note_id(db)?;
    if selected == Some(id) {
        selected = store::list_notes(db)?.first().map(|n| n.id);
        store::set_selected_note_id(db, selected)?;
    }
    Ok(selected)
}

/// Startup: create and select a first note on an empty store; otherwise make
/// sure the persisted selection still points at a live note, falling back to
/// the first listed one.
pub fn bootstrap(db: &Db) -> Result<Note, String> {
    let notes = store::list_notes(db)?;
    if notes.is_empty() {
        return create_note(db);
    }

    let selected = store::selected_note_id(db)?;
    if let Some(note) = selected.and_then(|id| notes.iter().find(|n| n.id == id)) {
        return Ok(note.clone());
    }

    let first = notes[0].clone();
    store::set_selected_note_id(db, Some(first.id))?;
    Ok(first)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_db() -> (TempDir, Db) {
        let dir = TempDir::new().expect("temp dir");
        let db = sled::open(dir.path()).expect("open sled db");
        (dir, db)
    }

    // ---- title derivation tests ----

    #[test]
    fn test_title_from_heading_line() {
        assert_eq!(derive_title("# Hello World"), "Hello World");
    }

    #[test]
    fn test_title_truncated_to_fifteen_chars() {
        assert_eq!(
            derive_title("### Deeply Nested Heading Title"),
            "Deeply Nested H"
        );
    }

    #[test]
    fn test_title_empty_content_is_untitled() {
        assert_eq!(derive_title(""), UNTITLED);
        assert_eq!(derive_title("\n\n   \n"), UNTITLED);
    }

    #[test]
    fn test_title_falls_back_to_first_nonempty_line() {
        assert_eq!(
            derive_title("\n\nsecond line content here"),
            "second line con"
        );
    }

    #[test]
    fn test_title_plain_first_line() {
        assert_eq!(derive_title("groceries\n- milk\n- eggs"), "groceries");
    }

    #[test]
    fn test_title_truncation_counts_chars_not_bytes() {
        let content = "# ééééééééééééééééééé";
        assert_eq!(derive_title(content).chars().count(), TITLE_MAX_CHARS);
    }

    // ---- operation tests ----

    #[test]
    fn test_create_note_persists_and_selects() {
        let (_dir, db) = open_db();
        let note = create_note(&db).unwrap();

        assert_eq!(note.title, UNTITLED);
        assert_eq!(note.content, "");
        assert!(!note.pinned);
        assert_eq!(store::selected_note_id(&db).unwrap(), Some(note.id));
        assert_eq!(store::list_notes(&db).unwrap().len(), 1);
    }

    #[test]
    fn test_save_recomputes_title_and_modified() {
        let (_dir, db) = open_db();
        let note = create_note(&db).unwrap();
        let saved = save_note_content(&db, note.id, "# Hello World\n\nbody")
            .unwrap()
            .unwrap();

        assert_eq!(saved.title, "Hello World");
        assert_eq!(saved.content, "# Hello World\n\nbody");
        assert!(saved.modified_at >= note.modified_at);
        assert_eq!(saved.created_at, note.created_at);
    }

    #[test]
    fn test_save_missing_note_is_none() {
        let (_dir, db) = open_db();
        assert!(save_note_content(&db, 99, "x").unwrap().is_none());
        assert!(store::list_notes(&db).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_pin_flips_without_touching_modified() {
        let (_dir, db) = open_db();
        let note = create_note(&db).unwrap();

        let pinned = toggle_pin(&db, note.id).unwrap().unwrap();
        assert!(pinned.pinned);
        assert_eq!(pinned.modified_at, note.modified_at);

        let unpinned = toggle_pin(&db, note.id).unwrap().unwrap();
        assert!(!unpinned.pinned);
    }

    #[test]
    fn test_delete_selected_moves_to_next_note() {
        let (_dir, db) = open_db();
        let first = create_note(&db).unwrap();
        let second = create_note(&db).unwrap();
        select_note(&db, second.id).unwrap();

        let selected = delete_note(&db, second.id).unwrap();
        assert_eq!(selected, Some(first.id));
        assert_eq!(store::selected_note_id(&db).unwrap(), Some(first.id));
    }

    #[test]
    fn test_delete_last_note_clears_selection() {
        let (_dir, db) = open_db();
        let note = create_note(&db).unwrap();

        let selected = delete_note(&db, note.id).unwrap();
        assert_eq!(selected, None);
        assert_eq!(store::selected_note_id(&db).unwrap(), None);
        assert!(store::list_notes(&db).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unselected_note_keeps_selection() {
        let (_dir, db) = open_db();
        let first = create_note(&db).unwrap();
        let second = create_note(&db).unwrap();

        let selected = delete_note(&db, first.id).unwrap();
        assert_eq!(selected, Some(second.id));
        assert_eq!(store::selected_note_id(&db).unwrap(), Some(second.id));
    }

    // ---- bootstrap tests ----

    #[test]
    fn test_bootstrap_empty_store_creates_first_note() {
        let (_dir, db) = open_db();
        let note = bootstrap(&db).unwrap();

        assert_eq!(note.title, UNTITLED);
        assert_eq!(store::selected_note_id(&db).unwrap(), Some(note.id));
    }

    #[test]
    fn test_bootstrap_restores_persisted_selection() {
        let (_dir, db) = open_db();
        let first = create_note(&db).unwrap();
        let _second = create_note(&db).unwrap();
        select_note(&db, first.id).unwrap();

        let restored = bootstrap(&db).unwrap();
        assert_eq!(restored.id, first.id);
    }

    #[test]
    fn test_bootstrap_stale_pointer_falls_back_to_first_listed() {
        let (_dir, db) = open_db();
        let note = create_note(&db).unwrap();
        store::set_selected_note_id(&db, Some(note.id + 100)).unwrap();

        let restored = bootstrap(&db).unwrap();
        assert_eq!(restored.id, note.id);
        assert_eq!(store::selected_note_id(&db).unwrap(), Some(note.id));
    }
}
