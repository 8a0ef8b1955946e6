//! Bundle export, JSON import, and download filename helpers.
//!
//! Export is a snapshot of the full note set wrapped in a versioned
//! envelope; import inserts every entry of a user-supplied bundle as a
//! brand-new note and never trusts incoming ids.

use crate::models::{ExportBundle, ImportBundle, Note, EXPORT_VERSION};
use crate::store;
use chrono::{DateTime, Utc};
use regex::Regex;
use sled::Db;

pub const IMPORTED_FALLBACK_TITLE: &str = "Imported Note";

// ============================================================================
// Export
// ============================================================================

pub fn export_bundle(db: &Db) -> Result<ExportBundle, String> {
    Ok(ExportBundle {
        version: EXPORT_VERSION,
        exported_at: Utc::now(),
        notes: store::list_notes(db)?,
    })
}

/// `notes-export-<YYYY-MM-DD>.json`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("notes-export-{}.json", now.format("%Y-%m-%d"))
}

/// `<title>-<YYYY-MM-DD>.md`, with the title reduced to something every
/// filesystem (and the Content-Disposition header) accepts.
pub fn note_filename(title: &str, now: DateTime<Utc>) -> String {
    let stem = sanitize_filename(title);
    let stem = if stem.is_empty() { "note" } else { &stem };
    format!("{}-{}.md", stem, now.format("%Y-%m-%d"))
}

fn sanitize_filename(title: &str) -> String {
    let forbidden = Regex::new(r#"[/\\:*?"<>|[:cntrl:]]+"#).unwrap();
    forbidden
        .replace_all(title.trim(), "-")
        .trim_matches('-')
        .to_string()
}

// ============================================================================
// Import
// ============================================================================

/// Parse and import a bundle. Rejects before any write when the body is not
/// JSON or carries no `notes` array. Each accepted entry becomes a new note:
/// original ids are ignored, createdAt survives when parseable, modifiedAt
/// is restamped, and imported notes arrive unpinned. Returns how many notes
/// were written; a storage failure mid-loop aborts with the error.
pub fn import_notes(db: &Db, data: &[u8]) -> Result<usize, String> {
    let bundle: ImportBundle =
        serde_json::from_slice(data).map_err(|e| format!("Invalid import format: {}", e))?;

    let now = Utc::now();
    let mut imported = 0;
    for entry in bundle.notes {
        let title = entry
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| IMPORTED_FALLBACK_TITLE.to_string());
        let note = Note {
            id: 0,
            title,
            content: entry.content.unwrap_or_default(),
            created_at: entry
                .created_at
                .and_then(|t| t.to_datetime())
                .unwrap_or(now),
            modified_at: now,
            pinned: false,
        };
        store::add_note(db, note)?;
        imported += 1;
    }
    Ok(imported)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn open_db() -> (TempDir, Db) {
        let dir = TempDir::new().expect("temp dir");
        let db = sled::open(dir.path()).expect("open sled db");
        (dir, db)
    }

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    // ---- filename tests ----

    #[test]
    fn test_export_filename_is_dated() {
        assert_eq!(export_filename(fixed_date()), "notes-export-2026-08-06.json");
    }

    #[test]
    fn test_note_filename_from_title() {
        assert_eq!(
            note_filename("Shopping List", fixed_date()),
            "Shopping List-2026-08-06.md"
        );
    }

    #[test]
    fn test_note_filename_sanitizes_separators() {
        assert_eq!(
            note_filename("a/b: notes?", fixed_date()),
            "a-b- notes-2026-08-06.md"
        );
    }

    #[test]
    fn test_note_filename_empty_title_falls_back() {
        assert_eq!(note_filename("", fixed_date()), "note-2026-08-06.md");
        assert_eq!(note_filename("///", fixed_date()), "note-2026-08-06.md");
    }

    // ---- import validation tests ----

    #[test]
    fn test_import_rejects_invalid_json() {
        let (_dir, db) = open_db();
        assert!(import_notes(&db, b"not json at all").is_err());
        assert!(store::list_notes(&db).unwrap().is_empty());
    }

    #[test]
    fn test_import_rejects_missing_notes_array() {
        let (_dir, db) = open_db();
        assert!(import_notes(&db, br#"{"version": 1}"#).is_err());
        assert!(store::list_notes(&db).unwrap().is_empty());
    }

    #[test]
    fn test_import_applies_fallbacks() {
        let (_dir, db) = open_db();
        let imported = import_notes(&db, br#"{"notes": [{}]}"#).unwrap();
        assert_eq!(imported, 1);

        let notes = store::list_notes(&db).unwrap();
        assert_eq!(notes[0].title, IMPORTED_FALLBACK_TITLE);
        assert_eq!(notes[0].content, "");
        assert!(!notes[0].pinned);
    }

    #[test]
    fn test_import_ignores_original_ids() {
        let (_dir, db) = open_db();
        let existing = ops::create_note(&db).unwrap();
        let body = format!(
            r#"{{"notes": [{{"id": {}, "title": "Incoming", "content": "body"}}]}}"#,
            existing.id
        );
        import_notes(&db, body.as_bytes()).unwrap();

        let notes = store::list_notes(&db).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(
            store::get_note(&db, existing.id).unwrap().unwrap().title,
            existing.title
        );
    }

    #[test]
    fn test_import_accepts_epoch_millis_created_at() {
        let (_dir, db) = open_db();
        let body = br#"{"notes": [{"title": "Old", "content": "x", "createdAt": 1700000000000}]}"#;
        import_notes(&db, body).unwrap();

        let notes = store::list_notes(&db).unwrap();
        assert_eq!(
            notes[0].created_at,
            Utc.timestamp_millis_opt(1700000000000).unwrap()
        );
    }

    // ---- round-trip test ----

    #[test]
    fn test_export_import_round_trip_preserves_count_and_content() {
        let (_dir, source_db) = open_db();
        for body in ["# First\nalpha", "# Second\nbeta", "# Third\ngamma"] {
            let note = ops::create_note(&source_db).unwrap();
            ops::save_note_content(&source_db, note.id, body).unwrap();
        }
        let pinned = ops::create_note(&source_db).unwrap();
        ops::save_note_content(&source_db, pinned.id, "# Pinned\ndelta").unwrap();
        ops::toggle_pin(&source_db, pinned.id).unwrap();

        let bundle = export_bundle(&source_db).unwrap();
        let json = serde_json::to_vec(&bundle).unwrap();

        let (_dir2, target_db) = open_db();
        let imported = import_notes(&target_db, &json).unwrap();
        assert_eq!(imported, 4);

        let mut original: Vec<String> = store::list_notes(&source_db)
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        let mut restored: Vec<String> = store::list_notes(&target_db)
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        original.sort();
        restored.sort();
        assert_eq!(original, restored);
    }
}
