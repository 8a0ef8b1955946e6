//! Debounced auto-save.
//!
//! The page posts the editor content on every input event; edits are
//! coalesced here so only the last one inside a 1-second quiet window
//! reaches the store. Every edit bumps a per-note generation and re-arms
//! the timer; a timer that wakes up to a newer generation drops out without
//! writing. A write that has started is never cancelled.

use crate::ops;
use sled::Db;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const AUTO_SAVE_DELAY: Duration = Duration::from_secs(1);

type PendingMap = Arc<Mutex<HashMap<u64, PendingEdit>>>;

#[derive(Clone, Default)]
pub struct Debouncer {
    pending: PendingMap,
}

struct PendingEdit {
    generation: u64,
    content: String,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `content` as the note's next auto-save and (re)arm the window.
    pub fn schedule(&self, db: &Db, id: u64, content: String) {
        let generation = {
            let mut pending = self.pending.lock().unwrap();
            let entry = pending.entry(id).or_insert(PendingEdit {
                generation: 0,
                content: String::new(),
            });
            entry.generation += 1;
            entry.content = content;
            entry.generation
        };

        let pending = Arc::clone(&self.pending);
        let db = db.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_SAVE_DELAY).await;
            flush(&pending, &db, id, generation);
        });
    }

    /// Drop the pending edit for a note. Explicit saves and deletes call this
    /// so a stale timer can't overwrite what the user just did.
    pub fn cancel(&self, id: u64) {
        self.pending.lock().unwrap().remove(&id);
    }
}

fn flush(pending: &Mutex<HashMap<u64, PendingEdit>>, db: &Db, id: u64, generation: u64) {
    let content = {
        let mut pending = pending.lock().unwrap();
        match pending.get(&id) {
            Some(entry) if entry.generation == generation => {
                pending.remove(&id).map(|entry| entry.content)
            }
            _ => None,
        }
    };

    let Some(content) = content else {
        return;
    };

    match ops::save_note_content(db, id, &content) {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!(note = id, "note deleted before auto-save fired");
        }
        Err(e) => {
            tracing::warn!(note = id, error = %e, "auto-save failed");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use tempfile::TempDir;

    fn open_db() -> (TempDir, Db) {
        let dir = TempDir::new().expect("temp dir");
        let db = sled::open(dir.path()).expect("open sled db");
        (dir, db)
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_edit_persists_after_window() {
        let (_dir, db) = open_db();
        let note = ops::create_note(&db).unwrap();
        let debouncer = Debouncer::new();

        debouncer.schedule(&db, note.id, "# Draft".to_string());
        tokio::time::sleep(AUTO_SAVE_DELAY + Duration::from_millis(100)).await;

        let saved = store::get_note(&db, note.id).unwrap().unwrap();
        assert_eq!(saved.content, "# Draft");
        assert_eq!(saved.title, "Draft");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_persist_only_final_content() {
        let (_dir, db) = open_db();
        let note = ops::create_note(&db).unwrap();
        let debouncer = Debouncer::new();

        debouncer.schedule(&db, note.id, "first".to_string());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(&db, note.id, "second".to_string());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(&db, note.id, "# Final\ncontent".to_string());

        // Half a second past the last edit the window is still open, so the
        // earlier edits must not have written anything.
        tokio::time::sleep(Duration::from_millis(500)).await;
        let mid = store::get_note(&db, note.id).unwrap().unwrap();
        assert_eq!(mid.content, "");

        tokio::time::sleep(Duration::from_millis(700)).await;
        let saved = store::get_note(&db, note.id).unwrap().unwrap();
        assert_eq!(saved.content, "# Final\ncontent");
        assert_eq!(saved.title, "Final");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_edit() {
        let (_dir, db) = open_db();
        let note = ops::create_note(&db).unwrap();
        let saved = ops::save_note_content(&db, note.id, "explicit")
            .unwrap()
            .unwrap();
        let debouncer = Debouncer::new();

        debouncer.schedule(&db, note.id, "stale draft".to_string());
        debouncer.cancel(note.id);
        tokio::time::sleep(AUTO_SAVE_DELAY * 2).await;

        let current = store::get_note(&db, note.id).unwrap().unwrap();
        assert_eq!(current.content, saved.content);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notes_debounce_independently() {
        let (_dir, db) = open_db();
        let a = ops::create_note(&db).unwrap();
        let b = ops::create_note(&db).unwrap();
        let debouncer = Debouncer::new();

        debouncer.schedule(&db, a.id, "alpha".to_string());
        debouncer.schedule(&db, b.id, "beta".to_string());
        tokio::time::sleep(AUTO_SAVE_DELAY + Duration::from_millis(100)).await;

        assert_eq!(store::get_note(&db, a.id).unwrap().unwrap().content, "alpha");
        assert_eq!(store::get_note(&db, b.id).unwrap().unwrap().content, "beta");
    }
}
