//! Data models for the notes application.
//!
//! Core note record, persisted preferences, and the JSON envelope used by
//! export/import. Everything serializes camelCase so exported bundles match
//! the shape the page (and older exports) use.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Notes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Assigned by the store on creation; ids start at 1 and are stable for
    /// the note's lifetime.
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
}

// ============================================================================
// Preferences
// ============================================================================

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 32;
pub const DEFAULT_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    pub preview_hidden: bool,
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            preview_hidden: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Clamp the base font size into the allowed 12–32 range.
    pub fn clamped(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }
}

// ============================================================================
// Export / Import Bundle
// ============================================================================

pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub notes: Vec<Note>,
}

/// Incoming bundle. Only the `notes` array is required; everything inside an
/// entry is optional so bundles from other tools (or hand-edited files)
/// import with sensible fallbacks.
#[derive(Debug, Deserialize)]
pub struct ImportBundle {
    pub notes: Vec<ImportedNote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<ImportTimestamp>,
}

/// Exports from this app carry RFC 3339 strings; exports written by the
/// original browser app carried epoch milliseconds. Accept both.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum ImportTimestamp {
    Millis(i64),
    Iso(DateTime<Utc>),
}

impl ImportTimestamp {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        match self {
            ImportTimestamp::Iso(dt) => Some(dt),
            ImportTimestamp::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        }
    }
}
