//! The single-page application shell.
//!
//! One `app_page` call renders the whole UI: header, sidebar list, editor
//! overlay, preview pane, settings modal, and the page script driving the
//! JSON API. Server-known preferences are inlined into the markup so the
//! theme and font size don't flash on load.

use super::styles::STYLE;
use crate::models::{Settings, MAX_FONT_SIZE, MIN_FONT_SIZE};

const HLJS_LIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/atom-one-light.min.css";
const HLJS_DARK_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/atom-one-dark.min.css";
const HLJS_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

pub fn app_page(settings: &Settings) -> String {
    let body_class = if settings.dark_mode {
        " class=\"dark-mode\""
    } else {
        ""
    };
    let preview_class = if settings.preview_hidden {
        "preview-hidden"
    } else {
        ""
    };
    let theme_glyph = if settings.dark_mode { "☀️" } else { "🌙" };
    let hljs_href = if settings.dark_mode {
        HLJS_DARK_CSS
    } else {
        HLJS_LIGHT_CSS
    };
    let settings_json = serde_json::to_string(settings).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en" style="--base-font-size: {font_size}px">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Markdown Notes</title>
    <link rel="stylesheet" id="hljsTheme" href="{hljs_href}">
    <style>{style}</style>
</head>
<body{body_class}>
    <header class="app-header">
        <h1>Markdown Notes</h1>
        <button id="newNoteBtn">+ New Note</button>
        <button id="importBtn">Import</button>
        <button id="exportAllBtn">Export All</button>
        <button id="themeToggle" title="Toggle theme">{theme_glyph}</button>
        <button id="settingsBtn" title="Settings">⚙</button>
        <input type="file" id="importFile" accept=".json,application/json" style="display: none">
    </header>
    <div class="app-container">
        <aside class="sidebar">
            <ul id="notesList"></ul>
        </aside>
        <main class="editor-area">
            <div id="editorToolbar">
                <span id="toolbarInfo">Loading notes…</span>
                <button id="togglePreviewBtn" style="display: none">Preview</button>
                <button id="exportNoteBtn" style="display: none">Export .md</button>
            </div>
            <div id="editorContent" class="{preview_class}" style="display: none">
                <div class="editor-pane">
                    <pre id="editorHighlight" aria-hidden="true"></pre>
                    <textarea id="editorInput" spellcheck="false" placeholder="Start writing…"></textarea>
                </div>
                <div id="previewPane"></div>
            </div>
            <div id="emptyState" style="display: none">
                <p>No notes yet</p>
                <button id="emptyNewNoteBtn">Create your first note</button>
            </div>
        </main>
    </div>

    <div id="settingsOverlay" style="display: none">
        <div class="settings-modal">
            <h2>Settings <button id="settingsClose">&times;</button></h2>
            <div class="settings-row">
                <label for="fontSizeInput">Base font size</label>
                <button id="fontSizeDecrease">−</button>
                <input type="range" id="fontSizeInput" min="{min_font}" max="{max_font}" value="{font_size}">
                <button id="fontSizeIncrease">+</button>
                <span id="fontSizeValue">{font_size}</span>
            </div>
        </div>
    </div>

    <script src="{hljs_js}"></script>
    <script>
        const HLJS_LIGHT_CSS = "{light}";
        const HLJS_DARK_CSS = "{dark}";
        const initialSettings = {settings_json};
    </script>
    <script>{app_js}</script>
</body>
</html>"#,
        font_size = settings.font_size,
        hljs_href = hljs_href,
        style = STYLE,
        body_class = body_class,
        theme_glyph = theme_glyph,
        preview_class = preview_class,
        min_font = MIN_FONT_SIZE,
        max_font = MAX_FONT_SIZE,
        hljs_js = HLJS_JS,
        light = HLJS_LIGHT_CSS,
        dark = HLJS_DARK_CSS,
        settings_json = settings_json,
        app_js = APP_JS,
    )
}

// ============================================================================
// Page Script
// ============================================================================

const APP_JS: &str = r#"
// ---- DOM elements ----
const notesList = document.getElementById("notesList");
const newNoteBtn = document.getElementById("newNoteBtn");
const emptyNewNoteBtn = document.getElementById("emptyNewNoteBtn");
const editorInput = document.getElementById("editorInput");
const editorHighlight = document.getElementById("editorHighlight");
const previewPane = document.getElementById("previewPane");
const editorContent = document.getElementById("editorContent");
const emptyState = document.getElementById("emptyState");
const toolbarInfo = document.getElementById("toolbarInfo");
const themeToggle = document.getElementById("themeToggle");
const exportAllBtn = document.getElementById("exportAllBtn");
const exportNoteBtn = document.getElementById("exportNoteBtn");
const togglePreviewBtn = document.getElementById("togglePreviewBtn");
const importBtn = document.getElementById("importBtn");
const importFile = document.getElementById("importFile");
const settingsBtn = document.getElementById("settingsBtn");
const settingsOverlay = document.getElementById("settingsOverlay");
const settingsClose = document.getElementById("settingsClose");
const fontSizeInput = document.getElementById("fontSizeInput");
const fontSizeValue = document.getElementById("fontSizeValue");
const fontSizeDecrease = document.getElementById("fontSizeDecrease");
const fontSizeIncrease = document.getElementById("fontSizeIncrease");

// ---- UI state ----
let currentNoteId = null;
let previewTimer = null;

const MIN_FONT_SIZE = 12;
const MAX_FONT_SIZE = 32;

// ---- API helpers ----
async function fetchJson(url, options) {
    const response = await fetch(url, options);
    if (!response.ok) {
        throw new Error(await response.text());
    }
    return response.json();
}

function postJson(url, body) {
    return fetchJson(url, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(body),
    });
}

// ---- Markdown syntax highlighting (editor overlay) ----
function highlightMarkdown(text) {
    let highlighted = text;

    // Escape HTML
    highlighted = highlighted
        .replace(/&/g, "&amp;")
        .replace(/</g, "&lt;")
        .replace(/>/g, "&gt;");

    // Headers (# ## ### etc)
    highlighted = highlighted.replace(
        /^(#{1,6})\s+(.+?)$/gm,
        '<span class="md-header">$1 $2</span>'
    );

    // Inline code `code`
    highlighted = highlighted.replace(
        /`([^`]+)`/g,
        '<span class="md-code">`$1`</span>'
    );

    // Bold **text** or __text__
    highlighted = highlighted.replace(
        /(\*\*|__)([^*_]+)\1/g,
        '<span class="md-bold">$1$2$1</span>'
    );

    // Italic *text* or _text_
    highlighted = highlighted.replace(
        /(\*|_)([^*_]+)\1/g,
        '<span class="md-italic">$1$2$1</span>'
    );

    // Links [text](url)
    highlighted = highlighted.replace(
        /\[([^\]]+)\]\(([^)]+)\)/g,
        '<span class="md-link">[$1]</span><span class="md-url">($2)</span>'
    );

    // Blockquotes > text
    highlighted = highlighted.replace(
        /^&gt;\s+(.+?)$/gm,
        '<span class="md-blockquote">&gt; $1</span>'
    );

    // Lists - and * and + and 1.
    highlighted = highlighted.replace(
        /^(\s*)([*+-]|\d+\.)\s+/gm,
        '$1<span class="md-list">$2</span> '
    );

    return highlighted;
}

function updateHighlight() {
    editorHighlight.innerHTML = highlightMarkdown(editorInput.value);
}

editorInput.addEventListener("scroll", () => {
    editorHighlight.scrollTop = editorInput.scrollTop;
    editorHighlight.scrollLeft = editorInput.scrollLeft;
});

// ---- Preview ----
async function updatePreview() {
    try {
        const data = await postJson("/api/preview", { content: editorInput.value });
        previewPane.innerHTML = data.html;
        previewPane.querySelectorAll("pre code").forEach((block) => {
            hljs.highlightElement(block);
        });
    } catch (error) {
        console.error("Preview failed:", error);
    }
}

function schedulePreview() {
    clearTimeout(previewTimer);
    previewTimer = setTimeout(updatePreview, 150);
}

// ---- Auto-save ----
// The server coalesces rapid edits into one write; just ship the latest
// content on every input event.
function queueAutoSave() {
    if (currentNoteId === null) return;
    postJson(`/api/note/${currentNoteId}/autosave`, { content: editorInput.value })
        .catch((error) => console.error("Auto-save failed:", error));
}

async function saveCurrentNote() {
    if (currentNoteId === null) return;
    try {
        const note = await postJson(`/api/note/${currentNoteId}`, {
            content: editorInput.value,
        });
        updateToolbar(note);
        await loadNotesList();
    } catch (error) {
        alert("Save failed: " + error.message);
    }
}

// ---- Toolbar / empty state ----
function updateToolbar(note) {
    const created = new Date(note.createdAt).toLocaleString();
    const modified = new Date(note.modifiedAt).toLocaleString();
    toolbarInfo.textContent = `Created: ${created} | Modified: ${modified}`;
    exportNoteBtn.style.display = "inline-block";
    togglePreviewBtn.style.display = "inline-block";
}

function showEmptyState() {
    editorContent.style.display = "none";
    emptyState.style.display = "flex";
    toolbarInfo.textContent = "No notes yet";
    exportNoteBtn.style.display = "none";
    togglePreviewBtn.style.display = "none";
}

function hideEmptyState() {
    editorContent.style.display = "flex";
    emptyState.style.display = "none";
}

// ---- Note operations ----
async function selectNote(id) {
    try {
        const note = await fetchJson(`/api/note/${id}/select`, { method: "POST" });
        currentNoteId = note.id;

        editorInput.value = note.content;
        updateHighlight();
        updateToolbar(note);
        updatePreview();
        hideEmptyState();

        document.querySelectorAll(".note-item").forEach((item) => {
            item.classList.remove("active");
        });
        document.querySelector(`[data-note-id="${id}"]`)?.classList.add("active");
    } catch (error) {
        alert("Failed to open note: " + error.message);
    }
}

async function createNewNote() {
    try {
        const note = await fetchJson("/api/notes", { method: "POST" });
        await loadNotesList();
        await selectNote(note.id);
    } catch (error) {
        alert("Failed to create note: " + error.message);
    }
}

async function loadNotesList() {
    const notes = await fetchJson("/api/notes");
    notesList.innerHTML = "";

    if (notes.length === 0) {
        showEmptyState();
        return notes;
    }

    notes.forEach((note) => {
        const li = document.createElement("li");
        li.className = "note-item";
        li.setAttribute("data-note-id", note.id);
        if (note.id === currentNoteId) {
            li.classList.add("active");
        }

        const title = document.createElement("div");
        title.className = "note-item-title";
        title.textContent = note.title;

        const date = document.createElement("div");
        date.className = "note-item-date";
        date.textContent = new Date(note.modifiedAt).toLocaleDateString();

        const actions = document.createElement("div");
        actions.className = "note-item-actions";

        const pinBtn = document.createElement("button");
        pinBtn.className = "pin-note-btn";
        pinBtn.textContent = note.pinned ? "⭐" : "☆";
        pinBtn.title = note.pinned ? "Unpin note" : "Pin note";
        if (note.pinned) {
            pinBtn.classList.add("pinned");
        }
        pinBtn.addEventListener("click", async (e) => {
            e.stopPropagation();
            try {
                await fetchJson(`/api/note/${note.id}/pin`, { method: "POST" });
                await loadNotesList();
            } catch (error) {
                alert("Pin failed: " + error.message);
            }
        });

        const deleteBtn = document.createElement("button");
        deleteBtn.className = "delete-note-btn";
        deleteBtn.textContent = "🗑️";
        deleteBtn.title = "Delete note";
        deleteBtn.addEventListener("click", async (e) => {
            e.stopPropagation();
            if (!confirm(`Delete "${note.title}"? This cannot be undone.`)) return;
            try {
                const data = await fetchJson(`/api/note/${note.id}`, { method: "DELETE" });
                if (currentNoteId === note.id) {
                    currentNoteId = null;
                }
                await loadNotesList();
                if (data.selected !== null) {
                    await selectNote(data.selected);
                } else {
                    showEmptyState();
                }
            } catch (error) {
                alert("Delete failed: " + error.message);
            }
        });

        actions.appendChild(pinBtn);
        actions.appendChild(deleteBtn);

        li.appendChild(title);
        li.appendChild(date);
        li.appendChild(actions);

        li.addEventListener("click", () => selectNote(note.id));

        notesList.appendChild(li);
    });

    return notes;
}

// ---- Import / Export ----
exportAllBtn.addEventListener("click", () => {
    window.location.href = "/export";
});

exportNoteBtn.addEventListener("click", () => {
    if (currentNoteId === null) {
        alert("No note selected");
        return;
    }
    window.location.href = `/note/${currentNoteId}/export`;
});

importBtn.addEventListener("click", () => {
    importFile.click();
});

importFile.addEventListener("change", async (e) => {
    if (e.target.files.length === 0) return;
    const form = new FormData();
    form.append("file", e.target.files[0]);
    try {
        const data = await fetchJson("/import", { method: "POST", body: form });
        alert(`Successfully imported ${data.imported} note(s)`);
        await loadNotesList();
    } catch (error) {
        alert("Import failed: " + error.message);
    }
    e.target.value = "";
});

// ---- Theme ----
themeToggle.addEventListener("click", () => {
    const isDark = document.body.classList.toggle("dark-mode");
    themeToggle.textContent = isDark ? "☀️" : "🌙";
    document.getElementById("hljsTheme").href = isDark ? HLJS_DARK_CSS : HLJS_LIGHT_CSS;
    saveSettings();
    updatePreview();
});

// ---- Settings ----
function currentSettings() {
    return {
        darkMode: document.body.classList.contains("dark-mode"),
        previewHidden: editorContent.classList.contains("preview-hidden"),
        fontSize: parseInt(fontSizeInput.value, 10),
    };
}

function saveSettings() {
    fetchJson("/api/settings", {
        method: "PUT",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(currentSettings()),
    }).catch((error) => console.error("Saving settings failed:", error));
}

function setFontSize(size) {
    const fontSize = Math.min(Math.max(size, MIN_FONT_SIZE), MAX_FONT_SIZE);
    fontSizeInput.value = fontSize;
    fontSizeValue.textContent = fontSize;
    document.documentElement.style.setProperty("--base-font-size", `${fontSize}px`);
    saveSettings();
}

fontSizeInput.addEventListener("input", () => {
    setFontSize(parseInt(fontSizeInput.value, 10));
});

fontSizeDecrease.addEventListener("click", () => {
    setFontSize(parseInt(fontSizeInput.value, 10) - 1);
});

fontSizeIncrease.addEventListener("click", () => {
    setFontSize(parseInt(fontSizeInput.value, 10) + 1);
});

togglePreviewBtn.addEventListener("click", () => {
    editorContent.classList.toggle("preview-hidden");
    saveSettings();
});

function openSettings() {
    settingsOverlay.style.display = "flex";
    fontSizeInput.focus();
}

function closeSettings() {
    settingsOverlay.style.display = "none";
}

settingsBtn.addEventListener("click", openSettings);
settingsClose.addEventListener("click", closeSettings);
settingsOverlay.addEventListener("click", (e) => {
    if (e.target === settingsOverlay) {
        closeSettings();
    }
});

document.addEventListener("keydown", (e) => {
    if (e.key === "Escape" && settingsOverlay.style.display !== "none") {
        closeSettings();
    }
    if ((e.ctrlKey || e.metaKey) && e.key === "s") {
        e.preventDefault();
        saveCurrentNote();
    }
});

// ---- Editor wiring ----
editorInput.addEventListener("input", () => {
    updateHighlight();
    schedulePreview();
    queueAutoSave();
});

newNoteBtn.addEventListener("click", createNewNote);
emptyNewNoteBtn.addEventListener("click", createNewNote);

// ---- Startup ----
function applySettings(settings) {
    fontSizeInput.value = settings.fontSize;
    fontSizeValue.textContent = settings.fontSize;
    document.documentElement.style.setProperty(
        "--base-font-size",
        `${settings.fontSize}px`
    );
}

async function initializeApp() {
    applySettings(initialSettings);

    const notes = await loadNotesList();
    if (notes.length === 0) return;

    const { selected } = await fetchJson("/api/selected");
    if (selected !== null && notes.some((n) => n.id === selected)) {
        await selectNote(selected);
    } else {
        await selectNote(notes[0].id);
    }
}

initializeApp().catch((error) => {
    toolbarInfo.textContent = "Failed to load notes";
    console.error(error);
});
"#;
