//! CSS styles for the notes application.
//!
//! Contains the main STYLE constant with all CSS for the single-page UI.
//! Theme switching toggles the `dark-mode` class on `<body>`; everything
//! else keys off the custom properties below.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Light theme */
:root {
    --base-font-size: 16px;

    --bg-primary: #f5f6f8;
    --bg-secondary: #ffffff;
    --text-primary: #1f2328;
    --text-secondary: #6b7280;
    --border-color: #d8dce2;
    --accent-color: #3b82f6;
    --danger-color: #dc2626;

    --md-header: #1d4ed8;
    --md-bold: #92400e;
    --md-italic: #6d28d9;
    --md-code: #b91c1c;
    --md-link: #2563eb;
    --md-url: #9ca3af;
    --md-blockquote: #047857;
    --md-list: #b45309;
}

body.dark-mode {
    --bg-primary: #16181d;
    --bg-secondary: #1f232b;
    --text-primary: #e5e7eb;
    --text-secondary: #9ca3af;
    --border-color: #343a46;
    --accent-color: #60a5fa;
    --danger-color: #f87171;

    --md-header: #93c5fd;
    --md-bold: #fbbf24;
    --md-italic: #c4b5fd;
    --md-code: #fca5a5;
    --md-link: #60a5fa;
    --md-url: #6b7280;
    --md-blockquote: #6ee7b7;
    --md-list: #fcd34d;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { font-size: var(--base-font-size); }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    color: var(--text-primary);
    background: var(--bg-primary);
    height: 100vh;
    overflow: hidden;
}

button {
    font-family: inherit;
    font-size: 0.85rem;
    color: var(--text-primary);
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 4px;
    padding: 0.35rem 0.75rem;
    cursor: pointer;
}
button:hover { border-color: var(--accent-color); color: var(--accent-color); }

/* Header */
.app-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background: var(--bg-secondary);
    border-bottom: 1px solid var(--border-color);
}
.app-header h1 { font-size: 1rem; font-weight: 600; margin-right: auto; }

/* Layout */
.app-container {
    display: flex;
    height: calc(100vh - 2.6rem);
}

/* Sidebar */
.sidebar {
    width: 240px;
    min-width: 240px;
    background: var(--bg-secondary);
    border-right: 1px solid var(--border-color);
    overflow-y: auto;
}
#notesList { list-style: none; }

.note-item {
    position: relative;
    padding: 0.6rem 0.75rem;
    border-bottom: 1px solid var(--border-color);
    cursor: pointer;
}
.note-item:hover { background: var(--bg-primary); }
.note-item.active {
    background: var(--bg-primary);
    border-left: 3px solid var(--accent-color);
    padding-left: calc(0.75rem - 3px);
}
.note-item-title {
    font-size: 0.9rem;
    font-weight: 500;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
    padding-right: 3.2rem;
}
.note-item-date { font-size: 0.7rem; color: var(--text-secondary); margin-top: 0.15rem; }

.note-item-actions {
    position: absolute;
    top: 0.45rem;
    right: 0.4rem;
    display: flex;
    gap: 0.1rem;
}
.note-item-actions button {
    border: none;
    background: none;
    padding: 0.1rem 0.2rem;
    font-size: 0.85rem;
}
.pin-note-btn.pinned { color: var(--md-bold); }
.delete-note-btn:hover { color: var(--danger-color); }

/* Editor area */
.editor-area {
    flex: 1;
    display: flex;
    flex-direction: column;
    min-width: 0;
}

#editorToolbar {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.35rem 0.75rem;
    font-size: 0.75rem;
    color: var(--text-secondary);
    border-bottom: 1px solid var(--border-color);
    background: var(--bg-secondary);
}
#toolbarInfo { margin-right: auto; }

#editorContent {
    flex: 1;
    display: flex;
    min-height: 0;
}

/* Editor overlay: a transparent textarea over the highlighted mirror */
.editor-pane {
    position: relative;
    flex: 1;
    min-width: 0;
    border-right: 1px solid var(--border-color);
}

#editorHighlight, #editorInput {
    position: absolute;
    inset: 0;
    padding: 1rem;
    font-family: "SF Mono", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 0.95rem;
    line-height: 1.55;
    white-space: pre-wrap;
    word-wrap: break-word;
    overflow-y: auto;
}

#editorHighlight {
    pointer-events: none;
    color: var(--text-primary);
}

#editorInput {
    resize: none;
    border: none;
    outline: none;
    background: transparent;
    color: transparent;
    caret-color: var(--text-primary);
}

.md-header { color: var(--md-header); font-weight: 700; }
.md-bold { color: var(--md-bold); font-weight: 700; }
.md-italic { color: var(--md-italic); font-style: italic; }
.md-code { color: var(--md-code); }
.md-link { color: var(--md-link); }
.md-url { color: var(--md-url); }
.md-blockquote { color: var(--md-blockquote); }
.md-list { color: var(--md-list); font-weight: 700; }

/* Preview pane */
#previewPane {
    flex: 1;
    min-width: 0;
    padding: 1rem 1.5rem;
    overflow-y: auto;
    background: var(--bg-secondary);
    line-height: 1.6;
}
#editorContent.preview-hidden #previewPane { display: none; }
#editorContent.preview-hidden .editor-pane { border-right: none; }

#previewPane h1, #previewPane h2, #previewPane h3 {
    margin: 1.2em 0 0.5em;
    line-height: 1.25;
}
#previewPane h1:first-child { margin-top: 0; }
#previewPane p, #previewPane ul, #previewPane ol, #previewPane blockquote { margin-bottom: 0.8em; }
#previewPane ul, #previewPane ol { padding-left: 1.5em; }
#previewPane a { color: var(--accent-color); }
#previewPane blockquote {
    border-left: 3px solid var(--border-color);
    padding-left: 0.75rem;
    color: var(--text-secondary);
}
#previewPane code {
    font-family: "SF Mono", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 0.85em;
    background: var(--bg-primary);
    padding: 0.1em 0.3em;
    border-radius: 3px;
}
#previewPane pre {
    background: var(--bg-primary);
    border: 1px solid var(--border-color);
    border-radius: 4px;
    padding: 0.75rem;
    overflow-x: auto;
    margin-bottom: 0.8em;
}
#previewPane pre code { background: none; padding: 0; }
#previewPane table { border-collapse: collapse; margin-bottom: 0.8em; }
#previewPane th, #previewPane td {
    border: 1px solid var(--border-color);
    padding: 0.3em 0.6em;
}

/* Empty state */
#emptyState {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    color: var(--text-secondary);
}

/* Settings modal */
#settingsOverlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.45);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}
.settings-modal {
    width: 320px;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1rem 1.25rem;
}
.settings-modal h2 {
    font-size: 1rem;
    margin-bottom: 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
#settingsClose { border: none; background: none; font-size: 1.1rem; }
.settings-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
    font-size: 0.85rem;
}
.settings-row label { margin-right: auto; }
#fontSizeInput { width: 90px; }
#fontSizeValue { min-width: 2ch; text-align: right; }
"#;
