//! Landing page for starting a coaching session.
//!
//! Rendered server-side from the session settings. The page script
//! (`/static/main.js`) calls `POST /start` and embeds the returned
//! conversation URL.

use crate::application::SessionSettings;

/// Script served at `/static/main.js`.
pub const MAIN_JS: &str = include_str!("../../../../static/main.js");

/// Render the landing page.
pub fn render_index(settings: &SessionSettings) -> String {
    let document_ids = if settings.document_ids.is_empty() {
        "none".to_string()
    } else {
        settings.document_ids.join(", ")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Public Speaking Coach</title>
    <style>
{css}
    </style>
</head>
<body>
    <main>
        <h1>Public Speaking Coach</h1>
        <dl class="settings">
            <dt>Persona</dt><dd>{persona_id}</dd>
            <dt>Replica</dt><dd>{replica_id}</dd>
            <dt>Documents</dt><dd>{document_ids}</dd>
            <dt>Auth required</dt><dd>{require_auth}</dd>
        </dl>
        <button id="startBtn" type="button">Start session</button>
        <p id="status"></p>
        <a id="openLink" target="_blank" rel="noopener" style="display: none">Open in new tab</a>
        <iframe id="frame" allow="camera; microphone; fullscreen; display-capture"></iframe>
    </main>
    <script src="/static/main.js"></script>
</body>
</html>"#,
        css = PAGE_CSS,
        persona_id = html_escape(or_unset(&settings.persona_id)),
        replica_id = html_escape(or_unset(&settings.replica_id)),
        document_ids = html_escape(&document_ids),
        require_auth = settings.require_auth,
    )
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_CSS: &str = r#"
body {
    font-family: system-ui, sans-serif;
    color: #1f2937;
    margin: 0;
    padding: 2rem;
}
main {
    max-width: 960px;
    margin: 0 auto;
}
.settings {
    display: grid;
    grid-template-columns: max-content 1fr;
    gap: 0.25rem 1rem;
}
.settings dt {
    font-weight: 600;
}
#frame {
    width: 100%;
    height: 540px;
    border: 1px solid #e5e7eb;
    margin-top: 1rem;
}
"#;
