//! Header page markup and injected scripts.

use crate::types::office_app::OfficeApp;

const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");
const KEY_FORWARD_JS: &str = include_str!("../../resources/ui/key_forward.js");
const CHORDS_PLACEHOLDER: &str = "__OFFICE_SHELL_CHORDS__";

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
html, body {
  margin: 0;
  height: 100%;
  overflow: hidden;
  background: var(--headerbar-bg);
  color: var(--headerbar-fg);
  font-family: var(--font-family);
  font-size: 13px;
  user-select: none;
  -webkit-user-select: none;
}
header {
  display: flex;
  align-items: center;
  gap: 8px;
  height: 100%;
  padding: 0 8px;
  border-bottom: 1px solid var(--borders);
}
button {
  border: none;
  font: inherit;
  cursor: pointer;
  padding: 5px 10px;
}
.nav { display: flex; }
.nav button {
  background: none;
  color: var(--headerbar-fg);
  border-radius: 6px;
  font-size: 15px;
  width: 32px;
  padding: 4px 0;
}
.nav button:hover { background-color: color-mix(in srgb, var(--headerbar-fg) 10%, transparent); }
.switcher { flex: 1; display: flex; justify-content: center; gap: 2px; }
.end { display: flex; align-items: center; gap: 8px; }
#spinner {
  width: 16px;
  height: 16px;
  border: 2px solid color-mix(in srgb, var(--headerbar-fg) 25%, transparent);
  border-top-color: var(--headerbar-fg);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
#spinner[hidden], #close-tab[hidden] { display: none; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

/// Full HTML of the header bar. `stylesheet` carries the theme variables and
/// button state rules; `key_script` is the key forwarder for this page.
pub fn chrome_html(stylesheet: &str, key_script: &str) -> String {
    let mut buttons = String::new();
    for app in OfficeApp::ALL {
        buttons.push_str(&format!(
            r#"<button class="app-inactive" data-app="{app:?}" title="{label}">{label}</button>"#,
            app = app,
            label = app.label()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>{stylesheet}{base}</style>
</head>
<body>
<header>
<div class="nav">
<button data-nav="back" title="Back">&#8592;</button>
<button data-nav="forward" title="Forward">&#8594;</button>
<button data-nav="reload" title="Reload">&#8635;</button>
</div>
<div class="switcher">{buttons}</div>
<div class="end">
<div id="spinner" hidden></div>
<button id="close-tab" class="close-tab-btn" hidden>Close</button>
</div>
</header>
<script>{key_script}</script>
<script>{chrome_js}</script>
</body>
</html>"#,
        stylesheet = stylesheet,
        base = BASE_CSS,
        buttons = buttons,
        key_script = key_script,
        chrome_js = CHROME_JS,
    )
}

/// Initialisation script that forwards the given chords over IPC.
pub fn key_forward_script(chords: &[String]) -> String {
    let list = serde_json::to_string(chords).unwrap_or_else(|_| "[]".to_string());
    KEY_FORWARD_JS.replace(CHORDS_PLACEHOLDER, &list)
}
