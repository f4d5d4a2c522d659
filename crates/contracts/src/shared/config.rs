use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Behavior settings for the inspector page.
///
/// The template may render them as JSON in
/// `<script type="application/json" id="dump-die-config">`; every field is
/// optional there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    /// `log` level name for the browser console.
    pub log_level: String,
    pub highlight_duplicates: bool,
    /// Key that turns a toggle click into a cascade over the whole subtree.
    pub cascade_modifier: CascadeModifier,
    /// How long a panel stays in its transitional state. 0 finishes at once.
    pub transition_ms: u32,
    pub toolbar_selector: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeModifier {
    Ctrl,
    Shift,
    Alt,
    Meta,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
{
    "log_level": "debug",
    "highlight_duplicates": true,
    "cascade_modifier": "ctrl",
    "transition_ms": 0,
    "toolbar_selector": ".dump-toolbar"
}
"#;

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            highlight_duplicates: true,
            cascade_modifier: CascadeModifier::Ctrl,
            transition_ms: 0,
            toolbar_selector: super::markup::TOOLBAR_SELECTOR.to_string(),
        }
    }
}

impl InspectorConfig {
    /// Level for the console logger. Unknown names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse configuration JSON rendered by the template.
pub fn parse_config(raw: &str) -> anyhow::Result<InspectorConfig> {
    serde_json::from_str(raw).context("malformed inspector config")
}

/// Load configuration from the page's config island.
///
/// Search order:
/// 1. JSON text from the page, if present and non-empty
/// 2. Falls back to embedded default config
pub fn load_config(page_json: Option<&str>) -> anyhow::Result<InspectorConfig> {
    match page_json.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_config(raw),
        None => parse_config(DEFAULT_CONFIG),
    }
}
