//! Markup contract between the server-side dump templates and the browser layer.
//!
//! The template layer renders every dumped value up front. The browser layer
//! only finds elements by the class names and data attributes below and then
//! toggles classes, inline style and text on them:
//!   - `.unique[data-highlight-unique]`: one occurrence of a dumped value
//!   - `.dd-wrapper` / `.li-wrapper`: collapsible panels (`.show` when open)
//!   - `.arrow-toggle[data-target]`: header that opens/closes its sibling panel
//!   - `.arrow`: glyph indicator inside a header (`#arrow-{token}` / `.arrow-{token}`)

// ── Unique values ────────────────────────────────────────────────────────────

pub const UNIQUE_CLASS: &str = "unique";
pub const ATTR_HIGHLIGHT_UNIQUE: &str = "data-highlight-unique";
pub const DUPLICATE_CLASS_PREFIX: &str = "duplicate-";

// ── Panels ───────────────────────────────────────────────────────────────────

/// Matches either panel flavor.
pub const PANEL_SELECTOR: &str = ".dd-wrapper, .li-wrapper";
pub const SHOW_CLASS: &str = "show";
/// Present on a panel while the widget is animating it.
pub const COLLAPSING_CLASS: &str = "collapsing";
pub const ALWAYS_SHOW_CLASS: &str = "always-show";
pub const ATTRIBUTE_LIST_CLASS: &str = "attribute-list";

pub const ATTR_UNIQUE: &str = "data-unique";
pub const ATTR_UNIQUE_ATTRIBUTES: &str = "data-unique-attributes";
pub const ATTR_UNIQUE_FUNCTIONS: &str = "data-unique-functions";

// ── Toggles and arrows ───────────────────────────────────────────────────────

pub const TOGGLE_CLASS: &str = "arrow-toggle";
/// Toggle class while its panel is hidden.
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const ATTR_TARGET: &str = "data-target";
pub const ATTR_TOGGLE: &str = "data-toggle";
pub const TOGGLE_COLLAPSE: &str = "collapse";
pub const ATTR_DD_TYPE: &str = "data-dd-type";
pub const ATTR_OBJECT_DEPTH: &str = "data-object-depth";
pub const ATTR_ARIA_EXPANDED: &str = "aria-expanded";

pub const ARROW_CLASS: &str = "arrow";
pub const ARROW_PREFIX: &str = "arrow-";

// ── Widget lifecycle events ──────────────────────────────────────────────────

pub const EVENT_SHOW: &str = "show.dd.collapse";
pub const EVENT_SHOWN: &str = "shown.dd.collapse";
pub const EVENT_HIDE: &str = "hide.dd.collapse";
pub const EVENT_HIDDEN: &str = "hidden.dd.collapse";

// ── Toolbar ──────────────────────────────────────────────────────────────────

pub const TOOLBAR_SELECTOR: &str = ".dump-toolbar";

/// Config island rendered by the template, if any.
pub const CONFIG_SCRIPT_ID: &str = "dump-die-config";

/// Class grouping every occurrence of a duplicated token.
pub fn duplicate_class(token: &str) -> String {
    format!("{DUPLICATE_CLASS_PREFIX}{token}")
}

/// Id and class of the arrow bound to `token`.
///
/// Current templates set the id, older ones only the class; lookups try both.
pub fn arrow_name(token: &str) -> String {
    format!("{ARROW_PREFIX}{token}")
}
