//! Expand/collapse state of the dump tree.
//!
//! The panel widget ([`collapse`]) flips one panel per click and announces it
//! with show/hide start events. [`TreeController`] reacts to those events to
//! keep arrows in sync, and adds the page's bulk behaviors on top: the
//! modifier-click cascade over a whole subtree, and the toolbar commands.
//!
//! The controller only talks to the page through [`CollapseTree`], so its
//! rules are exercised in tests against an in-memory tree.

pub mod collapse;
pub mod dom_tree;
#[cfg(test)]
mod fake;

use contracts::enums::panel_state::{Direction, Glyph, PanelState};
use contracts::enums::section_category::SectionCategory;
use contracts::shared::markup::{ATTR_UNIQUE, ATTR_UNIQUE_ATTRIBUTES, ATTR_UNIQUE_FUNCTIONS};
use contracts::shared::toolbar::{Scope, ToolbarCommand};

/// Which identity token of a panel an arrow is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSlot {
    Own,
    Attributes,
    Functions,
}

impl ArrowSlot {
    pub const ALL: [ArrowSlot; 3] = [ArrowSlot::Own, ArrowSlot::Attributes, ArrowSlot::Functions];

    pub fn attribute(&self) -> &'static str {
        match self {
            ArrowSlot::Own => ATTR_UNIQUE,
            ArrowSlot::Attributes => ATTR_UNIQUE_ATTRIBUTES,
            ArrowSlot::Functions => ATTR_UNIQUE_FUNCTIONS,
        }
    }
}

/// Start signals emitted by the panel widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    ShowStart,
    HideStart,
}

/// Page capabilities the controller needs.
pub trait CollapseTree {
    type Toggle: Clone;
    type Panel: Clone;

    /// Every arrow toggle, in document order.
    fn toggles(&self) -> Vec<Self::Toggle>;
    fn category(&self, toggle: &Self::Toggle) -> Option<SectionCategory>;
    fn depth(&self, toggle: &Self::Toggle) -> Option<u32>;
    fn state(&self, toggle: &Self::Toggle) -> PanelState;
    /// Same path as a plain user click: the widget flips the target panel.
    fn click(&self, toggle: &Self::Toggle);
    fn target(&self, toggle: &Self::Toggle) -> Option<Self::Panel>;
    /// Toggles of the attribute-list sections directly inside `panel`.
    fn section_toggles(&self, panel: &Self::Panel) -> Vec<Self::Toggle>;
    /// Panels nested anywhere inside `panel`, not including it.
    fn descendants(&self, panel: &Self::Panel) -> Vec<Self::Panel>;
    fn is_shown(&self, panel: &Self::Panel) -> bool;
    /// Force the shown state without going through the widget.
    fn set_shown(&self, panel: &Self::Panel, shown: bool);
    fn is_always_visible(&self, panel: &Self::Panel) -> bool;
    fn token(&self, panel: &Self::Panel, slot: ArrowSlot) -> Option<String>;
    /// Arrows bound to `token`.
    fn set_token_arrows(&self, token: &str, glyph: Glyph);
    /// Every arrow nested inside `panel`.
    fn set_nested_arrows(&self, panel: &Self::Panel, glyph: Glyph);
    /// Arrows in the headers that toggle `panel`.
    fn set_header_arrows(&self, panel: &Self::Panel, glyph: Glyph);
}

pub struct TreeController<T> {
    tree: T,
}

impl<T: CollapseTree> TreeController<T> {
    pub fn new(tree: T) -> Self {
        Self { tree }
    }

    #[cfg(test)]
    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn dispatch(&self, event: Lifecycle, panel: &T::Panel) {
        match event {
            Lifecycle::ShowStart => self.on_expand_start(panel),
            Lifecycle::HideStart => self.on_collapse_start(panel),
        }
    }

    pub fn on_expand_start(&self, panel: &T::Panel) {
        self.sync_arrows(panel, Glyph::Expanded);
    }

    pub fn on_collapse_start(&self, panel: &T::Panel) {
        self.sync_arrows(panel, Glyph::Collapsed);
    }

    /// Point the panel's arrows the way it is about to go. Sections of an
    /// always-visible panel keep their blank arrows.
    fn sync_arrows(&self, panel: &T::Panel, glyph: Glyph) {
        let always_visible = self.tree.is_always_visible(panel);
        for slot in ArrowSlot::ALL {
            if slot != ArrowSlot::Own && always_visible {
                continue;
            }
            if let Some(token) = self.tree.token(panel, slot) {
                self.tree.set_token_arrows(&token, glyph);
            }
        }
    }

    /// Modifier-click: carry the subtree under `toggle` along with it.
    ///
    /// Runs before the widget flips the toggle's own panel, so the current
    /// state of that panel decides the direction: a shown panel collapses every
    /// descendant, a hidden one expands them. Always-visible descendants end up
    /// shown with a blank arrow either way.
    ///
    /// Skipped while the panel is in transition: the widget ignores that click,
    /// so the subtree would end up out of step with its parent.
    pub fn cascade(&self, toggle: &T::Toggle) {
        if self.tree.state(toggle).is_transitioning() {
            return;
        }
        let Some(panel) = self.tree.target(toggle) else {
            return;
        };
        let expand = !self.tree.is_shown(&panel);
        let descendants = self.tree.descendants(&panel);

        for descendant in &descendants {
            self.tree.set_shown(descendant, expand);
        }
        self.tree.set_nested_arrows(&panel, Glyph::for_shown(expand));

        for descendant in descendants.iter().filter(|d| self.tree.is_always_visible(d)) {
            self.tree.set_shown(descendant, true);
            self.tree.set_header_arrows(descendant, Glyph::Blank);
        }

        let direction = if expand { Direction::Expand } else { Direction::Collapse };
        log::debug!("cascade {}: {} nested panels", direction.code(), descendants.len());
    }

    /// Run a toolbar command. Returns the number of toggles clicked.
    ///
    /// Toggles already at (or heading to) the target state are left alone.
    /// Depth commands also drive the attribute-list sections of each matching
    /// panel, so the object and its attribute list move together.
    pub fn apply_to_all(&self, command: ToolbarCommand) -> usize {
        let mut clicks = 0;
        for toggle in self.tree.toggles() {
            let category = self.tree.category(&toggle);
            let depth = self.tree.depth(&toggle);
            if !command.scope.matches(category, depth) {
                continue;
            }

            clicks += self.drive(&toggle, command.direction);

            if let Scope::Depth(_) = command.scope {
                if let Some(panel) = self.tree.target(&toggle) {
                    for section in self.tree.section_toggles(&panel) {
                        clicks += self.drive(&section, command.direction);
                    }
                }
            }
        }
        clicks
    }

    fn drive(&self, toggle: &T::Toggle, direction: Direction) -> usize {
        if let Some(panel) = self.tree.target(toggle) {
            if self.tree.is_always_visible(&panel) {
                return 0;
            }
        }
        if !self.tree.state(toggle).needs(direction) {
            return 0;
        }
        self.tree.click(toggle);
        1
    }
}
