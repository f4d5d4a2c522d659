//! In-memory dump tree. Behaves like the page with the panel widget attached:
//! clicks flip the target panel and queue a lifecycle event.

use super::{ArrowSlot, CollapseTree, Lifecycle};
use contracts::enums::panel_state::{Glyph, PanelState};
use contracts::enums::section_category::SectionCategory;
use std::cell::{Cell, RefCell};

pub type PanelId = usize;
pub type ToggleId = usize;

#[derive(Debug, Clone, PartialEq)]
struct Panel {
    parent: Option<PanelId>,
    shown: bool,
    always_visible: bool,
    transitioning: bool,
    own: Option<String>,
    attributes: Option<String>,
    functions: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct Toggle {
    parent: Option<PanelId>,
    target: PanelId,
    category: SectionCategory,
    depth: Option<u32>,
    /// Sits in an attribute-list directly inside `parent`.
    section: bool,
    interactive: bool,
    collapsed: bool,
    arrow_token: String,
    arrow: String,
}

#[derive(Default)]
pub struct FakeTree {
    panels: RefCell<Vec<Panel>>,
    toggles: RefCell<Vec<Toggle>>,
    events: RefCell<Vec<(Lifecycle, PanelId)>>,
    clicks: Cell<usize>,
}

impl FakeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapsed object header plus its panel.
    pub fn object(&self, parent: Option<PanelId>, token: &str, depth: Option<u32>) -> (ToggleId, PanelId) {
        let panel = self.push_panel(Panel {
            parent,
            shown: false,
            always_visible: false,
            transitioning: false,
            own: Some(token.to_string()),
            attributes: None,
            functions: None,
        });
        let toggle = self.push_toggle(Toggle {
            parent,
            target: panel,
            category: SectionCategory::Type,
            depth,
            section: false,
            interactive: true,
            collapsed: true,
            arrow_token: token.to_string(),
            arrow: Glyph::Collapsed.as_str().to_string(),
        });
        (toggle, panel)
    }

    /// Attribute or function section of an object panel. Always-visible
    /// sections start open with an inert header and no arrow.
    pub fn section(&self, object: PanelId, category: SectionCategory, always_visible: bool) -> (ToggleId, PanelId) {
        let owner = self.panels.borrow()[object].own.clone().unwrap_or_default();
        let token = match category {
            SectionCategory::Func => format!("{owner}-functions"),
            _ => format!("{owner}-attributes"),
        };
        let panel = self.push_panel(Panel {
            parent: Some(object),
            shown: always_visible,
            always_visible,
            transitioning: false,
            own: None,
            attributes: (category != SectionCategory::Func).then(|| token.clone()),
            functions: (category == SectionCategory::Func).then(|| token.clone()),
        });
        let glyph = if always_visible { Glyph::Blank } else { Glyph::Collapsed };
        let toggle = self.push_toggle(Toggle {
            parent: Some(object),
            target: panel,
            category,
            depth: None,
            section: true,
            interactive: !always_visible,
            collapsed: !always_visible,
            arrow_token: token,
            arrow: glyph.as_str().to_string(),
        });
        (toggle, panel)
    }

    pub fn drain_events(&self) -> Vec<(Lifecycle, PanelId)> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn arrow(&self, toggle: ToggleId) -> String {
        self.toggles.borrow()[toggle].arrow.clone()
    }

    pub fn panels(&self) -> Vec<PanelId> {
        (0..self.panels.borrow().len()).collect()
    }

    /// Number of `click` calls, including ones the widget ignored.
    pub fn clicks(&self) -> usize {
        self.clicks.get()
    }

    pub fn begin_transition(&self, panel: PanelId) {
        self.panels.borrow_mut()[panel].transitioning = true;
    }

    pub fn end_transition(&self, panel: PanelId) {
        self.panels.borrow_mut()[panel].transitioning = false;
    }

    /// Shown flags plus toggle class/arrow state, for whole-page comparisons.
    pub fn snapshot(&self) -> (Vec<bool>, Vec<(bool, String)>) {
        let panels = self.panels.borrow().iter().map(|p| p.shown).collect();
        let toggles = self
            .toggles
            .borrow()
            .iter()
            .map(|t| (t.collapsed, t.arrow.clone()))
            .collect();
        (panels, toggles)
    }

    fn push_panel(&self, panel: Panel) -> PanelId {
        let mut panels = self.panels.borrow_mut();
        panels.push(panel);
        panels.len() - 1
    }

    fn push_toggle(&self, toggle: Toggle) -> ToggleId {
        let mut toggles = self.toggles.borrow_mut();
        toggles.push(toggle);
        toggles.len() - 1
    }

    fn is_inside(&self, mut panel: Option<PanelId>, ancestor: PanelId) -> bool {
        let panels = self.panels.borrow();
        while let Some(current) = panel {
            if current == ancestor {
                return true;
            }
            panel = panels[current].parent;
        }
        false
    }

    fn sync_headers(&self, panel: PanelId, shown: bool) {
        for toggle in self.toggles.borrow_mut().iter_mut().filter(|t| t.target == panel) {
            toggle.collapsed = !shown;
        }
    }

    fn set_arrows(&self, glyph: Glyph, mut filter: impl FnMut(&Toggle) -> bool) {
        for toggle in self.toggles.borrow_mut().iter_mut() {
            if filter(&*toggle) {
                toggle.arrow = glyph.as_str().to_string();
            }
        }
    }
}

impl CollapseTree for FakeTree {
    type Toggle = ToggleId;
    type Panel = PanelId;

    fn toggles(&self) -> Vec<ToggleId> {
        (0..self.toggles.borrow().len()).collect()
    }

    fn category(&self, toggle: &ToggleId) -> Option<SectionCategory> {
        Some(self.toggles.borrow()[*toggle].category)
    }

    fn depth(&self, toggle: &ToggleId) -> Option<u32> {
        self.toggles.borrow()[*toggle].depth
    }

    fn state(&self, toggle: &ToggleId) -> PanelState {
        let (collapsed, target) = {
            let toggles = self.toggles.borrow();
            (toggles[*toggle].collapsed, toggles[*toggle].target)
        };
        let transitioning = self.panels.borrow()[target].transitioning;
        match (collapsed, transitioning) {
            (true, true) => PanelState::Collapsing,
            (true, false) => PanelState::Collapsed,
            (false, true) => PanelState::Expanding,
            (false, false) => PanelState::Expanded,
        }
    }

    fn click(&self, toggle: &ToggleId) {
        self.clicks.set(self.clicks.get() + 1);
        let (interactive, target) = {
            let toggles = self.toggles.borrow();
            (toggles[*toggle].interactive, toggles[*toggle].target)
        };
        if !interactive || self.panels.borrow()[target].transitioning {
            return;
        }

        let showing = !self.panels.borrow()[target].shown;
        let event = if showing { Lifecycle::ShowStart } else { Lifecycle::HideStart };
        self.events.borrow_mut().push((event, target));
        self.panels.borrow_mut()[target].shown = showing;
        self.sync_headers(target, showing);
    }

    fn target(&self, toggle: &ToggleId) -> Option<PanelId> {
        Some(self.toggles.borrow()[*toggle].target)
    }

    fn section_toggles(&self, panel: &PanelId) -> Vec<ToggleId> {
        self.toggles
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.section && t.parent == Some(*panel))
            .map(|(id, _)| id)
            .collect()
    }

    fn descendants(&self, panel: &PanelId) -> Vec<PanelId> {
        let parents: Vec<Option<PanelId>> = self.panels.borrow().iter().map(|p| p.parent).collect();
        parents
            .into_iter()
            .enumerate()
            .filter(|(_, parent)| self.is_inside(*parent, *panel))
            .map(|(id, _)| id)
            .collect()
    }

    fn is_shown(&self, panel: &PanelId) -> bool {
        self.panels.borrow()[*panel].shown
    }

    fn set_shown(&self, panel: &PanelId, shown: bool) {
        self.panels.borrow_mut()[*panel].shown = shown;
        self.sync_headers(*panel, shown);
    }

    fn is_always_visible(&self, panel: &PanelId) -> bool {
        self.panels.borrow()[*panel].always_visible
    }

    fn token(&self, panel: &PanelId, slot: ArrowSlot) -> Option<String> {
        let panels = self.panels.borrow();
        let panel = &panels[*panel];
        match slot {
            ArrowSlot::Own => panel.own.clone(),
            ArrowSlot::Attributes => panel.attributes.clone(),
            ArrowSlot::Functions => panel.functions.clone(),
        }
    }

    fn set_token_arrows(&self, token: &str, glyph: Glyph) {
        self.set_arrows(glyph, |t| t.arrow_token == token);
    }

    fn set_nested_arrows(&self, panel: &PanelId, glyph: Glyph) {
        let inside: Vec<bool> = self
            .toggles
            .borrow()
            .iter()
            .map(|t| self.is_inside(t.parent, *panel))
            .collect();
        let mut index = 0;
        self.set_arrows(glyph, |_| {
            index += 1;
            inside[index - 1]
        });
    }

    fn set_header_arrows(&self, panel: &PanelId, glyph: Glyph) {
        self.set_arrows(glyph, |t| t.target == *panel);
    }
}
