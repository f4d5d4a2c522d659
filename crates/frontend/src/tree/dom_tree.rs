//! [`CollapseTree`] over the live document.

use super::{ArrowSlot, CollapseTree};
use crate::shared::dom::{
    collect_elements, collect_nodes, has_class, header_toggles, set_class, target_panel,
};
use contracts::enums::panel_state::{Glyph, PanelState};
use contracts::enums::section_category::SectionCategory;
use contracts::shared::markup::{
    arrow_name, ALWAYS_SHOW_CLASS, ARROW_CLASS, ATTRIBUTE_LIST_CLASS, ATTR_ARIA_EXPANDED,
    ATTR_DD_TYPE, ATTR_OBJECT_DEPTH, COLLAPSED_CLASS, COLLAPSING_CLASS, PANEL_SELECTOR,
    SHOW_CLASS, TOGGLE_CLASS,
};
use contracts::shared::toolbar::parse_depth;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Clone)]
pub struct DomTree {
    document: Document,
}

impl DomTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn arrows_for(&self, token: &str) -> Vec<Element> {
        let name = arrow_name(token);
        let mut arrows = collect_elements(&self.document.get_elements_by_class_name(&name));
        if let Some(by_id) = self.document.get_element_by_id(&name) {
            if !arrows.contains(&by_id) {
                arrows.push(by_id);
            }
        }
        arrows
    }
}

pub fn set_glyph(arrows: &[Element], glyph: Glyph) {
    for arrow in arrows {
        arrow.set_text_content(Some(glyph.as_str()));
    }
}

/// Mirror a panel's shown state onto the headers that toggle it.
pub fn sync_headers(panel: &Element, shown: bool) {
    for header in header_toggles(panel) {
        set_class(&header, COLLAPSED_CLASS, !shown);
        let _ = header.set_attribute(ATTR_ARIA_EXPANDED, if shown { "true" } else { "false" });
    }
}

impl CollapseTree for DomTree {
    type Toggle = Element;
    type Panel = Element;

    fn toggles(&self) -> Vec<Element> {
        collect_elements(&self.document.get_elements_by_class_name(TOGGLE_CLASS))
    }

    fn category(&self, toggle: &Element) -> Option<SectionCategory> {
        let code = toggle.get_attribute(ATTR_DD_TYPE)?;
        SectionCategory::from_code(&code)
            .map_err(|err| log::warn!("{err}"))
            .ok()
    }

    fn depth(&self, toggle: &Element) -> Option<u32> {
        let raw = toggle.get_attribute(ATTR_OBJECT_DEPTH)?;
        parse_depth(&raw).map_err(|err| log::warn!("{err}")).ok()
    }

    fn state(&self, toggle: &Element) -> PanelState {
        let collapsed = has_class(toggle, COLLAPSED_CLASS);
        let transitioning = has_class(toggle, COLLAPSING_CLASS)
            || target_panel(toggle).is_some_and(|panel| has_class(&panel, COLLAPSING_CLASS));
        match (collapsed, transitioning) {
            (true, true) => PanelState::Collapsing,
            (true, false) => PanelState::Collapsed,
            (false, true) => PanelState::Expanding,
            (false, false) => PanelState::Expanded,
        }
    }

    fn click(&self, toggle: &Element) {
        if let Some(toggle) = toggle.dyn_ref::<HtmlElement>() {
            toggle.click();
        }
    }

    fn target(&self, toggle: &Element) -> Option<Element> {
        target_panel(toggle)
    }

    fn section_toggles(&self, panel: &Element) -> Vec<Element> {
        collect_elements(&panel.children())
            .into_iter()
            .filter(|child| has_class(child, ATTRIBUTE_LIST_CLASS))
            .flat_map(|list| collect_elements(&list.children()))
            .filter(|child| has_class(child, TOGGLE_CLASS))
            .collect()
    }

    fn descendants(&self, panel: &Element) -> Vec<Element> {
        match panel.query_selector_all(PANEL_SELECTOR) {
            Ok(list) => collect_nodes(&list),
            Err(_) => Vec::new(),
        }
    }

    fn is_shown(&self, panel: &Element) -> bool {
        has_class(panel, SHOW_CLASS)
    }

    fn set_shown(&self, panel: &Element, shown: bool) {
        set_class(panel, SHOW_CLASS, shown);
        sync_headers(panel, shown);
    }

    /// Flagged on the panel itself or on its header.
    fn is_always_visible(&self, panel: &Element) -> bool {
        has_class(panel, ALWAYS_SHOW_CLASS)
            || header_toggles(panel)
                .iter()
                .any(|header| has_class(header, ALWAYS_SHOW_CLASS))
    }

    fn token(&self, panel: &Element, slot: ArrowSlot) -> Option<String> {
        panel
            .get_attribute(slot.attribute())
            .filter(|token| !token.trim().is_empty())
    }

    fn set_token_arrows(&self, token: &str, glyph: Glyph) {
        set_glyph(&self.arrows_for(token), glyph);
    }

    fn set_nested_arrows(&self, panel: &Element, glyph: Glyph) {
        set_glyph(&collect_elements(&panel.get_elements_by_class_name(ARROW_CLASS)), glyph);
    }

    fn set_header_arrows(&self, panel: &Element, glyph: Glyph) {
        for header in header_toggles(panel) {
            set_glyph(&collect_elements(&header.get_elements_by_class_name(ARROW_CLASS)), glyph);
        }
    }
}
