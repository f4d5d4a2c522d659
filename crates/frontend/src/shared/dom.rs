//! Small helpers over `web_sys` queries used by the highlighter and the tree.

use contracts::shared::markup::{ATTR_TARGET, PANEL_SELECTOR, TOGGLE_CLASS};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Live collection snapshot, in document order.
pub fn collect_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn collect_nodes(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle class `{class}`: {err:?}");
    }
}

/// `matches` that treats an invalid selector as no match.
pub fn matches(element: &Element, selector: &str) -> bool {
    element.matches(selector).unwrap_or(false)
}

fn siblings(element: &Element) -> Vec<Element> {
    let Some(parent) = element.parent_element() else {
        return Vec::new();
    };
    collect_elements(&parent.children())
        .into_iter()
        .filter(|child| child != element)
        .collect()
}

/// Panel opened by `toggle`: a sibling panel matching its `data-target`.
pub fn target_panel(toggle: &Element) -> Option<Element> {
    let target = toggle.get_attribute(ATTR_TARGET)?;
    siblings(toggle)
        .into_iter()
        .find(|sibling| matches(sibling, &target) && matches(sibling, PANEL_SELECTOR))
}

/// Header toggles whose `data-target` resolves to `panel`.
pub fn header_toggles(panel: &Element) -> Vec<Element> {
    siblings(panel)
        .into_iter()
        .filter(|sibling| has_class(sibling, TOGGLE_CLASS))
        .filter(|toggle| {
            toggle
                .get_attribute(ATTR_TARGET)
                .is_some_and(|target| matches(panel, &target))
        })
        .collect()
}
