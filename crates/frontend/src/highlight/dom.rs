use super::{group_duplicates, Colors, HoverGroup, Paint};
use crate::shared::dom::{collect_elements, set_class};
use contracts::shared::markup::{duplicate_class, ATTR_HIGHLIGHT_UNIQUE, UNIQUE_CLASS};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

impl Paint for HtmlElement {
    fn paint(&self, colors: Option<&Colors>) {
        let style = self.style();
        let result = match colors {
            Some(colors) => style
                .set_property("color", &colors.foreground)
                .and_then(|_| style.set_property("background-color", &colors.background)),
            None => style
                .remove_property("color")
                .and_then(|_| style.remove_property("background-color"))
                .map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("failed to paint duplicate highlight: {err:?}");
        }
    }
}

/// Link every duplicated unique on the page. Returns the number of groups.
///
/// Runs once at load. Colors for a group are read from the computed style of
/// its first member and of `<body>` before any member is touched.
pub fn setup_duplicate_highlighting(document: &Document) -> Result<usize, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(0);
    };

    let mut uniques: Vec<HtmlElement> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    for element in collect_elements(&document.get_elements_by_class_name(UNIQUE_CLASS)) {
        let Some(token) = element.get_attribute(ATTR_HIGHLIGHT_UNIQUE) else {
            continue;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        uniques.push(element);
        tokens.push(token);
    }

    let background = match document.body() {
        Some(body) => computed(&window, &body, "background-color")?,
        None => String::new(),
    };

    let groups = group_duplicates(&tokens);
    for group in &groups {
        let members: Vec<HtmlElement> = group
            .members
            .iter()
            .map(|&index| uniques[index].clone())
            .collect();

        let class = duplicate_class(&group.token);
        for member in &members {
            set_class(member, &class, true);
        }

        let captured = Colors {
            foreground: computed(&window, &members[0], "color")?,
            background: background.clone(),
        };
        bind_hover(Rc::new(HoverGroup::new(members, &captured)));
    }

    log::debug!(
        "duplicate highlighting: {} uniques, {} groups",
        tokens.len(),
        groups.len()
    );
    Ok(groups.len())
}

fn computed(window: &web_sys::Window, element: &Element, property: &str) -> Result<String, JsValue> {
    match window.get_computed_style(element)? {
        Some(style) => style.get_property_value(property),
        None => Ok(String::new()),
    }
}

fn bind_hover(group: Rc<HoverGroup<HtmlElement>>) {
    for member in group.members() {
        let on_enter = group.clone();
        let mouseenter = Closure::wrap(Box::new(move |_: MouseEvent| {
            on_enter.enter();
        }) as Box<dyn FnMut(MouseEvent)>);

        let on_leave = group.clone();
        let mouseleave = Closure::wrap(Box::new(move |_: MouseEvent| {
            on_leave.leave();
        }) as Box<dyn FnMut(MouseEvent)>);

        let _ = member
            .add_event_listener_with_callback("mouseenter", mouseenter.as_ref().unchecked_ref());
        let _ = member
            .add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref());

        // Listeners live as long as the page.
        mouseenter.forget();
        mouseleave.forget();
    }
}
