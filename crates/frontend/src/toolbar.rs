//! Utility toolbar: one click handler per button, all routed through
//! [`TreeController::apply_to_all`].

use crate::shared::dom::collect_nodes;
use crate::tree::dom_tree::DomTree;
use crate::tree::TreeController;
use contracts::shared::toolbar::ToolbarCommand;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

/// Attach the toolbar buttons found under `toolbar_selector`, skipping the
/// ones in `bound`. Returns how many were newly bound; a page rendered
/// without the toolbar binds none.
pub fn bind_toolbar(
    document: &Document,
    toolbar_selector: &str,
    controller: &Rc<TreeController<DomTree>>,
    bound: &mut Vec<Element>,
) -> usize {
    let candidates = match document.query_selector_all(&format!("{toolbar_selector} [id]")) {
        Ok(list) => collect_nodes(&list),
        Err(err) => {
            log::warn!("invalid toolbar selector `{toolbar_selector}`: {err:?}");
            return 0;
        }
    };

    let mut added = 0;
    for button in candidates {
        if bound.contains(&button) {
            continue;
        }
        let id = button.id();
        let command = match ToolbarCommand::from_control_id(&id) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("toolbar: {err}");
                continue;
            }
        };

        let controller = controller.clone();
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            let started = js_sys::Date::now();
            let clicks = controller.apply_to_all(command);
            log::debug!(
                "{id}: {clicks} toggles in {:.1}ms",
                js_sys::Date::now() - started
            );
        }) as Box<dyn FnMut(Event)>);

        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
        bound.push(button);
        added += 1;
    }
    added
}
