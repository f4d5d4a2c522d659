//! Collapsible panel widget.
//!
//! Owns the open/close flip of a single panel. Each flip is announced on the
//! panel with bubbling events: `show.dd.collapse` / `hide.dd.collapse` before
//! the change, `shown.dd.collapse` / `hidden.dd.collapse` once the transition
//! is over. While a panel is in transition it carries the `collapsing` class
//! and further clicks on it are ignored.

use super::dom_tree::sync_headers;
use crate::shared::dom::{has_class, set_class, target_panel};
use contracts::shared::markup::{
    ATTR_TOGGLE, COLLAPSING_CLASS, EVENT_HIDDEN, EVENT_HIDE, EVENT_SHOW, EVENT_SHOWN, SHOW_CLASS,
    TOGGLE_COLLAPSE,
};
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Element};

pub struct CollapseWidget {
    transition_ms: Cell<u32>,
}

impl CollapseWidget {
    pub fn new(transition_ms: u32) -> Self {
        Self {
            transition_ms: Cell::new(transition_ms),
        }
    }

    /// Applies to flips started after the call.
    pub fn set_transition_ms(&self, transition_ms: u32) {
        self.transition_ms.set(transition_ms);
    }

    /// Flip the panel `toggle` points at.
    ///
    /// Headers without `data-toggle="collapse"` are inert; the templates
    /// render always-visible sections that way.
    pub fn toggle(&self, toggle: &Element) -> Result<(), JsValue> {
        if toggle.get_attribute(ATTR_TOGGLE).as_deref() != Some(TOGGLE_COLLAPSE) {
            return Ok(());
        }
        let Some(panel) = target_panel(toggle) else {
            return Ok(());
        };
        if has_class(&panel, COLLAPSING_CLASS) {
            return Ok(());
        }

        let showing = !has_class(&panel, SHOW_CLASS);
        let (start, end) = if showing {
            (EVENT_SHOW, EVENT_SHOWN)
        } else {
            (EVENT_HIDE, EVENT_HIDDEN)
        };

        dispatch(&panel, start)?;
        set_class(&panel, SHOW_CLASS, showing);
        sync_headers(&panel, showing);

        let transition_ms = self.transition_ms.get();
        if transition_ms == 0 {
            return dispatch(&panel, end);
        }

        set_class(&panel, COLLAPSING_CLASS, true);
        Timeout::new(transition_ms, move || {
            set_class(&panel, COLLAPSING_CLASS, false);
            if let Err(err) = dispatch(&panel, end) {
                log::warn!("failed to dispatch `{end}`: {err:?}");
            }
        })
        .forget();
        Ok(())
    }
}

fn dispatch(panel: &Element, name: &str) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    panel.dispatch_event(&event)?;
    Ok(())
}
