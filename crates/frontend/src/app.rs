use crate::highlight::dom::setup_duplicate_highlighting;
use crate::shared::dom::matches;
use crate::toolbar::bind_toolbar;
use crate::tree::collapse::CollapseWidget;
use crate::tree::dom_tree::DomTree;
use crate::tree::{Lifecycle, TreeController};
use contracts::shared::config::{CascadeModifier, InspectorConfig};
use contracts::shared::markup::{EVENT_HIDE, EVENT_SHOW, PANEL_SELECTOR, TOGGLE_CLASS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

/// Inspector behaviors wired into one page.
///
/// Listeners are attached once, in [`mount`]. Settings they read at event time
/// live here so [`Mount::apply`] can swap them later.
pub struct Mount {
    document: Document,
    controller: Rc<TreeController<DomTree>>,
    widget: Rc<CollapseWidget>,
    modifier: Rc<Cell<CascadeModifier>>,
    highlighted: Cell<bool>,
    toolbar_buttons: RefCell<Vec<Element>>,
}

/// Wire the inspector behaviors into an already rendered dump page.
pub fn mount(document: &Document, config: &InspectorConfig) -> Result<Mount, JsValue> {
    let controller = Rc::new(TreeController::new(DomTree::new(document.clone())));
    let widget = Rc::new(CollapseWidget::new(config.transition_ms));
    let modifier = Rc::new(Cell::new(config.cascade_modifier));

    listen_toggle_clicks(document, controller.clone(), widget.clone(), modifier.clone())?;
    listen_lifecycle(document, EVENT_SHOW, Lifecycle::ShowStart, controller.clone())?;
    listen_lifecycle(document, EVENT_HIDE, Lifecycle::HideStart, controller.clone())?;

    let mount = Mount {
        document: document.clone(),
        controller,
        widget,
        modifier,
        highlighted: Cell::new(false),
        toolbar_buttons: RefCell::new(Vec::new()),
    };
    mount.apply(config);
    log::debug!("dump inspector mounted");
    Ok(mount)
}

impl Mount {
    /// Apply `config` to the running page.
    ///
    /// Highlighting is a one-shot pass over the page: it runs the first time it
    /// is enabled and is not undone later. Toolbar buttons already bound stay
    /// bound.
    pub fn apply(&self, config: &InspectorConfig) {
        self.widget.set_transition_ms(config.transition_ms);
        self.modifier.set(config.cascade_modifier);

        if config.highlight_duplicates && !self.highlighted.get() {
            match setup_duplicate_highlighting(&self.document) {
                Ok(_) => self.highlighted.set(true),
                Err(err) => log::warn!("duplicate highlighting failed: {err:?}"),
            }
        }

        let buttons = bind_toolbar(
            &self.document,
            &config.toolbar_selector,
            &self.controller,
            &mut self.toolbar_buttons.borrow_mut(),
        );
        log::debug!("{buttons} toolbar buttons bound");
    }
}

fn modifier_held(event: &MouseEvent, modifier: CascadeModifier) -> bool {
    match modifier {
        CascadeModifier::Ctrl => event.ctrl_key(),
        CascadeModifier::Shift => event.shift_key(),
        CascadeModifier::Alt => event.alt_key(),
        CascadeModifier::Meta => event.meta_key(),
    }
}

/// One delegated listener for every arrow toggle. A held modifier cascades
/// over the subtree first, then the widget flips the toggle's own panel.
fn listen_toggle_clicks(
    document: &Document,
    controller: Rc<TreeController<DomTree>>,
    widget: Rc<CollapseWidget>,
    modifier: Rc<Cell<CascadeModifier>>,
) -> Result<(), JsValue> {
    let toggle_selector = format!(".{TOGGLE_CLASS}");
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target() else { return };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        let Ok(Some(toggle)) = element.closest(&toggle_selector) else {
            return;
        };
        e.prevent_default();

        if modifier_held(&e, modifier.get()) {
            controller.cascade(&toggle);
        }
        if let Err(err) = widget.toggle(&toggle) {
            log::warn!("panel toggle failed: {err:?}");
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn listen_lifecycle(
    document: &Document,
    name: &str,
    lifecycle: Lifecycle,
    controller: Rc<TreeController<DomTree>>,
) -> Result<(), JsValue> {
    let on_event = Closure::wrap(Box::new(move |e: Event| {
        let Some(panel) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if matches(&panel, PANEL_SELECTOR) {
            controller.dispatch(lifecycle, &panel);
        }
    }) as Box<dyn FnMut(Event)>);

    document.add_event_listener_with_callback(name, on_event.as_ref().unchecked_ref())?;
    on_event.forget();
    Ok(())
}
