pub mod app;
pub mod highlight;
pub mod shared;
pub mod toolbar;
pub mod tree;

use contracts::shared::config::{load_config, InspectorConfig};
use contracts::shared::markup::CONFIG_SCRIPT_ID;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

// Listeners are page-lifetime; mounting twice would double every handler.
thread_local! {
    static MOUNT: RefCell<Option<app::Mount>> = const { RefCell::new(None) };
}

fn init_logging(config: &InspectorConfig) {
    // initializes logging using the `log` crate
    if console_log::init_with_level(config.level()).is_err() {
        // logger already installed; still honor the new level
        log::set_max_level(config.level().to_level_filter());
    }
    console_error_panic_hook::set_once();
}

/// Mount on first call; afterwards apply `config` to the existing mount.
fn mount_or_apply(document: &Document, config: &InspectorConfig) -> Result<(), JsValue> {
    MOUNT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_ref() {
            Some(mount) => {
                mount.apply(config);
                log::debug!("dump inspector reconfigured");
            }
            None => *slot = Some(app::mount(document, config)?),
        }
        Ok(())
    })
}

fn is_mounted() -> bool {
    MOUNT.with(|slot| slot.borrow().is_some())
}

/// Read the config island rendered by the template.
fn page_config(document: &Document) -> anyhow::Result<InspectorConfig> {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    load_config(raw.as_deref())
}

fn boot(document: &Document) {
    if is_mounted() {
        log::debug!("dump inspector mounted by host, skipping page config");
        return;
    }
    let (config, problem) = match page_config(document) {
        Ok(config) => (config, None),
        Err(err) => (InspectorConfig::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = problem {
        log::warn!("{err:#}, using defaults");
    }
    if let Err(err) = mount_or_apply(document, &config) {
        log::error!("failed to mount dump inspector: {err:?}");
    }
}

/// Mount with configuration supplied by the host page instead of the island.
///
/// Calling it again, or after the automatic mount, applies the new settings to
/// the running page.
#[wasm_bindgen]
pub fn mount_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: InspectorConfig = serde_wasm_bindgen::from_value(config)?;
    init_logging(&config);
    let Some(document) = shared::dom::document() else {
        return Ok(());
    };
    mount_or_apply(&document, &config)
}

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = shared::dom::document() else {
        return;
    };

    if document.ready_state() != "loading" {
        boot(&document);
        return;
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move |_: Event| {
        boot(&ready_document);
    });
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
