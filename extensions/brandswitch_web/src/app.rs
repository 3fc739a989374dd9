//! Page wiring: logging, controller startup and the two change handlers

use crate::dom::WebDocument;
use crate::error::{Result, WebError};
use crate::log::init_logging;
use crate::storage::LocalStorage;
use brandswitch_theme::{ThemeConfig, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlSelectElement};

type WebController = ThemeController<WebDocument, LocalStorage>;

/// Handle to a running theme switcher
#[wasm_bindgen]
pub struct ThemeSwitcher {
    controller: Rc<RefCell<WebController>>,
}

#[wasm_bindgen]
impl ThemeSwitcher {
    /// Active brand identifier
    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.controller.borrow().selection().brand().to_string()
    }

    /// Active mode identifier
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.controller.borrow().selection().mode().to_string()
    }

    /// The `brand-mode` class on the root element
    #[wasm_bindgen(getter, js_name = themeClass)]
    pub fn theme_class(&self) -> String {
        self.controller.borrow().theme_class()
    }

    /// Apply and persist a selection, as if both controls changed
    pub fn select(&self, brand: &str, mode: &str) {
        self.controller
            .borrow_mut()
            .set_selection(brandswitch_theme::Selection::new(brand, mode));
    }

    /// Switch to the next configured mode and return it
    #[wasm_bindgen(js_name = cycleMode)]
    pub fn cycle_mode(&self) -> String {
        self.controller.borrow_mut().cycle_mode().mode().to_string()
    }

    /// Re-read the diagnostic values without changing the theme
    pub fn refresh(&self) {
        self.controller.borrow().refresh_displays();
    }
}

/// Start with the stock configuration. Call once the document is ready.
#[wasm_bindgen]
pub fn start() -> std::result::Result<ThemeSwitcher, JsValue> {
    Ok(mount(ThemeConfig::default())?)
}

/// Start with a TOML configuration document
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: &str) -> std::result::Result<ThemeSwitcher, JsValue> {
    let config = ThemeConfig::from_toml_str(config).map_err(WebError::from)?;
    Ok(mount(config)?)
}

/// Bind the controller to the page: restore the stored selection, sync the
/// two controls to it and listen for their changes.
pub fn mount(config: ThemeConfig) -> Result<ThemeSwitcher> {
    init_logging(&config.log_filter);

    let document = WebDocument::from_global()?;
    let brand_select = document.select(&config.dom.brand_select_id)?;
    let mode_select = document.select(&config.dom.mode_select_id)?;
    let storage = LocalStorage::from_window(document.window());

    let mut controller = ThemeController::new(config, document, storage);
    let selection = controller.start();
    brand_select.set_value(selection.brand());
    mode_select.set_value(selection.mode());
    tracing::info!(theme = %selection, "theme switcher ready");

    let controller = Rc::new(RefCell::new(controller));
    on_change(&brand_select, &controller, |controller, value| {
        controller.select_brand(value)
    })?;
    on_change(&mode_select, &controller, |controller, value| {
        controller.select_mode(value)
    })?;

    Ok(ThemeSwitcher { controller })
}

/// Forward `change` events from `select` to `handler` with the new value.
/// The listener lives as long as the page.
fn on_change(
    select: &HtmlSelectElement,
    controller: &Rc<RefCell<WebController>>,
    handler: fn(&mut WebController, &str),
) -> Result<()> {
    let control = select.clone();
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let value = control.value();
        handler(&mut controller.borrow_mut(), &value);
    });

    select
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .map_err(WebError::from_js)?;
    callback.forget();
    Ok(())
}
