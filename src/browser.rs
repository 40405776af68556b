//! Browser bindings: `localStorage`, `matchMedia`, and the live DOM.
//!
//! This module is the only place that touches `web_sys`. Every exported
//! entry point and event handler builds fresh bindings from `window()` when
//! it runs; nothing is held in module-level state. The config a page was
//! mounted with travels in the returned [`ThemeToggle`] handle and in the
//! click handler's closure.
//!
//! Handler failures are logged and otherwise swallowed, so a page missing
//! the toggle markup renders with its stylesheet default.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::PREFERS_DARK_QUERY;
use crate::controller;
use crate::error::ThemeError;
use crate::host::{ColorSchemeProbe, PreferenceStore, ThemeDocument};

// =============================================================
// Host bindings
// =============================================================

/// `window.localStorage`, or nothing if the browser disables it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", describe(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {}", describe(&err));
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQueryProbe {
    window: Window,
}

impl MediaQueryProbe {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia failed: {}", describe(&err));
                false
            }
        }
    }
}

/// The live document, addressed by element id.
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element, ThemeError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::Dom(format!("no element #{id}")))
    }
}

impl ThemeDocument for BrowserDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_owned()))?;
        root.set_attribute(name, value).map_err(|err| ThemeError::Dom(describe(&err)))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.get_attribute(name)
    }

    fn set_element_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element(id)?
            .set_attribute(name, value)
            .map_err(|err| ThemeError::Dom(describe(&err)))
    }

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError> {
        self.element(id)?
            .class_list()
            .add_1(class)
            .map_err(|err| ThemeError::Dom(describe(&err)))
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), ThemeError> {
        self.element(id)?
            .class_list()
            .remove_1(class)
            .map_err(|err| ThemeError::Dom(describe(&err)))
    }
}

/// Everything a handler needs, built from `window()` at call time.
struct Page {
    doc: BrowserDocument,
    store: LocalStorage,
    probe: MediaQueryProbe,
}

impl Page {
    fn current() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| ThemeError::Dom("window has no document".to_owned()))?;
        Ok(Self {
            doc: BrowserDocument::new(document),
            store: LocalStorage::new(&window),
            probe: MediaQueryProbe::new(window),
        })
    }
}

// =============================================================
// Lifecycle
// =============================================================

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Handle to a mounted theme toggle, carrying the config it was mounted with.
#[wasm_bindgen]
pub struct ThemeToggle {
    config: ThemeConfig,
}

#[wasm_bindgen]
impl ThemeToggle {
    /// Flip the theme programmatically, as a click on the toggle would.
    ///
    /// # Errors
    ///
    /// Returns an error if the icon element is missing or storage refuses the write.
    pub fn toggle(&self) -> Result<String, JsValue> {
        let mut page = Page::current()?;
        let theme = controller::toggle(&mut page.doc, &mut page.store, &page.probe, &self.config)?;
        Ok(theme.as_str().to_owned())
    }

    /// The theme resolved from storage and the system preference.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or document.
    pub fn current(&self) -> Result<String, JsValue> {
        let page = Page::current()?;
        let theme = controller::read_preference(&page.store, &page.probe, &self.config);
        Ok(theme.as_str().to_owned())
    }
}

/// Set up the theme toggle with the default markup contract.
///
/// Initialization waits for `DOMContentLoaded` if the document is still
/// loading, and runs immediately otherwise. Mounting again re-applies the
/// theme but does not add a second click listener.
///
/// # Errors
///
/// Returns an error if there is no window or document, or if scheduling on
/// `DOMContentLoaded` fails. Errors during initialization itself are logged.
#[wasm_bindgen]
pub fn mount() -> Result<ThemeToggle, JsValue> {
    when_ready(ThemeConfig::default())
}

/// Like [`mount`], with a JSON override of [`ThemeConfig`].
///
/// # Errors
///
/// Returns an error if the config is invalid, or as for [`mount`].
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config: &str) -> Result<ThemeToggle, JsValue> {
    let config = ThemeConfig::from_json(config).map_err(ThemeError::from)?;
    when_ready(config)
}

fn when_ready(config: ThemeConfig) -> Result<ThemeToggle, JsValue> {
    let page = Page::current()?;
    let document = page.doc.document;
    if document.ready_state() != "loading" {
        on_ready(&config);
        return Ok(ThemeToggle { config });
    }
    let ready_config = config.clone();
    let callback = Closure::once_into_js(move || on_ready(&ready_config));
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref::<js_sys::Function>())?;
    Ok(ThemeToggle { config })
}

fn on_ready(config: &ThemeConfig) {
    if let Err(err) = setup(config) {
        log::error!("theme toggle setup failed: {err}");
    }
}

fn setup(config: &ThemeConfig) -> Result<(), ThemeError> {
    let mut page = Page::current()?;
    let theme = controller::initialize(&mut page.doc, &mut page.store, &page.probe, config)?;

    if !controller::claim_toggle(&mut page.doc, config)? {
        log::debug!("theme toggle #{} already bound", config.toggle_id);
        return Ok(());
    }
    let toggle_el = page.doc.element(&config.toggle_id)?;
    let handler_config = config.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = on_toggle(&handler_config) {
            log::error!("theme toggle failed: {err}");
        }
    });
    toggle_el
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|err| ThemeError::Dom(describe(&err)))?;
    // The listener lives as long as the page.
    on_click.forget();

    log::info!("theme toggle mounted with {theme} theme");
    Ok(())
}

fn on_toggle(config: &ThemeConfig) -> Result<(), ThemeError> {
    let mut page = Page::current()?;
    let theme = controller::toggle(&mut page.doc, &mut page.store, &page.probe, config)?;
    log::debug!("toggled to {theme} theme");
    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
