//! Browser host backed by `web-sys`.
//!
//! Every handle here is a thin wrapper over a live browser object, so a
//! controller can be rebuilt cheaply from `window` whenever one is needed.
//! The click handler relies on that: it reads the root marker afresh on
//! every click instead of sharing a controller across closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Storage, Window};

use super::{ColorScheme, PreferenceStore, ThemeDocument};
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::{Result, ThemeError};
use crate::theme::Theme;

pub type WebController = ThemeController<WebDocument, WebStore>;

fn dom_err(context: &'static str) -> impl Fn(JsValue) -> ThemeError {
    move |err| ThemeError::Dom(format!("{context}: {err:?}"))
}

fn storage_err(context: &'static str) -> impl Fn(JsValue) -> ThemeError {
    move |err| ThemeError::Storage(format!("{context}: {err:?}"))
}

/// # Errors
///
/// Returns [`ThemeError::Unavailable`] outside a browser window.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(ThemeError::Unavailable("window"))
}

// =============================================================================
// STORE
// =============================================================================

pub struct WebStore {
    storage: Storage,
}

impl WebStore {
    /// # Errors
    ///
    /// Returns an error if `localStorage` is disabled or missing.
    pub fn connect(window: &Window) -> Result<Self> {
        let storage = window
            .local_storage()
            .map_err(storage_err("localStorage"))?
            .ok_or(ThemeError::Unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_err("getItem"))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(storage_err("setItem"))
    }
}

// =============================================================================
// COLOR SCHEME
// =============================================================================

pub struct WebScheme {
    window: Window,
}

impl WebScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorScheme for WebScheme {
    fn prefers_dark(&self, media_query: &str) -> Result<bool> {
        let list = self
            .window
            .match_media(media_query)
            .map_err(dom_err("matchMedia"))?
            .ok_or(ThemeError::Unavailable("matchMedia"))?;
        Ok(list.matches())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

pub struct WebDocument {
    document: Document,
    config: ThemeConfig,
}

impl WebDocument {
    /// # Errors
    ///
    /// Returns an error if the window has no document.
    pub fn connect(window: &Window, config: ThemeConfig) -> Result<Self> {
        let document = window.document().ok_or(ThemeError::Unavailable("document"))?;
        Ok(Self { document, config })
    }

    fn root(&self) -> Result<web_sys::Element> {
        self.document
            .document_element()
            .ok_or(ThemeError::Dom("document has no root element".to_owned()))
    }

    /// `"loading"` until the parser has finished the body.
    pub fn ready_state(&self) -> String {
        self.document.ready_state()
    }
}

impl ThemeDocument for WebDocument {
    fn has_marker(&self, class: &str) -> Result<bool> {
        Ok(self.root()?.class_list().contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<()> {
        let class_list = self.root()?.class_list();
        if present {
            class_list.add_1(class).map_err(dom_err("classList.add"))
        } else {
            class_list.remove_1(class).map_err(dom_err("classList.remove"))
        }
    }

    fn has_control(&self, id: &str) -> Result<bool> {
        Ok(self.document.get_element_by_id(id).is_some())
    }

    fn create_control(&mut self, id: &str, class: &str) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or(ThemeError::Dom("document has no body".to_owned()))?;
        let button = self
            .document
            .create_element("button")
            .map_err(dom_err("createElement"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ThemeError::Dom("created control is not an HTMLElement".to_owned()))?;
        button.set_id(id);
        button.set_class_name(class);

        let config = self.config.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = toggle(&config) {
                log::error!("theme: toggle failed: {err}");
            }
        });
        button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        // The control lives as long as the page.
        on_click.forget();

        body.append_child(&button).map_err(dom_err("appendChild"))?;
        Ok(())
    }

    fn set_control_markup(&mut self, id: &str, markup: &str) -> Result<()> {
        if let Some(control) = self.document.get_element_by_id(id) {
            control.set_inner_html(markup);
        }
        Ok(())
    }

    fn set_control_label(&mut self, id: &str, label: &str) -> Result<()> {
        if let Some(control) = self.document.get_element_by_id(id) {
            control
                .set_attribute("title", label)
                .map_err(dom_err("setAttribute(title)"))?;
            control
                .set_attribute("aria-label", label)
                .map_err(dom_err("setAttribute(aria-label)"))?;
        }
        Ok(())
    }
}

// =============================================================================
// WIRING
// =============================================================================

/// Build a controller over the live page.
///
/// # Errors
///
/// Returns an error if the document or `localStorage` is unavailable.
pub fn connect(window: &Window, config: ThemeConfig) -> Result<WebController> {
    let store = WebStore::connect(window)?;
    let document = WebDocument::connect(window, config.clone())?;
    Ok(ThemeController::new(document, store, config))
}

/// Theme currently shown by the root marker of the live page.
///
/// # Errors
///
/// Returns an error if the document or its root element is unavailable.
pub fn shown_theme(config: &ThemeConfig) -> Result<Theme> {
    let window = window()?;
    let document = WebDocument::connect(&window, config.clone())?;
    Ok(Theme::from_marker(document.has_marker(&config.marker_class)?))
}

/// Click handler: flip the theme shown on the live page.
///
/// # Errors
///
/// Propagates any host failure.
pub fn toggle(config: &ThemeConfig) -> Result<Theme> {
    let window = window()?;
    connect(&window, config.clone())?.handle_click()
}
